use std::fmt;

/// Packed 32-bit RGBA color, one byte per channel, red in the low byte
/// (`0xAABBGGRR` as a little-endian word).
///
/// Colors are packed once, when a primitive is constructed. Nothing on the
/// render path unpacks or converts channels.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba(0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Pack four 8-bit channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    /// Pack three 8-bit channels with full alpha.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Convert from normalized float channels, clamping to `[0, 1]`.
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Self::rgba(q(r), q(g), q(b), q(a))
    }

    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba(self.0 & 0x00ff_ffff | (a as u32) << 24)
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rgba({}, {}, {}, {})",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_channels() {
        let c = Rgba::rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.0, 0x4433_2211);
        assert_eq!(c.r(), 0x11);
        assert_eq!(c.g(), 0x22);
        assert_eq!(c.b(), 0x33);
        assert_eq!(c.a(), 0x44);
    }

    #[test]
    fn test_rgb_full_alpha() {
        assert_eq!(Rgba::rgb(255, 0, 0).a(), 255);
        assert_eq!(Rgba::WHITE.0, 0xffff_ffff);
    }

    #[test]
    fn test_from_f32_clamps() {
        let c = Rgba::from_f32(1.5, -0.25, 0.5, 1.0);
        assert_eq!(c.r(), 255);
        assert_eq!(c.g(), 0);
        assert_eq!(c.b(), 128);
        assert_eq!(c.a(), 255);
    }

    #[test]
    fn test_with_alpha() {
        let c = Rgba::rgb(10, 20, 30).with_alpha(99);
        assert_eq!(c.r(), 10);
        assert_eq!(c.a(), 99);
    }
}
