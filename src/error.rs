use thiserror::Error;

/// Fatal overlay setup errors.
///
/// Per-primitive and per-frame conditions are handled by guard conditions on
/// the draw path and never surface here; only initialization can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlayError {
    #[error("failed to initialize overlay: {0}")]
    InitializationFailed(String),
    #[error("invalid font '{name}': size {size} must be positive")]
    InvalidFont { name: String, size: f32 },
}

pub type OverlayResult<T> = Result<T, OverlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OverlayError::InvalidFont {
            name: "droid".to_owned(),
            size: -1.0,
        };
        assert_eq!(err.to_string(), "invalid font 'droid': size -1 must be positive");

        let err = OverlayError::InitializationFailed("no fonts".to_owned());
        assert_eq!(err.to_string(), "failed to initialize overlay: no fonts");
    }
}
