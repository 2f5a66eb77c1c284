use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while synthesizing, tracing or resampling a glyph
#[derive(Error, Debug)]
pub enum GlyphError {
    /// A size, supersample factor or padding ratio is out of range
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// The reference bitmap could not be opened or decoded
    #[error("Unreadable source {path}: {message}")]
    UnreadableSource { path: PathBuf, message: String },

    /// Branch parameters that would draw nothing or never shrink
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// No glyph is registered under the requested name
    #[error("Unknown design: {0}")]
    UnknownDesign(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GlyphError>;

impl GlyphError {
    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self::InvalidDimension(message.into())
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry(message.into())
    }
}

/// Checks that a padding ratio lies in `[0, 0.5)`
pub fn check_padding(padding_ratio: f32) -> Result<()> {
    if !(0.0..0.5).contains(&padding_ratio) {
        return Err(GlyphError::invalid_dimension(format!(
            "padding ratio {} outside [0, 0.5)",
            padding_ratio
        )));
    }
    Ok(())
}

/// Checks that a pixel size is positive
pub fn check_size(what: &str, size: u32) -> Result<()> {
    if size == 0 {
        return Err(GlyphError::invalid_dimension(format!(
            "{} must be positive",
            what
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_bounds() {
        assert!(check_padding(0.0).is_ok());
        assert!(check_padding(0.49).is_ok());
        assert!(check_padding(0.5).is_err());
        assert!(check_padding(-0.01).is_err());
        assert!(check_padding(f32::NAN).is_err());
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = check_size("target size", 0).unwrap_err();
        assert!(matches!(err, GlyphError::InvalidDimension(_)));
        assert!(err.to_string().contains("target size"));
    }
}
