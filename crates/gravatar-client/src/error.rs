//! Error types for the Gravatar client

use std::fmt;

/// Validation errors raised while assembling a thumbnail URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GravatarError {
    /// Rating is not one of the accepted rating codes
    InvalidRating(String),
    /// Size is outside the accepted pixel range
    InvalidSize(u32),
}

impl fmt::Display for GravatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRating(rating) => write!(f, "{rating} is not a valid gravatar rating"),
            Self::InvalidSize(size) => write!(f, "{size} is not a valid image size"),
        }
    }
}

impl std::error::Error for GravatarError {}

/// Result type for Gravatar client operations
pub type Result<T> = std::result::Result<T, GravatarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rating_display() {
        let err = GravatarError::InvalidRating("z".to_string());
        assert_eq!(err.to_string(), "z is not a valid gravatar rating");
    }

    #[test]
    fn test_invalid_size_display() {
        let err = GravatarError::InvalidSize(513);
        assert_eq!(err.to_string(), "513 is not a valid image size");
    }
}
