//! Option and wire types

use serde::Deserialize;
use serde_json::{Map, Value};

/// Presentation options for an avatar thumbnail URL
///
/// Defaults match the service's own: insecure origin, rating `g`, 80 px,
/// no fallback image.
#[derive(Debug, Clone)]
pub struct AvatarOptions {
    /// Serve the image from the HTTPS origin
    pub secure: bool,
    /// Content rating cap, one of `g`, `pg`, `r`, `x` (case-insensitive)
    pub rating: String,
    /// Image size in pixels, 1 to 512 inclusive
    pub size: u32,
    /// Fallback image: a keyword from [`crate::DEFAULT_IMAGES`] or an arbitrary URL
    pub default: Option<String>,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            secure: false,
            rating: "g".to_string(),
            size: 80,
            default: None,
        }
    }
}

/// Profile document endpoint response
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileResponse {
    pub(crate) entry: Vec<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = AvatarOptions::default();
        assert!(!options.secure);
        assert_eq!(options.rating, "g");
        assert_eq!(options.size, 80);
        assert!(options.default.is_none());
    }

    #[test]
    fn test_profile_response_deserialization() {
        let json = r#"{"entry": [{"displayName": "Eric", "urls": []}]}"#;
        let response: ProfileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.entry.len(), 1);
        assert_eq!(
            response.entry[0].get("displayName").and_then(Value::as_str),
            Some("Eric")
        );
    }

    #[test]
    fn test_profile_response_missing_entry_is_an_error() {
        assert!(serde_json::from_str::<ProfileResponse>(r#"{"foo": 1}"#).is_err());
    }
}
