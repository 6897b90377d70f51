//! Avatar identity: email hashing and thumbnail URL assembly

use std::cell::OnceCell;

use md5::{Digest, Md5};
use serde_json::{Map, Value};

use crate::error::{GravatarError, Result};
use crate::types::AvatarOptions;

pub(crate) const BASE_URL: &str = "http://www.gravatar.com/avatar/";
pub(crate) const SECURE_BASE_URL: &str = "https://secure.gravatar.com/avatar/";
pub(crate) const PROFILE_URL: &str = "http://www.gravatar.com/";

/// Rating codes accepted by the avatar endpoint
pub const RATINGS: [&str; 4] = ["g", "pg", "r", "x"];
/// Smallest image size the avatar endpoint serves, in pixels
pub const MIN_SIZE: u32 = 1;
/// Largest image size the avatar endpoint serves, in pixels
pub const MAX_SIZE: u32 = 512;
/// Keywords the `d` parameter accepts in place of a fallback image URL
pub const DEFAULT_IMAGES: [&str; 6] = ["404", "mm", "identicon", "monsterid", "wavatar", "retro"];

/// A Gravatar user, keyed by the MD5 hash of their email address
///
/// The hash is derived once at construction and fixed for the lifetime of
/// the value. Presentation options can be changed afterwards; every change
/// re-runs validation and regenerates the thumbnail URL, so
/// [`thumbnail_url`](Gravatar::thumbnail_url) is never stale.
///
/// Instances are not meant to be shared across threads; each one owns its
/// options and profile cache, and mutation is unsynchronized.
#[derive(Debug)]
pub struct Gravatar {
    hash: String,
    options: AvatarOptions,
    thumbnail: String,
    pub(crate) profile_origin: String,
    pub(crate) profile: OnceCell<Map<String, Value>>,
    pub(crate) http: reqwest::blocking::Client,
}

impl Gravatar {
    /// Create an identity with default options
    pub fn new(email: &str) -> Self {
        Self::with_options(email, AvatarOptions::default())
            .expect("default avatar options are valid")
    }

    /// Create an identity with explicit options
    ///
    /// The thumbnail URL is assembled eagerly, so an unknown rating or an
    /// out-of-range size fails here rather than on first read.
    pub fn with_options(email: &str, options: AvatarOptions) -> Result<Self> {
        let hash = email_hash(email);
        let thumbnail = build_thumbnail_url(&hash, &options)?;
        Ok(Self {
            hash,
            options,
            thumbnail,
            profile_origin: PROFILE_URL.to_string(),
            profile: OnceCell::new(),
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Email hash as lowercase hexadecimal
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Thumbnail URL reflecting the current options
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail
    }

    /// Whether the thumbnail URL uses the HTTPS origin
    pub fn secure(&self) -> bool {
        self.options.secure
    }

    /// Current rating code, as set
    pub fn rating(&self) -> &str {
        &self.options.rating
    }

    /// Current image size in pixels
    pub fn size(&self) -> u32 {
        self.options.size
    }

    /// Current fallback image value, if any
    pub fn default(&self) -> Option<&str> {
        self.options.default.as_deref()
    }

    /// Switch between the HTTP and HTTPS origins and regenerate the
    /// thumbnail URL
    pub fn set_secure(&mut self, secure: bool) -> Result<()> {
        self.options.secure = secure;
        self.regenerate()
    }

    /// Set the rating cap and regenerate the thumbnail URL
    pub fn set_rating(&mut self, rating: &str) -> Result<()> {
        self.options.rating = rating.to_string();
        self.regenerate()
    }

    /// Set the image size and regenerate the thumbnail URL
    pub fn set_size(&mut self, size: u32) -> Result<()> {
        self.options.size = size;
        self.regenerate()
    }

    /// Set or clear the fallback image and regenerate the thumbnail URL
    pub fn set_default(&mut self, default: Option<&str>) -> Result<()> {
        self.options.default = default.map(str::to_string);
        self.regenerate()
    }

    // The new value is stored before regeneration runs, so a failed
    // mutation keeps the previous thumbnail, and every later regeneration
    // fails again until the offending option is corrected.
    fn regenerate(&mut self) -> Result<()> {
        self.thumbnail = build_thumbnail_url(&self.hash, &self.options)?;
        Ok(())
    }
}

/// Hash an email address the way the avatar service expects: trimmed,
/// lowercased, MD5-digested, rendered as lowercase hex
pub(crate) fn email_hash(email: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(email.trim().to_lowercase().as_bytes());
    hex::encode(hasher.finalize())
}

/// Assemble a thumbnail URL, validating the options
///
/// Query parameters are emitted in a stable order: `s`, `r`, then `d`
/// when a fallback image is set. The rating is lowercased in the URL
/// regardless of the case it was stored with.
pub(crate) fn build_thumbnail_url(hash: &str, options: &AvatarOptions) -> Result<String> {
    let rating = options.rating.to_lowercase();
    if !RATINGS.contains(&rating.as_str()) {
        return Err(GravatarError::InvalidRating(options.rating.clone()));
    }
    if !(MIN_SIZE..=MAX_SIZE).contains(&options.size) {
        return Err(GravatarError::InvalidSize(options.size));
    }

    let origin = if options.secure { SECURE_BASE_URL } else { BASE_URL };
    let mut url = format!("{}{}?s={}&r={}", origin, hash, options.size, rating);
    if let Some(ref default) = options.default {
        url.push_str(&format!("&d={}", urlencoding::encode(default)));
    }
    Ok(url)
}
