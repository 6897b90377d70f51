//! Rust client for the Gravatar avatar and profile API
//!
//! Maps an email address to its Gravatar avatar URL and the public profile
//! document behind it. Thumbnail URLs are derived and validated locally;
//! the profile is fetched over HTTP at most once per [`Gravatar`] instance
//! and cached in memory.
//!
//! # Example
//!
//! ```
//! use gravatar_client::Gravatar;
//!
//! let avatar = Gravatar::new("gridaphobe@gmail.com");
//! assert_eq!(
//!     avatar.thumbnail_url(),
//!     "http://www.gravatar.com/avatar/16b87da510d278999c892cdbdd55c1b6?s=80&r=g"
//! );
//! ```
//!
//! Profile lookups hit the network but never fail from the caller's point
//! of view: an unreachable, missing, or malformed profile reads as an empty
//! document, and its derived views as empty lists.
//!
//! ```no_run
//! use gravatar_client::Gravatar;
//!
//! let avatar = Gravatar::new("gridaphobe@gmail.com");
//! for url in avatar.urls() {
//!     println!("{url}");
//! }
//! ```
//!
//! # API coverage
//!
//! - `GET http(s)://{host}/avatar/{hash}?s=..&r=..[&d=..]` - avatar image URL (assembled, never fetched)
//! - `GET http://www.gravatar.com/{hash}.json` - public profile document

mod avatar;
mod error;
mod profile;
mod types;

pub use avatar::{Gravatar, DEFAULT_IMAGES, MAX_SIZE, MIN_SIZE, RATINGS};
pub use error::{GravatarError, Result};
pub use types::AvatarOptions;
