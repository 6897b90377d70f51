//! Lazy retrieval of the public profile document and its derived views

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::avatar::Gravatar;
use crate::types::ProfileResponse;

impl Gravatar {
    /// The user's public profile document
    ///
    /// Fetched over HTTP on first access and cached for the lifetime of
    /// this value; later accesses never touch the network again, even
    /// when the fetch failed. Every failure mode (unreachable host,
    /// non-success status, malformed JSON, empty document) reads as an
    /// empty map.
    pub fn profile(&self) -> &Map<String, Value> {
        self.profile.get_or_init(|| self.fetch_profile())
    }

    /// The user's listed URLs
    pub fn urls(&self) -> &[Value] {
        self.list_field("urls")
    }

    /// The user's linked accounts
    pub fn accounts(&self) -> &[Value] {
        self.list_field("accounts")
    }

    /// The linked accounts whose `verified` field is the string `"true"`
    ///
    /// The profile document encodes the flag as a string, not a JSON
    /// bool; entries carrying a boolean `true` are excluded.
    pub fn verified_accounts(&self) -> Vec<&Value> {
        self.accounts()
            .iter()
            .filter(|account| account.get("verified").and_then(Value::as_str) == Some("true"))
            .collect()
    }

    /// The user's instant-messaging handles, listed under the document's
    /// `accounts` key
    pub fn ims(&self) -> &[Value] {
        self.list_field("accounts")
    }

    /// The user's photos
    pub fn photos(&self) -> &[Value] {
        self.list_field("photos")
    }

    /// The user's listed email addresses
    pub fn emails(&self) -> &[Value] {
        self.list_field("emails")
    }

    fn list_field(&self, key: &str) -> &[Value] {
        self.profile()
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn fetch_profile(&self) -> Map<String, Value> {
        let url = format!("{}{}.json", self.profile_origin, self.hash());

        match self.http.get(&url).send() {
            Ok(response) if response.status().is_success() => {
                match response.json::<ProfileResponse>() {
                    Ok(data) => match data.entry.into_iter().next() {
                        Some(entry) => entry,
                        None => {
                            debug!(hash = %self.hash(), "Profile document has no entry");
                            Map::new()
                        }
                    },
                    Err(e) => {
                        warn!(hash = %self.hash(), error = %e, "Failed to parse profile document");
                        Map::new()
                    }
                }
            }
            Ok(response) => {
                debug!(
                    hash = %self.hash(),
                    status = %response.status(),
                    "Profile request returned non-success status"
                );
                Map::new()
            }
            Err(e) => {
                warn!(hash = %self.hash(), error = %e, "Failed to fetch profile document");
                Map::new()
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn with_profile_origin(mut self, origin: &str) -> Self {
        self.profile_origin = origin.to_string();
        self
    }
}
