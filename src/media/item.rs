use serde::{Deserialize, Serialize};

/// One entry of the catalog served on `/api`.
///
/// Built fresh for every catalog request and never stored. Two items are the
/// same item when their URLs are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayableItem {
    /// File name as it appears in the watched directory, extension included.
    pub title: String,
    /// Absolute `http://host:port/<percent-encoded title>` address.
    pub url: String,
}

impl PlayableItem {
    /// Build the descriptor for `title` served under `base_url`
    /// (`http://host:port`, no trailing slash).
    pub fn new(title: impl Into<String>, base_url: &str) -> Self {
        let title = title.into();
        let url = format!("{}/{}", base_url, urlencoding::encode(&title));
        Self { title, url }
    }
}
