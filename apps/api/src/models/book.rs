use serde::{Deserialize, Serialize};

/// Top-level body returned by the Google Books volumes endpoint.
///
/// `items` is omitted entirely when the search has no hits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<RawBookRecord>,
}

/// A single upstream search hit, kept close to the wire shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBookRecord {
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawBookRecord {
    /// Upstream title, or the empty string when the record has none.
    pub fn title(&self) -> &str {
        self.volume_info
            .as_ref()
            .and_then(|info| info.title.as_deref())
            .unwrap_or("")
    }
}

/// Display shape served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedBook {
    pub title: String,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    pub description: String,
}

impl FormattedBook {
    /// First listed author, used for log lines.
    pub fn lead_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or("Unknown")
    }
}
