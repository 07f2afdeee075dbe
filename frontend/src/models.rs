use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoRecord {
    pub id: u32,
    pub title: String,
    pub channel: String,
    pub views: u64,
    pub thumbnail: String,
}

impl VideoRecord {
    /// Case-insensitive substring match against title and channel.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.channel.to_lowercase().contains(needle)
    }
}
