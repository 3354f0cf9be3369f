use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Tags joined the way listings show them, e.g. `#cat #animal`
    pub fn tags_string(&self) -> String {
        self.tags.join(" ")
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags_string())
    }
}
