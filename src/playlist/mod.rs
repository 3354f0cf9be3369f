// Playlists - named, ordered lists of video ids
// Names are unique ignoring case, but we always show them the way they were typed

pub mod store;

pub use store::{PlaylistListing, PlaylistStore};

/// Lookup key for a playlist name
pub fn fold_name(name: &str) -> String {
    name.to_uppercase()
}

/// A single playlist. The display name never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video_ids: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> String {
        fold_name(&self.name)
    }

    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append to the end, ignoring ids that are already in the list
    pub fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.video_ids.push(video_id.to_string());
        true
    }

    /// Remove by id, keeping the order of everything else
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        if let Some(pos) = self.video_ids.iter().position(|id| id == video_id) {
            self.video_ids.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}
