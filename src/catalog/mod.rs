// Video catalog - the read-only side of the player
// Everything else asks it whether an id exists and what it's called

pub mod library;
pub mod video;

pub use library::{CatalogError, VideoLibrary};
pub use video::Video;

/// Read-only lookup the player validates ids against.
pub trait Catalog {
    fn contains(&self, id: &str) -> bool;

    fn get(&self, id: &str) -> Option<&Video>;

    /// All ids, ordered by title
    fn video_ids(&self) -> Vec<&str>;

    /// Uniformly chosen id, `None` when the catalog is empty
    fn random_id(&self) -> Option<&str>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
