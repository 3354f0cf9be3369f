use super::{fold_name, Playlist};
use crate::catalog::{Catalog, Video};
use crate::error::{PlayerError, PlayerResult};
use std::collections::HashMap;

/// What a listing of all playlists comes back as. An empty store is its own
/// case so callers can't mistake it for an empty listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistListing {
    NoPlaylists,
    Playlists(Vec<String>),
}

/// Owns every playlist, keyed by case-folded name.
///
/// Anything that takes both a playlist name and a video id checks the
/// playlist first, then the catalog, then membership.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist, returning the stored display name
    pub fn create(&mut self, name: &str) -> PlayerResult<&str> {
        let key = fold_name(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::DuplicateName);
        }

        let playlist = self.playlists.entry(key).or_insert_with(|| Playlist::new(name));
        Ok(playlist.name())
    }

    pub fn add_video<'c, C: Catalog + ?Sized>(
        &mut self,
        catalog: &'c C,
        name: &str,
        video_id: &str,
    ) -> PlayerResult<&'c Video> {
        let playlist = self
            .playlists
            .get_mut(&fold_name(name))
            .ok_or(PlayerError::PlaylistNotFound)?;
        let video = catalog.get(video_id).ok_or(PlayerError::VideoNotFound)?;

        if !playlist.add_video(video_id) {
            return Err(PlayerError::DuplicateVideo);
        }
        Ok(video)
    }

    pub fn remove_video<'c, C: Catalog + ?Sized>(
        &mut self,
        catalog: &'c C,
        name: &str,
        video_id: &str,
    ) -> PlayerResult<&'c Video> {
        let playlist = self
            .playlists
            .get_mut(&fold_name(name))
            .ok_or(PlayerError::PlaylistNotFound)?;
        let video = catalog.get(video_id).ok_or(PlayerError::VideoNotFound)?;

        if !playlist.remove_video(video_id) {
            return Err(PlayerError::VideoNotInPlaylist);
        }
        Ok(video)
    }

    /// Display names, sorted ignoring case
    pub fn list(&self) -> PlaylistListing {
        if self.playlists.is_empty() {
            return PlaylistListing::NoPlaylists;
        }

        // keys are already case-folded and unique, so this is a total order
        let mut keys: Vec<&String> = self.playlists.keys().collect();
        keys.sort();

        PlaylistListing::Playlists(
            keys.into_iter()
                .map(|key| self.playlists[key].name().to_string())
                .collect(),
        )
    }

    /// Video ids in the order they were added
    pub fn show(&self, name: &str) -> PlayerResult<&[String]> {
        self.get(name)
            .map(Playlist::video_ids)
            .ok_or(PlayerError::PlaylistNotFound)
    }

    pub fn clear(&mut self, name: &str) -> PlayerResult<()> {
        let playlist = self
            .playlists
            .get_mut(&fold_name(name))
            .ok_or(PlayerError::PlaylistNotFound)?;
        playlist.clear();
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> PlayerResult<Playlist> {
        self.playlists
            .remove(&fold_name(name))
            .ok_or(PlayerError::PlaylistNotFound)
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&fold_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(&fold_name(name))
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::library::test_library;

    fn names(listing: PlaylistListing) -> Vec<String> {
        match listing {
            PlaylistListing::Playlists(names) => names,
            PlaylistListing::NoPlaylists => panic!("expected playlists"),
        }
    }

    #[test]
    fn test_create_is_case_insensitive() {
        let mut store = PlaylistStore::new();

        assert_eq!(store.create("MyList"), Ok("MyList"));
        assert_eq!(store.create("mylist"), Err(PlayerError::DuplicateName));
        assert_eq!(store.len(), 1);
        assert_eq!(names(store.list()), vec!["MyList"]);
    }

    #[test]
    fn test_add_video_through_any_casing() {
        let library = test_library();
        let mut store = PlaylistStore::new();
        store.create("MyList").unwrap();

        let added = store.add_video(&library, "MyList", "v1").unwrap();
        assert_eq!(added.title, "Video One");
        assert_eq!(
            store.add_video(&library, "MYLIST", "v1"),
            Err(PlayerError::DuplicateVideo)
        );
        assert_eq!(store.show("mylist").unwrap(), ["v1"]);
    }

    #[test]
    fn test_playlist_checked_before_video() {
        let library = test_library();
        let mut store = PlaylistStore::new();

        assert_eq!(
            store.add_video(&library, "ghost", "nope"),
            Err(PlayerError::PlaylistNotFound)
        );
        assert_eq!(
            store.remove_video(&library, "ghost", "nope"),
            Err(PlayerError::PlaylistNotFound)
        );
        assert_eq!(store.show("ghost"), Err(PlayerError::PlaylistNotFound));

        store.create("ghost").unwrap();
        assert_eq!(
            store.add_video(&library, "ghost", "nope"),
            Err(PlayerError::VideoNotFound)
        );
        assert_eq!(
            store.remove_video(&library, "ghost", "nope"),
            Err(PlayerError::VideoNotFound)
        );
        assert_eq!(
            store.remove_video(&library, "ghost", "v1"),
            Err(PlayerError::VideoNotInPlaylist)
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let library = test_library();
        let mut store = PlaylistStore::new();
        store.create("mix").unwrap();
        for id in ["v1", "v2", "v3"] {
            store.add_video(&library, "mix", id).unwrap();
        }

        let removed = store.remove_video(&library, "MIX", "v2").unwrap();
        assert_eq!(removed.id, "v2");
        assert_eq!(store.show("mix").unwrap(), ["v1", "v3"]);
    }

    #[test]
    fn test_list_sorted_ignoring_case() {
        let mut store = PlaylistStore::new();
        assert_eq!(store.list(), PlaylistListing::NoPlaylists);

        for name in ["zebra", "Apple", "mango", "Banana"] {
            store.create(name).unwrap();
        }
        assert_eq!(names(store.list()), vec!["Apple", "Banana", "mango", "zebra"]);
    }

    #[test]
    fn test_clear_keeps_playlist() {
        let library = test_library();
        let mut store = PlaylistStore::new();
        store.create("Chill").unwrap();
        store.add_video(&library, "Chill", "v1").unwrap();
        store.add_video(&library, "Chill", "v2").unwrap();

        store.clear("CHILL").unwrap();
        assert!(store.show("Chill").unwrap().is_empty());
        assert_eq!(store.clear("nope"), Err(PlayerError::PlaylistNotFound));
    }

    #[test]
    fn test_delete() {
        let mut store = PlaylistStore::new();
        store.create("Chill").unwrap();

        let deleted = store.delete("chill").unwrap();
        assert_eq!(deleted.name(), "Chill");
        assert!(!store.contains("Chill"));
        assert_eq!(store.delete("Chill"), Err(PlayerError::PlaylistNotFound));
        assert_eq!(store.list(), PlaylistListing::NoPlaylists);

        // the name is free again once deleted
        assert_eq!(store.create("CHILL"), Ok("CHILL"));
    }
}
