// The one object holding all mutable state: catalog, playback slot and playlists.
// Each call touches at most the slot or a single playlist and hands back an outcome.

use crate::catalog::{Catalog, Video, VideoLibrary};
use crate::error::PlayerResult;
use crate::playback::{NowPlaying, PlayTransition, PlaybackController, PlaybackState};
use crate::playlist::{PlaylistListing, PlaylistStore};

#[derive(Debug)]
pub struct VideoPlayer<C: Catalog = VideoLibrary> {
    catalog: C,
    playback: PlaybackController,
    playlists: PlaylistStore,
}

impl<C: Catalog> VideoPlayer<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            playback: PlaybackController::new(),
            playlists: PlaylistStore::new(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// Every video in the catalog, ordered by title
    pub fn all_videos(&self) -> Vec<&Video> {
        self.catalog
            .video_ids()
            .into_iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    pub fn play(&mut self, video_id: &str) -> PlayerResult<PlayTransition> {
        self.playback.play(&self.catalog, video_id)
    }

    pub fn play_random(&mut self) -> PlayerResult<PlayTransition> {
        self.playback.play_random(&self.catalog)
    }

    pub fn stop(&mut self) -> PlayerResult<Video> {
        self.playback.stop()
    }

    pub fn pause(&mut self) -> PlayerResult<Video> {
        self.playback.pause()
    }

    pub fn continue_video(&mut self) -> PlayerResult<Video> {
        self.playback.resume()
    }

    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.playback.now_playing()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn create_playlist(&mut self, name: &str) -> PlayerResult<String> {
        self.playlists.create(name).map(str::to_string)
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> PlayerResult<&Video> {
        self.playlists.add_video(&self.catalog, name, video_id)
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> PlayerResult<&Video> {
        self.playlists.remove_video(&self.catalog, name, video_id)
    }

    pub fn playlists(&self) -> PlaylistListing {
        self.playlists.list()
    }

    /// Playlist contents resolved against the catalog, in insertion order
    pub fn show_playlist(&self, name: &str) -> PlayerResult<Vec<&Video>> {
        let ids = self.playlists.show(name)?;
        Ok(ids.iter().filter_map(|id| self.catalog.get(id)).collect())
    }

    pub fn clear_playlist(&mut self, name: &str) -> PlayerResult<()> {
        self.playlists.clear(name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> PlayerResult<()> {
        self.playlists.delete(name).map(|_| ())
    }
}
