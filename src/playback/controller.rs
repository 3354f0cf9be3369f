use super::{NowPlaying, PlayTransition, PlaybackState};
use crate::catalog::{Catalog, Video};
use crate::error::{PlayerError, PlayerResult};

/// Owns the one playback slot. Ids are checked against the catalog before
/// anything changes, so a failed call never touches the slot.
#[derive(Debug, Default)]
pub struct PlaybackController {
    slot: Option<NowPlaying>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a video, stopping whatever was in the slot first - even if it's the same one
    pub fn play<C: Catalog + ?Sized>(
        &mut self,
        catalog: &C,
        video_id: &str,
    ) -> PlayerResult<PlayTransition> {
        let video = catalog.get(video_id).ok_or(PlayerError::VideoNotFound)?.clone();

        let stopped = self.slot.take().map(|now| now.video);
        self.slot = Some(NowPlaying {
            video: video.clone(),
            paused: false,
        });

        Ok(PlayTransition {
            stopped,
            started: video,
        })
    }

    pub fn play_random<C: Catalog + ?Sized>(&mut self, catalog: &C) -> PlayerResult<PlayTransition> {
        let video_id = catalog.random_id().ok_or(PlayerError::LibraryEmpty)?;
        self.play(catalog, video_id)
    }

    pub fn stop(&mut self) -> PlayerResult<Video> {
        self.slot
            .take()
            .map(|now| now.video)
            .ok_or(PlayerError::NothingPlaying)
    }

    pub fn pause(&mut self) -> PlayerResult<Video> {
        let now = self.slot.as_mut().ok_or(PlayerError::NothingPlaying)?;
        if now.paused {
            return Err(PlayerError::AlreadyPaused {
                title: now.video.title.clone(),
            });
        }
        now.paused = true;
        Ok(now.video.clone())
    }

    pub fn resume(&mut self) -> PlayerResult<Video> {
        let now = self.slot.as_mut().ok_or(PlayerError::NothingPlaying)?;
        if !now.paused {
            return Err(PlayerError::NotPaused);
        }
        now.paused = false;
        Ok(now.video.clone())
    }

    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.slot.as_ref()
    }

    pub fn state(&self) -> PlaybackState {
        match &self.slot {
            None => PlaybackState::Stopped,
            Some(now) if now.paused => PlaybackState::Paused,
            Some(_) => PlaybackState::Playing,
        }
    }
}
