// Playback - the single "now playing" slot and the rules for moving it around

pub mod controller;

pub use controller::PlaybackController;

use crate::catalog::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// Whatever currently occupies the slot. Paused only exists alongside a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackSignal {
    Stopping(Video),
    Playing(Video),
}

/// Result of a play: the video that got bumped (if any) and the one now playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayTransition {
    pub stopped: Option<Video>,
    pub started: Video,
}

impl PlayTransition {
    /// Signals in the order they happened - stop always comes before play
    pub fn signals(&self) -> Vec<PlaybackSignal> {
        let mut signals = Vec::with_capacity(2);
        if let Some(stopped) = &self.stopped {
            signals.push(PlaybackSignal::Stopping(stopped.clone()));
        }
        signals.push(PlaybackSignal::Playing(self.started.clone()));
        signals
    }
}
