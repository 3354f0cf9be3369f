// Outcomes the player reports back when a command can't go through.
// None of these are fatal - the caller turns them into a message and moves on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("No video is currently playing")]
    NothingPlaying,

    /// Pausing twice is a no-op, we still report which video it was
    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    LibraryEmpty,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    DuplicateName,

    #[error("Video already added")]
    DuplicateVideo,

    #[error("Video is not in playlist")]
    VideoNotInPlaylist,
}

pub type PlayerResult<T> = std::result::Result<T, PlayerError>;
