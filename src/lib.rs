// ReelPipe Library - video session controller
// One player value owns the catalog, the playback slot and the playlists

pub mod catalog;   // read-only video lookup + catalog file loading
pub mod command;   // input line parsing and outcome rendering
pub mod config;    // settings and preferences
pub mod error;     // recoverable outcomes the player reports
pub mod playback;  // the single now-playing slot
pub mod player;    // ties catalog, playback and playlists together
pub mod playlist;  // named, ordered video lists

// Export the stuff other modules actually use
pub use catalog::{Catalog, Video, VideoLibrary};
pub use command::{execute, Command, CommandError};
pub use config::Config;
pub use error::{PlayerError, PlayerResult};
pub use playback::{PlayTransition, PlaybackSignal, PlaybackState};
pub use player::VideoPlayer;
pub use playlist::{PlaylistListing, PlaylistStore};
