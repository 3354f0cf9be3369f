// Command surface - turns an input line into something the player understands
// and renders whatever comes back into the lines the user sees

pub mod render;

pub use render::{execute, HELP_TEXT};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowPlaylist { name: String },
    ShowAllPlaylists,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please enter a command, type HELP for a list of available commands.")]
    Empty,

    #[error("Unknown command '{0}', type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Usage: {usage}")]
    WrongArguments { usage: &'static str },

    #[error("{0} is not supported")]
    Unsupported(String),
}

impl Command {
    /// Parse one input line. The command word is case-insensitive, arguments are kept as typed.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_uppercase();
        let args: Vec<&str> = words.collect();

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => no_args(&args, "NUMBER_OF_VIDEOS", Command::NumberOfVideos)?,
            "SHOW_ALL_VIDEOS" => no_args(&args, "SHOW_ALL_VIDEOS", Command::ShowAllVideos)?,
            "PLAY" => match args.as_slice() {
                [video_id] => Command::Play {
                    video_id: video_id.to_string(),
                },
                _ => return Err(usage("PLAY <video_id>")),
            },
            "PLAY_RANDOM" => no_args(&args, "PLAY_RANDOM", Command::PlayRandom)?,
            "STOP" => no_args(&args, "STOP", Command::Stop)?,
            "PAUSE" => no_args(&args, "PAUSE", Command::Pause)?,
            "CONTINUE" => no_args(&args, "CONTINUE", Command::Continue)?,
            "SHOW_PLAYING" => no_args(&args, "SHOW_PLAYING", Command::ShowPlaying)?,
            "CREATE_PLAYLIST" => Command::CreatePlaylist {
                name: one_name(&args, "CREATE_PLAYLIST <playlist_name>")?,
            },
            "ADD_TO_PLAYLIST" => match args.as_slice() {
                [name, video_id] => Command::AddToPlaylist {
                    name: name.to_string(),
                    video_id: video_id.to_string(),
                },
                _ => return Err(usage("ADD_TO_PLAYLIST <playlist_name> <video_id>")),
            },
            "REMOVE_FROM_PLAYLIST" => match args.as_slice() {
                [name, video_id] => Command::RemoveFromPlaylist {
                    name: name.to_string(),
                    video_id: video_id.to_string(),
                },
                _ => return Err(usage("REMOVE_FROM_PLAYLIST <playlist_name> <video_id>")),
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist {
                name: one_name(&args, "CLEAR_PLAYLIST <playlist_name>")?,
            },
            "DELETE_PLAYLIST" => Command::DeletePlaylist {
                name: one_name(&args, "DELETE_PLAYLIST <playlist_name>")?,
            },
            "SHOW_PLAYLIST" => Command::ShowPlaylist {
                name: one_name(&args, "SHOW_PLAYLIST <playlist_name>")?,
            },
            "SHOW_ALL_PLAYLISTS" => no_args(&args, "SHOW_ALL_PLAYLISTS", Command::ShowAllPlaylists)?,
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            "SEARCH_VIDEOS" | "SEARCH_VIDEOS_WITH_TAG" | "FLAG_VIDEO" | "ALLOW_VIDEO" => {
                return Err(CommandError::Unsupported(keyword));
            }
            _ => return Err(CommandError::Unknown(keyword)),
        };

        Ok(command)
    }
}

fn usage(usage: &'static str) -> CommandError {
    CommandError::WrongArguments { usage }
}

fn no_args(args: &[&str], usage_text: &'static str, command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(usage(usage_text))
    }
}

fn one_name(args: &[&str], usage_text: &'static str) -> Result<String, CommandError> {
    match args {
        [name] => Ok(name.to_string()),
        _ => Err(usage(usage_text)),
    }
}
