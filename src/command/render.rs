use super::Command;
use crate::catalog::Catalog;
use crate::error::PlayerError;
use crate::playback::PlaybackSignal;
use crate::player::VideoPlayer;
use crate::playlist::PlaylistListing;
use tracing::debug;

pub const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

pub const GOODBYE: &str = "ReelPipe has now terminated its execution. Thank you and goodbye!";

/// Run a command against the player and return the lines to show the user.
/// Playlist names are echoed back the way they were typed.
pub fn execute<C: Catalog>(player: &mut VideoPlayer<C>, command: &Command) -> Vec<String> {
    debug!(?command, "executing command");

    match command {
        Command::NumberOfVideos => {
            vec![format!("{} videos in the library", player.number_of_videos())]
        }
        Command::ShowAllVideos => {
            let mut lines = vec!["Here's a list of all available videos:".to_string()];
            lines.extend(player.all_videos().iter().map(|video| video.to_string()));
            lines
        }
        Command::Play { video_id } => match player.play(video_id) {
            Ok(transition) => signal_lines(transition.signals()),
            Err(e) => failed(format!("Cannot play video: {e}"), &e),
        },
        Command::PlayRandom => match player.play_random() {
            Ok(transition) => signal_lines(transition.signals()),
            Err(e) => failed(e.to_string(), &e),
        },
        Command::Stop => match player.stop() {
            Ok(video) => vec![format!("Stopping video: {}", video.title)],
            Err(e) => failed(format!("Cannot stop video: {e}"), &e),
        },
        Command::Pause => match player.pause() {
            Ok(video) => vec![format!("Pausing video: {}", video.title)],
            Err(e @ PlayerError::AlreadyPaused { .. }) => failed(e.to_string(), &e),
            Err(e) => failed(format!("Cannot pause video: {e}"), &e),
        },
        Command::Continue => match player.continue_video() {
            Ok(video) => vec![format!("Continuing video: {}", video.title)],
            Err(e) => failed(format!("Cannot continue video: {e}"), &e),
        },
        Command::ShowPlaying => match player.now_playing() {
            None => vec!["No video is currently playing".to_string()],
            Some(now) if now.paused => vec![format!("Currently playing: {} - PAUSED", now.video)],
            Some(now) => vec![format!("Currently playing: {}", now.video)],
        },
        Command::CreatePlaylist { name } => match player.create_playlist(name) {
            Ok(stored) => vec![format!("Successfully created new playlist: {stored}")],
            Err(e) => failed(format!("Cannot create playlist: {e}"), &e),
        },
        Command::AddToPlaylist { name, video_id } => match player.add_to_playlist(name, video_id) {
            Ok(video) => vec![format!("Added video to {name}: {}", video.title)],
            Err(e) => failed(format!("Cannot add video to {name}: {e}"), &e),
        },
        Command::RemoveFromPlaylist { name, video_id } => {
            match player.remove_from_playlist(name, video_id) {
                Ok(video) => vec![format!("Removed video from {name}: {}", video.title)],
                Err(e) => failed(format!("Cannot remove video from {name}: {e}"), &e),
            }
        }
        Command::ClearPlaylist { name } => match player.clear_playlist(name) {
            Ok(()) => vec![format!("Successfully removed all videos from {name}")],
            Err(e) => failed(format!("Cannot clear playlist {name}: {e}"), &e),
        },
        Command::DeletePlaylist { name } => match player.delete_playlist(name) {
            Ok(()) => vec![format!("Deleted playlist: {name}")],
            Err(e) => failed(format!("Cannot delete playlist {name}: {e}"), &e),
        },
        Command::ShowPlaylist { name } => match player.show_playlist(name) {
            Ok(videos) if videos.is_empty() => vec![
                format!("Showing playlist: {name}"),
                "No videos here yet".to_string(),
            ],
            Ok(videos) => {
                let mut lines = vec![format!("Showing playlist: {name}")];
                lines.extend(videos.iter().map(|video| video.to_string()));
                lines
            }
            Err(e) => failed(format!("Cannot show playlist {name}: {e}"), &e),
        },
        Command::ShowAllPlaylists => match player.playlists() {
            PlaylistListing::NoPlaylists => vec!["No playlists exist yet".to_string()],
            PlaylistListing::Playlists(names) => {
                let mut lines = vec!["Showing all playlists:".to_string()];
                lines.extend(names);
                lines
            }
        },
        Command::Help => HELP_TEXT.lines().map(str::to_string).collect(),
        Command::Exit => vec![GOODBYE.to_string()],
    }
}

fn signal_lines(signals: Vec<PlaybackSignal>) -> Vec<String> {
    signals
        .into_iter()
        .map(|signal| match signal {
            PlaybackSignal::Stopping(video) => format!("Stopping video: {}", video.title),
            PlaybackSignal::Playing(video) => format!("Playing video: {}", video.title),
        })
        .collect()
}

fn failed(message: String, error: &PlayerError) -> Vec<String> {
    debug!(?error, "command rejected");
    vec![message]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoLibrary;

    fn run(player: &mut VideoPlayer, line: &str) -> Vec<String> {
        let command = Command::parse(line).unwrap();
        execute(player, &command)
    }

    fn bundled_player() -> VideoPlayer {
        VideoPlayer::new(VideoLibrary::bundled().unwrap())
    }

    #[test]
    fn test_playback_messages() {
        let mut player = bundled_player();

        assert_eq!(run(&mut player, "STOP"), ["Cannot stop video: No video is currently playing"]);
        assert_eq!(run(&mut player, "PLAY nope"), ["Cannot play video: Video does not exist"]);
        assert_eq!(run(&mut player, "PLAY amazing_cats_video_id"), ["Playing video: Amazing Cats"]);
        assert_eq!(
            run(&mut player, "PLAY funny_dogs_video_id"),
            ["Stopping video: Amazing Cats", "Playing video: Funny Dogs"]
        );
        assert_eq!(run(&mut player, "CONTINUE"), ["Cannot continue video: Video is not paused"]);
        assert_eq!(run(&mut player, "PAUSE"), ["Pausing video: Funny Dogs"]);
        assert_eq!(run(&mut player, "PAUSE"), ["Video already paused: Funny Dogs"]);
        assert_eq!(
            run(&mut player, "SHOW_PLAYING"),
            ["Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal] - PAUSED"]
        );
        assert_eq!(run(&mut player, "CONTINUE"), ["Continuing video: Funny Dogs"]);
        assert_eq!(run(&mut player, "STOP"), ["Stopping video: Funny Dogs"]);
        assert_eq!(run(&mut player, "SHOW_PLAYING"), ["No video is currently playing"]);
        assert_eq!(run(&mut player, "PAUSE"), ["Cannot pause video: No video is currently playing"]);
    }

    #[test]
    fn test_play_random_on_empty_library() {
        let mut player = VideoPlayer::new(VideoLibrary::parse("").unwrap());
        assert_eq!(run(&mut player, "PLAY_RANDOM"), ["No videos available"]);
        assert_eq!(run(&mut player, "NUMBER_OF_VIDEOS"), ["0 videos in the library"]);
    }

    #[test]
    fn test_playlist_messages() {
        let mut player = bundled_player();

        assert_eq!(run(&mut player, "SHOW_ALL_PLAYLISTS"), ["No playlists exist yet"]);
        assert_eq!(
            run(&mut player, "CREATE_PLAYLIST my_COOL_playlist"),
            ["Successfully created new playlist: my_COOL_playlist"]
        );
        assert_eq!(
            run(&mut player, "CREATE_PLAYLIST MY_COOL_PLAYLIST"),
            ["Cannot create playlist: A playlist with the same name already exists"]
        );
        assert_eq!(
            run(&mut player, "ADD_TO_PLAYLIST my_cool_playlist amazing_cats_video_id"),
            ["Added video to my_cool_playlist: Amazing Cats"]
        );
        assert_eq!(
            run(&mut player, "ADD_TO_PLAYLIST MY_COOL_PLAYLIST amazing_cats_video_id"),
            ["Cannot add video to MY_COOL_PLAYLIST: Video already added"]
        );
        assert_eq!(
            run(&mut player, "ADD_TO_PLAYLIST another nope"),
            ["Cannot add video to another: Playlist does not exist"]
        );
        assert_eq!(
            run(&mut player, "ADD_TO_PLAYLIST my_cool_playlist nope"),
            ["Cannot add video to my_cool_playlist: Video does not exist"]
        );
        assert_eq!(
            run(&mut player, "SHOW_PLAYLIST my_cool_playlist"),
            [
                "Showing playlist: my_cool_playlist",
                "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
            ]
        );
        assert_eq!(
            run(&mut player, "REMOVE_FROM_PLAYLIST my_cool_playlist funny_dogs_video_id"),
            ["Cannot remove video from my_cool_playlist: Video is not in playlist"]
        );
        assert_eq!(
            run(&mut player, "REMOVE_FROM_PLAYLIST my_cool_playlist amazing_cats_video_id"),
            ["Removed video from my_cool_playlist: Amazing Cats"]
        );
        assert_eq!(
            run(&mut player, "SHOW_PLAYLIST my_cool_playlist"),
            ["Showing playlist: my_cool_playlist", "No videos here yet"]
        );
        assert_eq!(
            run(&mut player, "CLEAR_PLAYLIST my_cool_playlist"),
            ["Successfully removed all videos from my_cool_playlist"]
        );
        assert_eq!(
            run(&mut player, "SHOW_ALL_PLAYLISTS"),
            ["Showing all playlists:", "my_COOL_playlist"]
        );
        assert_eq!(
            run(&mut player, "DELETE_PLAYLIST my_cool_playlist"),
            ["Deleted playlist: my_cool_playlist"]
        );
        assert_eq!(
            run(&mut player, "DELETE_PLAYLIST my_cool_playlist"),
            ["Cannot delete playlist my_cool_playlist: Playlist does not exist"]
        );
        assert_eq!(
            run(&mut player, "CLEAR_PLAYLIST my_cool_playlist"),
            ["Cannot clear playlist my_cool_playlist: Playlist does not exist"]
        );
        assert_eq!(
            run(&mut player, "SHOW_PLAYLIST my_cool_playlist"),
            ["Cannot show playlist my_cool_playlist: Playlist does not exist"]
        );
    }

    #[test]
    fn test_show_all_videos_sorted_by_title() {
        let mut player = bundled_player();
        let lines = run(&mut player, "SHOW_ALL_VIDEOS");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Here's a list of all available videos:");
        assert_eq!(lines[1], "Amazing Cats (amazing_cats_video_id) [#cat #animal]");
        assert_eq!(lines[5], "Video about nothing (nothing_video_id) []");
        assert_eq!(run(&mut player, "NUMBER_OF_VIDEOS"), ["5 videos in the library"]);
    }
}
