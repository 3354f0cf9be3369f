// ReelPipe - terminal video session controller
// Reads commands line by line and prints what happened

use anyhow::{Context, Result};
use clap::Parser;
use reelpipe::{
    catalog::VideoLibrary,
    command::{execute, Command, CommandError},
    config::{Config, LoggingConfig},
    VideoPlayer,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reelpipe")]
#[command(about = "Play, pause and organise videos into playlists from the terminal")]
struct Args {
    /// Config file to use instead of the one in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file to load, overrides the config
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Enable developer logging (stderr instead of the log file)
    #[arg(long)]
    dev: bool,
}

fn init_logging(config: &LoggingConfig, dev: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    if dev {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_target(true)
            .with_env_filter(filter)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory {}", config.log_dir.display()))?;

    // Daily rotating file appender
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "reelpipe.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(Some(guard))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Guard has to live until exit or buffered log lines get lost
    let _log_guard = init_logging(&config.logging, args.dev)?;
    info!("ReelPipe starting up");

    let library = match args.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => VideoLibrary::load(path)?,
        None => VideoLibrary::bundled()?,
    };
    let mut player = VideoPlayer::new(library);

    println!("Hello and welcome to ReelPipe, what would you like to do?");
    println!("Enter HELP for list of available commands or EXIT to terminate.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("{}", config.ui.prompt);
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            debug!("stdin closed");
            break;
        }

        match Command::parse(&line) {
            Ok(command) => {
                for output in execute(&mut player, &command) {
                    println!("{output}");
                }
                if command == Command::Exit {
                    break;
                }
            }
            Err(CommandError::Empty) => continue,
            Err(e) => {
                debug!(error = %e, input = line.trim(), "could not parse command");
                println!("{e}");
            }
        }
    }

    info!("ReelPipe shutting down");
    Ok(())
}
