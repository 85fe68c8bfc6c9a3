//! Command-line entry point for the song catalog.
//!
//! Every subcommand runs one catalog use-case through `songs_api` and
//! prints the response envelope as JSON. Settings come from `SONGS_*`
//! environment variables and can be overridden by flags.

use clap::{Parser, Subcommand};
use songs_api::{ApiResponse, SongsApi};
use songs_core::{init_logging, AddSongRequest, CatalogConfig, SongId};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "songs", version, about = "Manage the recommended songs catalog")]
struct Cli {
    /// SQLite catalog file (overrides SONGS_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides SONGS_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (overrides SONGS_LOG_DIR).
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a song.
    Add {
        #[arg(long, conflicts_with = "json")]
        title: Option<String>,
        #[arg(long, conflicts_with = "json")]
        artist: Option<String>,
        #[arg(long, conflicts_with = "json")]
        recommended_by: Option<String>,
        /// Raw JSON request body instead of individual fields.
        #[arg(long)]
        json: Option<String>,
    },
    /// List active songs ordered by title.
    List,
    /// Show one active song.
    Get { id: SongId },
    /// Remove a song from the catalog.
    Remove { id: SongId },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let api = SongsApi::from_config(&config);
    let response = run(&api, cli.command);
    print_response(&response)
}

fn resolve_config(cli: &Cli) -> CatalogConfig {
    let mut config = CatalogConfig::from_env();
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    config
}

fn run(api: &SongsApi, command: Command) -> ApiResponse {
    match command {
        Command::Add {
            json: Some(raw), ..
        } => api.create_song_from_json(&raw),
        Command::Add {
            title,
            artist,
            recommended_by,
            json: None,
        } => api.create_song(&AddSongRequest {
            title,
            artist,
            recommended_by,
        }),
        Command::List => api.list_songs(),
        Command::Get { id } => api.get_song(id),
        Command::Remove { id } => api.remove_song(id),
    }
}

fn print_response(response: &ApiResponse) -> ExitCode {
    match serde_json::to_string_pretty(response) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => {
            eprintln!("failed to render response: {err}");
            return ExitCode::FAILURE;
        }
    }
    log::logger().flush();

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
