//! Core domain logic for the song catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod projection;
pub mod repo;
pub mod service;
pub mod validation;

pub use config::CatalogConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogSettings};
pub use model::song::{NewSong, Song, SongId, SongStatus, TITLE_MAX_CHARS};
pub use projection::{to_detail, to_summary, SongDetail, SongSummary};
pub use repo::song_repo::{
    RepoError, RepoResult, SoftDeleteOutcome, SongRepository, SqliteSongRepository,
};
pub use service::catalog_service::{CatalogError, CatalogResult, CatalogService};
pub use validation::{validate, violations_by_field, AddSongRequest, ValidationResult, Violation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
