//! Transport-neutral adapter over the song catalog core.

pub mod api;

pub use api::{parse_add_song_request, song_location, ApiResponse, SongsApi};
