//! Transport-facing catalog API.
//!
//! # Responsibility
//! - Map each catalog use-case onto a status-equivalent response envelope.
//! - Own one connection scope per call; nothing is kept between calls.
//!
//! # Invariants
//! - Calls never panic; infrastructure failures become status 500.
//! - Remove always answers 204, so callers cannot probe for ids.

use log::error;
use serde::Serialize;
use serde_json::{json, Value};
use songs_core::db::open_db;
use songs_core::{
    violations_by_field, AddSongRequest, CatalogConfig, CatalogError, CatalogResult,
    CatalogService, SongId, SongSummary, SqliteSongRepository, Violation,
};
use std::path::{Path, PathBuf};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

const SONGS_ROUTE: &str = "/songs";

/// Response envelope handed back to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    /// Set on creation: path of the new resource.
    pub location: Option<String>,
    pub body: Option<Value>,
}

impl ApiResponse {
    fn empty(status: u16) -> Self {
        Self {
            status,
            location: None,
            body: None,
        }
    }

    fn with_body(status: u16, body: Value) -> Self {
        Self {
            status,
            location: None,
            body: Some(body),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Serialize)]
struct SongListEnvelope<'a> {
    data: &'a [SongSummary],
}

/// Catalog API bound to one SQLite catalog file.
#[derive(Debug, Clone)]
pub struct SongsApi {
    db_path: PathBuf,
}

impl SongsApi {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.db_path.clone())
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Create song: 201 with detail body and location, or 400.
    pub fn create_song(&self, request: &AddSongRequest) -> ApiResponse {
        match self.with_catalog("create_song", |catalog| catalog.add_song(request)) {
            Ok((detail, id)) => {
                let mut response = to_json_response("create_song", STATUS_CREATED, &detail);
                if response.status == STATUS_CREATED {
                    response.location = Some(song_location(id));
                }
                response
            }
            Err(response) => response,
        }
    }

    /// Create song from a raw JSON body.
    pub fn create_song_from_json(&self, raw_body: &str) -> ApiResponse {
        match parse_add_song_request(raw_body) {
            Ok(request) => self.create_song(&request),
            Err(response) => response,
        }
    }

    /// List songs: 200 with `{"data": [...]}` sorted by title.
    pub fn list_songs(&self) -> ApiResponse {
        match self.with_catalog("list_songs", |catalog| catalog.list_songs()) {
            Ok(songs) => {
                to_json_response("list_songs", STATUS_OK, &SongListEnvelope { data: &songs })
            }
            Err(response) => response,
        }
    }

    /// Get song: 200 with detail body, or 404 without body.
    pub fn get_song(&self, id: SongId) -> ApiResponse {
        match self.with_catalog("get_song", |catalog| catalog.get_song(id)) {
            Ok(detail) => to_json_response("get_song", STATUS_OK, &detail),
            Err(response) => response,
        }
    }

    /// Remove song: 204 whether or not the id was ever active.
    pub fn remove_song(&self, id: SongId) -> ApiResponse {
        match self.with_catalog("remove_song", |catalog| catalog.remove_song(id)) {
            Ok(()) => ApiResponse::empty(STATUS_NO_CONTENT),
            Err(response) => response,
        }
    }

    fn with_catalog<T>(
        &self,
        operation: &'static str,
        run: impl FnOnce(&CatalogService<SqliteSongRepository<'_>>) -> CatalogResult<T>,
    ) -> Result<T, ApiResponse> {
        let conn = open_db(&self.db_path).map_err(|err| internal_error(operation, &err))?;
        let repo =
            SqliteSongRepository::try_new(&conn).map_err(|err| internal_error(operation, &err))?;
        let catalog = CatalogService::new(repo);
        run(&catalog).map_err(|err| catalog_error_response(operation, err))
    }
}

/// Decodes a create-song JSON body.
///
/// Missing fields are accepted here and reported by validation instead.
pub fn parse_add_song_request(raw_body: &str) -> Result<AddSongRequest, ApiResponse> {
    serde_json::from_str(raw_body).map_err(|err| {
        ApiResponse::with_body(
            STATUS_BAD_REQUEST,
            json!({ "errors": { "body": [format!("malformed song request: {err}")] } }),
        )
    })
}

/// Location reference for a stored song.
pub fn song_location(id: SongId) -> String {
    format!("{SONGS_ROUTE}/{id}")
}

fn catalog_error_response(operation: &'static str, err: CatalogError) -> ApiResponse {
    match err {
        CatalogError::ValidationFailed(violations) => {
            ApiResponse::with_body(STATUS_BAD_REQUEST, validation_body(&violations))
        }
        CatalogError::NotFound(_) => ApiResponse::empty(STATUS_NOT_FOUND),
        CatalogError::Repo(err) => internal_error(operation, &err),
    }
}

fn validation_body(violations: &[Violation]) -> Value {
    let errors: serde_json::Map<String, Value> = violations_by_field(violations)
        .into_iter()
        .map(|(field, messages)| (field, json!(messages)))
        .collect();
    json!({ "errors": errors })
}

fn to_json_response(operation: &'static str, status: u16, value: &impl Serialize) -> ApiResponse {
    match serde_json::to_value(value) {
        Ok(body) => ApiResponse::with_body(status, body),
        Err(err) => internal_error(operation, &err),
    }
}

fn internal_error(operation: &'static str, err: &dyn std::error::Error) -> ApiResponse {
    error!("event={operation} module=api status=error error={err}");
    ApiResponse::with_body(STATUS_INTERNAL_ERROR, json!({ "error": err.to_string() }))
}
