//! Song store contract and SQLite implementation.
//!
//! # Responsibility
//! - Insert songs with store-assigned ids and creation timestamps.
//! - Serve active-only and administrative (inactive-inclusive) reads.
//! - Flip songs to inactive idempotently.
//!
//! # Invariants
//! - Every mutation is a single statement, so it commits atomically.
//! - List reads come back in store order (`id ASC`).

use crate::db::migrations::{latest_version, schema_version};
use crate::db::DbError;
use crate::model::song::{NewSong, Song, SongId, SongStatus};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SONG_COLUMNS: &str = "id, title, artist, recommended_by, is_active, added_to_inventory";

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level failure. None of these are caller-recoverable.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    /// The connection has not been migrated to the expected schema.
    SchemaNotReady { found: u32, expected: u32 },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted song data: {message}"),
            Self::SchemaNotReady { found, expected } => write!(
                f,
                "catalog schema not ready: found version {found}, expected {expected}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::SchemaNotReady { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// What a soft delete actually did. Internal bookkeeping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftDeleteOutcome {
    /// An active song was moved to inactive.
    Deactivated,
    /// Nothing changed: unknown id or already inactive.
    Unchanged,
}

/// Catalog store interface.
pub trait SongRepository {
    /// Persists a new active song and returns it with its assigned id.
    fn insert_song(&self, song: &NewSong) -> RepoResult<Song>;
    /// Looks one song up; inactive rows only when `include_inactive`.
    fn find_song(&self, id: SongId, include_inactive: bool) -> RepoResult<Option<Song>>;
    /// Lists songs in store order; inactive rows only when `include_inactive`.
    fn list_songs(&self, include_inactive: bool) -> RepoResult<Vec<Song>>;
    /// Marks an active song inactive. Succeeds for unknown or inactive ids.
    fn soft_delete_song(&self, id: SongId) -> RepoResult<SoftDeleteOutcome>;

    fn find_active_by_id(&self, id: SongId) -> RepoResult<Option<Song>> {
        self.find_song(id, false)
    }

    fn list_active(&self) -> RepoResult<Vec<Song>> {
        self.list_songs(false)
    }
}

/// SQLite-backed song store.
pub struct SqliteSongRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSongRepository<'conn> {
    /// Wraps a connection that has already been migrated by `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let found = schema_version(conn)?;
        let expected = latest_version();
        if found != expected {
            return Err(RepoError::SchemaNotReady { found, expected });
        }
        Ok(Self { conn })
    }
}

impl SongRepository for SqliteSongRepository<'_> {
    fn insert_song(&self, song: &NewSong) -> RepoResult<Song> {
        let decoded = self.conn.query_row(
            &format!(
                "INSERT INTO songs (title, artist, recommended_by, is_active)
                 VALUES (?1, ?2, ?3, 1)
                 RETURNING {SONG_COLUMNS};"
            ),
            params![
                song.title.as_str(),
                song.artist.as_deref(),
                song.recommended_by.as_str(),
            ],
            read_song_row,
        )?;
        let inserted = decoded?;
        log::debug!(
            "event=song_insert module=repo status=ok song_id={}",
            inserted.id
        );
        Ok(inserted)
    }

    fn find_song(&self, id: SongId, include_inactive: bool) -> RepoResult<Option<Song>> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "SELECT {SONG_COLUMNS}
                     FROM songs
                     WHERE id = ?1
                       AND (?2 = 1 OR is_active = 1);"
                ),
                params![id, i64::from(include_inactive)],
                read_song_row,
            )
            .optional()?;

        row.transpose()
    }

    fn list_songs(&self, include_inactive: bool) -> RepoResult<Vec<Song>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SONG_COLUMNS}
             FROM songs
             WHERE (?1 = 1 OR is_active = 1)
             ORDER BY id ASC;"
        ))?;

        let rows = stmt.query_map([i64::from(include_inactive)], read_song_row)?;
        let mut songs = Vec::new();
        for row in rows {
            songs.push(row??);
        }
        Ok(songs)
    }

    fn soft_delete_song(&self, id: SongId) -> RepoResult<SoftDeleteOutcome> {
        let changed = self.conn.execute(
            "UPDATE songs
             SET is_active = 0
             WHERE id = ?1
               AND is_active = 1;",
            [id],
        )?;

        let outcome = if changed == 0 {
            SoftDeleteOutcome::Unchanged
        } else {
            SoftDeleteOutcome::Deactivated
        };
        log::debug!(
            "event=song_soft_delete module=repo status=ok song_id={id} outcome={outcome:?}"
        );
        Ok(outcome)
    }
}

// Outer result: column access. Inner result: domain decoding.
fn read_song_row(row: &Row<'_>) -> rusqlite::Result<RepoResult<Song>> {
    let id: SongId = row.get("id")?;
    let status = match row.get::<_, i64>("is_active")? {
        1 => SongStatus::Active,
        0 => SongStatus::Inactive,
        other => {
            return Ok(Err(RepoError::InvalidData(format!(
                "invalid is_active value `{other}` for song {id}"
            ))));
        }
    };

    Ok(Ok(Song {
        id,
        title: row.get("title")?,
        artist: row.get("artist")?,
        recommended_by: row.get("recommended_by")?,
        status,
        added_to_inventory: row.get("added_to_inventory")?,
    }))
}
