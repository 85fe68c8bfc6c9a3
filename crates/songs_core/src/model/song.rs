//! Song domain model.
//!
//! # Responsibility
//! - Define the catalog record and its field constraints.
//! - Provide the one-way `Active -> Inactive` lifecycle helper.
//!
//! # Invariants
//! - `id` is assigned by the store once and never reused.
//! - `status` only moves from `Active` to `Inactive`.
//! - `added_to_inventory` is the creation instant and never changes.

use serde::{Deserialize, Serialize};

/// Store-assigned song identifier.
pub type SongId = i64;

/// Maximum accepted title length, counted in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Catalog visibility of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SongStatus {
    /// Visible to listing and lookup use-cases.
    Active,
    /// Removed from the catalog. Terminal.
    Inactive,
}

impl SongStatus {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Canonical catalog record.
///
/// Fields are populated by the store on insert; callers outside the core
/// only ever see the projections in [`crate::projection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: SongId,
    pub title: String,
    /// Optional; `None` when not submitted.
    pub artist: Option<String>,
    pub recommended_by: String,
    pub status: SongStatus,
    /// Unix epoch milliseconds of insertion.
    pub added_to_inventory: i64,
}

impl Song {
    /// Returns whether this song is visible to catalog readers.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Moves this song to `Inactive`.
    ///
    /// Calling it on an already inactive song is a no-op. There is no
    /// inverse operation.
    pub fn deactivate(&mut self) {
        self.status = SongStatus::Inactive;
    }
}

/// Validated input for a store insert.
///
/// Built by the catalog service only after the rule set accepted the
/// request; the store assigns `id`, status and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub title: String,
    pub artist: Option<String>,
    pub recommended_by: String,
}
