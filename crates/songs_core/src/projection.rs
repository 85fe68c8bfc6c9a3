//! Outward read models derived from `Song`.
//!
//! Summary and detail carry the same fields today but stay separate types
//! so list and single-item contracts can diverge independently. Neither
//! exposes lifecycle status or the inventory timestamp.

use crate::model::song::{Song, SongId};
use serde::Serialize;

/// List item shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSummary {
    pub id: SongId,
    pub title: String,
    pub artist: Option<String>,
    pub recommended_by: String,
}

/// Single-item and creation response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetail {
    pub id: SongId,
    pub title: String,
    pub artist: Option<String>,
    pub recommended_by: String,
}

pub fn to_summary(song: &Song) -> SongSummary {
    SongSummary {
        id: song.id,
        title: song.title.clone(),
        artist: song.artist.clone(),
        recommended_by: song.recommended_by.clone(),
    }
}

pub fn to_detail(song: &Song) -> SongDetail {
    SongDetail {
        id: song.id,
        title: song.title.clone(),
        artist: song.artist.clone(),
        recommended_by: song.recommended_by.clone(),
    }
}
