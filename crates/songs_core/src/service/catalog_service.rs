//! Song catalog use-case service.
//!
//! # Responsibility
//! - Run the validation rule set before any write.
//! - Delegate persistence to a `SongRepository`.
//! - Return outward projections, never raw `Song` records.
//!
//! # Invariants
//! - A rejected request never touches the store.
//! - `list_songs` is sorted by title with a stable sort over store order.
//! - `remove_song` succeeds for unknown and already removed ids alike.
//! - Log lines carry ids and counts, never submitted field values.

use crate::model::song::{NewSong, SongId};
use crate::projection::{to_detail, to_summary, SongDetail, SongSummary};
use crate::repo::song_repo::{RepoError, SongRepository};
use crate::validation::{validate, AddSongRequest, ValidationResult, Violation};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Use-case level error returned to transport layers.
#[derive(Debug)]
pub enum CatalogError {
    /// Caller input broke one or more rules. Always non-empty.
    ValidationFailed(Vec<Violation>),
    /// No active song has this id.
    NotFound(SongId),
    /// Infrastructure failure, passed through unchanged.
    Repo(RepoError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed(violations) => {
                write!(f, "song validation failed:")?;
                for violation in violations {
                    write!(f, " [{}] {}", violation.field, violation.message)?;
                }
                Ok(())
            }
            Self::NotFound(id) => write!(f, "song not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Catalog facade over a store implementation.
///
/// The store is injected, so its lifetime is whatever the caller chooses:
/// one per process or one per request scope.
pub struct CatalogService<R: SongRepository> {
    repo: R,
}

impl<R: SongRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores a new song.
    ///
    /// Returns the detail projection and the new id, which transport layers
    /// use to build a location reference.
    pub fn add_song(&self, request: &AddSongRequest) -> CatalogResult<(SongDetail, SongId)> {
        if let ValidationResult::Invalid(violations) = validate(request) {
            warn!(
                "event=song_add module=catalog status=rejected violations={}",
                violations.len()
            );
            return Err(CatalogError::ValidationFailed(violations));
        }

        let new_song = NewSong {
            title: request.title.clone().unwrap_or_default(),
            artist: request.artist.clone(),
            recommended_by: request.recommended_by.clone().unwrap_or_default(),
        };
        let song = self.repo.insert_song(&new_song).map_err(log_repo_error("song_add"))?;

        info!("event=song_add module=catalog status=ok song_id={}", song.id);
        Ok((to_detail(&song), song.id))
    }

    /// Lists active songs ordered by title.
    pub fn list_songs(&self) -> CatalogResult<Vec<SongSummary>> {
        let songs = self.repo.list_active().map_err(log_repo_error("song_list"))?;

        let mut summaries: Vec<SongSummary> = songs.iter().map(to_summary).collect();
        // `sort_by` is stable, so equal titles keep store order.
        summaries.sort_by(|left, right| left.title.cmp(&right.title));

        info!(
            "event=song_list module=catalog status=ok count={}",
            summaries.len()
        );
        Ok(summaries)
    }

    /// Gets one active song.
    pub fn get_song(&self, id: SongId) -> CatalogResult<SongDetail> {
        match self
            .repo
            .find_active_by_id(id)
            .map_err(log_repo_error("song_get"))?
        {
            Some(song) => {
                info!("event=song_get module=catalog status=ok song_id={id}");
                Ok(to_detail(&song))
            }
            None => {
                info!("event=song_get module=catalog status=not_found song_id={id}");
                Err(CatalogError::NotFound(id))
            }
        }
    }

    /// Removes a song from the catalog without erasing it.
    ///
    /// The result does not reveal whether the id existed or was already
    /// removed.
    pub fn remove_song(&self, id: SongId) -> CatalogResult<()> {
        self.repo
            .soft_delete_song(id)
            .map_err(log_repo_error("song_remove"))?;
        info!("event=song_remove module=catalog status=ok song_id={id}");
        Ok(())
    }
}

fn log_repo_error(event: &'static str) -> impl Fn(RepoError) -> CatalogError {
    move |err| {
        error!("event={event} module=catalog status=error error={err}");
        CatalogError::Repo(err)
    }
}
