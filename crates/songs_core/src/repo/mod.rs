//! Catalog store contracts and persistence implementations.
//!
//! # Responsibility
//! - Own identifier assignment and active/inactive filtering.
//! - Keep SQL details out of the catalog service.
//!
//! # Invariants
//! - Soft delete never erases rows and never reports "not found".
//! - Reads reject corrupted persisted state instead of masking it.

pub mod song_repo;
