//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical song record used by core business logic.
//! - Make the active/inactive lifecycle explicit in the type system.
//!
//! # Invariants
//! - Every song is identified by a store-assigned `SongId`.
//! - Removal is represented by the `Inactive` status, never by erasing rows.

pub mod song;
