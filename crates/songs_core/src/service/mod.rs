//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, store calls and projections per use-case.
//! - Be the only entry point transport layers call into.

pub mod catalog_service;
