//! galaxycache core: stats primitives and the error type shared by the
//! observability crates.
//!
//! This crate defines measures, tag keys and views as plain immutable data.
//! It carries no aggregation state; recording and aggregation live in
//! `galaxycache-obs`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `GalaxyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod stats;

/// Shared result type.
pub use error::{Result, GalaxyError};
