//! galaxycache observability library.
//!
//! Declares the galaxycache measures, the `command` tag key and the view set,
//! and provides the in-process stats runtime those views are installed into.
//! Hosts build a [`observability::Registry`] once at startup, install it into a
//! [`runtime::StatsRuntime`], and record against both by reference.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod observability;
pub mod runtime;
