//! Top-level facade crate for galaxycache observability.
//!
//! Re-exports the stats primitives and the metrics registry so users can depend on a single crate.

pub mod core {
    pub use galaxycache_core::*;
}

pub mod obs {
    pub use galaxycache_obs::*;
}
