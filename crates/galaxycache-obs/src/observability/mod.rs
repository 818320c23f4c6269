//! The galaxycache metrics registry.
//!
//! [`Registry::new`] mints the `command` tag key and builds the view set
//! once; the result is immutable and shared by reference with whatever
//! records measurements.

pub mod latency;
pub mod measures;
pub mod views;

use galaxycache_core::error::Result;
use galaxycache_core::stats::{Measure, TagKey, TagMap, TagRegistry, View};

use crate::runtime::StatsRuntime;

pub use latency::{duration_as_milliseconds, since_in_milliseconds};
pub use measures::ALL_MEASURES;
pub use views::{BYTES_BOUNDS, MILLISECONDS_BOUNDS};

/// Tag key naming the operation that produced a measurement.
pub const COMMAND_TAG: &str = "command";

#[derive(Debug)]
pub struct Registry {
    command: TagKey,
    views: Vec<View>,
}

impl Registry {
    /// Build the registry. A failure here is a startup defect; callers should
    /// abort rather than run without the `command` breakdown.
    pub fn new(tags: &TagRegistry) -> Result<Self> {
        let command = tags.new_key(COMMAND_TAG)?;
        let views = views::all_views(&command);
        Ok(Self { command, views })
    }

    pub fn command_key(&self) -> &TagKey {
        &self.command
    }

    pub fn measures(&self) -> &'static [Measure] {
        &ALL_MEASURES
    }

    /// Views in registration order.
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Register every view with `runtime`. Errors are returned untouched.
    pub fn install(&self, runtime: &StatsRuntime) -> Result<()> {
        runtime.register(&self.views)?;
        tracing::info!(views = self.views.len(), "galaxycache views installed");
        Ok(())
    }

    /// Tag map carrying `command=<command>`, for recording.
    pub fn command_tags(&self, runtime: &StatsRuntime, command: &str) -> Result<TagMap> {
        runtime.new_tag_map().with(&self.command, command)
    }
}
