//! Stats primitives: measures, tag keys, views.

pub mod measure;
pub mod tag;
pub mod view;

pub use measure::{Measure, Measurement, Unit, ValueKind};
pub use tag::{TagKey, TagMap, TagRegistry, MAX_TAG_LEN};
pub use view::{Aggregation, View};
