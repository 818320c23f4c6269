use crate::error::{GalaxyError, Result};
use crate::stats::measure::Measure;
use crate::stats::tag::TagKey;

/// How recorded values of a measure are summarized.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregation {
    /// Number of recorded events.
    Count,
    /// Histogram over explicit, strictly ascending bucket bounds.
    Distribution(Vec<f64>),
}

impl Aggregation {
    pub fn distribution(bounds: &[f64]) -> Self {
        Aggregation::Distribution(bounds.to_vec())
    }

    /// Bucket bounds, for distributions.
    pub fn bounds(&self) -> Option<&[f64]> {
        match self {
            Aggregation::Count => None,
            Aggregation::Distribution(b) => Some(b),
        }
    }
}

/// Binding of one measure to one aggregation, broken down by tag keys.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    name: String,
    description: String,
    measure: Measure,
    aggregation: Aggregation,
    tag_keys: Vec<TagKey>,
}

impl View {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        measure: Measure,
        aggregation: Aggregation,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            measure,
            aggregation,
            tag_keys: Vec::new(),
        }
    }

    /// Columns the view's rows are keyed by. Stored sorted and deduplicated.
    pub fn with_tag_keys(mut self, mut keys: Vec<TagKey>) -> Self {
        keys.sort();
        keys.dedup();
        self.tag_keys = keys;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn measure(&self) -> &Measure {
        &self.measure
    }

    pub fn aggregation(&self) -> &Aggregation {
        &self.aggregation
    }

    pub fn tag_keys(&self) -> &[TagKey] {
        &self.tag_keys
    }

    /// Reject empty names and distributions whose bounds are not finite and
    /// strictly ascending.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(GalaxyError::InvalidView {
                view: self.name.clone(),
                reason: "name must not be empty".into(),
            });
        }
        if let Some(bounds) = self.aggregation.bounds() {
            if bounds.is_empty() {
                return Err(GalaxyError::InvalidView {
                    view: self.name.clone(),
                    reason: "distribution needs at least one bound".into(),
                });
            }
            if bounds.iter().any(|b| !b.is_finite()) {
                return Err(GalaxyError::InvalidView {
                    view: self.name.clone(),
                    reason: "distribution bounds must be finite".into(),
                });
            }
            if bounds.windows(2).any(|w| w[0] >= w[1]) {
                return Err(GalaxyError::InvalidView {
                    view: self.name.clone(),
                    reason: "distribution bounds must be strictly ascending".into(),
                });
            }
        }
        Ok(())
    }
}
