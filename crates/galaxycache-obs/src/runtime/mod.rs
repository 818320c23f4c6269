//! In-process stats runtime.
//!
//! Views are registered once at startup and rows are aggregated in memory,
//! keyed by the view's tag columns. Tag columns are flattened into sorted
//! `(key, value)` vectors to keep deterministic ordering. Rows live in a
//! `DashMap` per view so concurrent recorders only contend on a shard.
//! Nothing is exported; callers read rows back with [`StatsRuntime::retrieve_data`].

pub mod data;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;

use galaxycache_core::error::{GalaxyError, Result};
use galaxycache_core::stats::{Measure, Measurement, TagMap, View};

use crate::config::StatsConfig;

pub use data::{AggregationData, DistributionData, Row};

struct ViewEntry {
    view: View,
    rows: DashMap<Vec<(String, String)>, AggregationData>,
}

impl ViewEntry {
    fn row_key(&self, tags: &TagMap) -> Vec<(String, String)> {
        // view.tag_keys() is sorted, so the key comes out sorted too
        self.view
            .tag_keys()
            .iter()
            .filter_map(|k| tags.value(k).map(|v| (k.name().to_string(), v.to_string())))
            .collect()
    }

    fn add(&self, tags: &TagMap, v: f64) {
        let key = self.row_key(tags);
        let mut row = self
            .rows
            .entry(key)
            .or_insert_with(|| AggregationData::new(self.view.aggregation()));
        row.add(v);
    }
}

pub struct StatsRuntime {
    max_tag_value_len: usize,
    views: DashMap<String, Arc<ViewEntry>>,
    measures: DashMap<&'static str, Measure>,
    // held across check and install so concurrent registrations serialize
    registration: Mutex<()>,
}

impl StatsRuntime {
    pub fn new(cfg: &StatsConfig) -> Self {
        Self {
            max_tag_value_len: cfg.tags.max_value_len,
            views: DashMap::new(),
            measures: DashMap::new(),
            registration: Mutex::new(()),
        }
    }

    /// Empty tag map carrying this runtime's tag value limit.
    pub fn new_tag_map(&self) -> TagMap {
        TagMap::with_max_value_len(self.max_tag_value_len)
    }

    /// Register views in bulk.
    ///
    /// The whole batch is checked before anything is installed: a malformed
    /// view, a name already taken by a different view, or a measure name bound
    /// to a different definition fails the call and leaves the runtime as it
    /// was. Registering an identical view again is a no-op.
    pub fn register(&self, views: &[View]) -> Result<()> {
        let _guard = self.registration.lock().unwrap_or_else(PoisonError::into_inner);

        let mut batch_views: HashMap<&str, &View> = HashMap::new();
        let mut batch_measures: HashMap<&'static str, &Measure> = HashMap::new();

        for v in views {
            if let Err(e) = self.check(v, &batch_views, &batch_measures) {
                tracing::warn!(view = %v.name(), error = %e, "view registration rejected");
                return Err(e);
            }
            batch_views.insert(v.name(), v);
            batch_measures.insert(v.measure().name(), v.measure());
        }

        for v in views {
            if self.views.contains_key(v.name()) {
                continue;
            }
            self.measures.insert(v.measure().name(), *v.measure());
            self.views.insert(
                v.name().to_string(),
                Arc::new(ViewEntry { view: v.clone(), rows: DashMap::new() }),
            );
            tracing::debug!(view = %v.name(), measure = %v.measure().name(), "view registered");
        }
        Ok(())
    }

    fn check(
        &self,
        v: &View,
        batch_views: &HashMap<&str, &View>,
        batch_measures: &HashMap<&'static str, &Measure>,
    ) -> Result<()> {
        v.validate()?;

        let m = v.measure();
        let bound = self
            .measures
            .get(m.name())
            .map(|e| *e.value())
            .or_else(|| batch_measures.get(m.name()).map(|m| **m));
        if bound.is_some_and(|b| b != *m) {
            return Err(GalaxyError::MeasureConflict(m.name().to_string()));
        }

        let existing = self
            .views
            .get(v.name())
            .map(|e| e.value().view.clone())
            .or_else(|| batch_views.get(v.name()).map(|v| (*v).clone()));
        if existing.is_some_and(|e| e != *v) {
            return Err(GalaxyError::DuplicateView(v.name().to_string()));
        }
        Ok(())
    }

    /// Drop views and their rows. Unknown names are ignored.
    pub fn unregister(&self, names: &[&str]) {
        let _guard = self.registration.lock().unwrap_or_else(PoisonError::into_inner);
        for name in names {
            if self.views.remove(*name).is_some() {
                tracing::debug!(view = %name, "view unregistered");
            }
        }
    }

    pub fn registered_views(&self) -> Vec<String> {
        let mut names: Vec<String> = self.views.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Record measurements against every view bound to their measures.
    ///
    /// Values are aggregated as given; measurements with no registered view
    /// are dropped.
    pub fn record(&self, tags: &TagMap, measurements: &[Measurement]) {
        let entries: Vec<Arc<ViewEntry>> =
            self.views.iter().map(|e| Arc::clone(e.value())).collect();

        for m in measurements {
            let name = m.measure().name();
            let mut matched = false;
            for entry in entries.iter().filter(|e| e.view.measure().name() == name) {
                entry.add(tags, m.value());
                matched = true;
            }
            if !matched {
                tracing::trace!(measure = %name, "no view for measure; dropped");
            }
        }
    }

    /// Snapshot of a view's rows, sorted by tag values.
    pub fn retrieve_data(&self, view_name: &str) -> Result<Vec<Row>> {
        let entry = self
            .views
            .get(view_name)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| GalaxyError::ViewNotFound(view_name.to_string()))?;

        let mut rows: Vec<Row> = entry
            .rows
            .iter()
            .map(|r| Row { tags: r.key().clone(), data: r.value().clone() })
            .collect();
        rows.sort_by(|a, b| a.tags.cmp(&b.tags));
        Ok(rows)
    }
}

impl Default for StatsRuntime {
    fn default() -> Self {
        Self::new(&StatsConfig::default())
    }
}
