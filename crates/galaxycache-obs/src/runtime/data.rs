//! Aggregated view data.
//!
//! Distribution buckets follow the usual half-open convention: bucket `i`
//! holds values in `[bounds[i-1], bounds[i])`, bucket 0 is everything below
//! `bounds[0]` and the last bucket is everything at or above the last bound.

use serde::Serialize;

use galaxycache_core::stats::Aggregation;

/// One row of a view: the tag values it is keyed by and its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// `(tag key, tag value)` pairs, sorted by key.
    pub tags: Vec<(String, String)>,
    pub data: AggregationData,
}

impl Row {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationData {
    Count(u64),
    Distribution(DistributionData),
}

impl AggregationData {
    pub(crate) fn new(aggregation: &Aggregation) -> Self {
        match aggregation {
            Aggregation::Count => AggregationData::Count(0),
            Aggregation::Distribution(bounds) => {
                AggregationData::Distribution(DistributionData::new(bounds))
            }
        }
    }

    pub(crate) fn add(&mut self, v: f64) {
        match self {
            AggregationData::Count(c) => *c += 1,
            AggregationData::Distribution(d) => d.add(v),
        }
    }

    pub fn as_count(&self) -> Option<u64> {
        match self {
            AggregationData::Count(c) => Some(*c),
            AggregationData::Distribution(_) => None,
        }
    }

    pub fn as_distribution(&self) -> Option<&DistributionData> {
        match self {
            AggregationData::Count(_) => None,
            AggregationData::Distribution(d) => Some(d),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionData {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub sum_of_squared_dev: f64,
    pub bucket_counts: Vec<u64>,
    pub bounds: Vec<f64>,
}

impl DistributionData {
    fn new(bounds: &[f64]) -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mean: 0.0,
            sum_of_squared_dev: 0.0,
            bucket_counts: vec![0; bounds.len() + 1],
            bounds: bounds.to_vec(),
        }
    }

    /// Index of the bucket `v` falls into.
    pub fn bucket_for(bounds: &[f64], v: f64) -> usize {
        bounds.partition_point(|b| *b <= v)
    }

    /// Half-open range `[lo, hi)` covered by bucket `i`, or `None` past the
    /// overflow bucket.
    pub fn bucket_range(&self, i: usize) -> Option<(f64, f64)> {
        if i > self.bounds.len() {
            return None;
        }
        let lo = match i.checked_sub(1) {
            Some(prev) => self.bounds.get(prev).copied()?,
            None => f64::NEG_INFINITY,
        };
        let hi = self.bounds.get(i).copied().unwrap_or(f64::INFINITY);
        Some((lo, hi))
    }

    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    fn add(&mut self, v: f64) {
        self.count += 1;
        self.min = self.min.min(v);
        self.max = self.max.max(v);

        // Welford's running mean/variance
        let delta = v - self.mean;
        self.mean += delta / self.count as f64;
        self.sum_of_squared_dev += delta * (v - self.mean);

        let i = Self::bucket_for(&self.bounds, v);
        self.bucket_counts[i] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_edges_are_half_open() {
        let bounds = [0.0, 10.0, 20.0];
        assert_eq!(DistributionData::bucket_for(&bounds, -1.0), 0);
        assert_eq!(DistributionData::bucket_for(&bounds, 0.0), 1);
        assert_eq!(DistributionData::bucket_for(&bounds, 9.99), 1);
        assert_eq!(DistributionData::bucket_for(&bounds, 10.0), 2);
        assert_eq!(DistributionData::bucket_for(&bounds, 25.0), 3);
    }

    #[test]
    fn running_stats() {
        let mut d = DistributionData::new(&[0.0, 10.0]);
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            d.add(v);
        }
        assert_eq!(d.count, 8);
        assert_eq!(d.min, 2.0);
        assert_eq!(d.max, 9.0);
        assert!((d.mean - 5.0).abs() < 1e-9);
        assert!((d.sum_of_squared_dev - 32.0).abs() < 1e-9);
        assert!((d.sum() - 40.0).abs() < 1e-9);
        assert_eq!(d.bucket_counts, vec![0, 8, 0]);
        assert_eq!(d.bucket_range(0), Some((f64::NEG_INFINITY, 0.0)));
        assert_eq!(d.bucket_range(1), Some((0.0, 10.0)));
        assert_eq!(d.bucket_range(2), Some((10.0, f64::INFINITY)));
    }

    #[test]
    fn bucket_range_past_overflow_is_none() {
        let d = DistributionData::new(&[0.0, 10.0]);
        assert_eq!(d.bucket_range(3), None);
        assert_eq!(d.bucket_range(usize::MAX), None);
    }

    #[test]
    fn count_ignores_value() {
        let mut c = AggregationData::new(&Aggregation::Count);
        c.add(-3.0);
        c.add(1e9);
        assert_eq!(c.as_count(), Some(2));
        assert!(c.as_distribution().is_none());
    }
}
