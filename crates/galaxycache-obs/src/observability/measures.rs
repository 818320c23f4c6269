//! galaxycache measures.
//!
//! Measure names are consumed by dashboards and alerts downstream; renaming
//! one silently breaks them.

use galaxycache_core::stats::{Measure, Unit};

pub const M_GETS: Measure =
    Measure::int64("gets", "The number of Get requests", Unit::Dimensionless);
pub const M_CACHE_HITS: Measure = Measure::int64(
    "cache_hits",
    "The number of times that either cache was good",
    Unit::Dimensionless,
);
pub const M_CACHE_MISSES: Measure = Measure::int64(
    "cache_misses",
    "The number of times that either cache was not good",
    Unit::Dimensionless,
);
pub const M_STAR_AUTHORITY_LOADS: Measure = Measure::int64(
    "star_loads",
    "The number of remote loads or remote cache hits",
    Unit::Dimensionless,
);
pub const M_STAR_AUTHORITY_ERRORS: Measure =
    Measure::int64("star_errors", "The number of remote errors", Unit::Dimensionless);
pub const M_LOADS: Measure =
    Measure::int64("loads", "The number of gets/cacheHits", Unit::Dimensionless);
pub const M_LOAD_ERRORS: Measure = Measure::int64(
    "loads_errors",
    "The number of errors encountered during Get",
    Unit::Dimensionless,
);
pub const M_LOADS_DEDUPED: Measure = Measure::int64(
    "loads_deduped",
    "The number of loads after singleflight",
    Unit::Dimensionless,
);
pub const M_LOCAL_LOADS: Measure =
    Measure::int64("local_loads", "The number of good local loads", Unit::Dimensionless);
pub const M_LOCAL_LOAD_ERRORS: Measure =
    Measure::int64("local_load_errors", "The number of bad local loads", Unit::Dimensionless);
pub const M_SERVER_REQUESTS: Measure = Measure::int64(
    "server_requests",
    "The number of Gets that came over the network from starAuthorities",
    Unit::Dimensionless,
);
pub const M_KEY_LENGTH: Measure = Measure::int64("key_length", "The length of keys", Unit::Bytes);
pub const M_VALUE_LENGTH: Measure =
    Measure::int64("value_length", "The length of values", Unit::Bytes);

pub const M_ROUNDTRIP_LATENCY_MILLISECONDS: Measure = Measure::float64(
    "roundtrip_latency",
    "Roundtrip latency in milliseconds",
    Unit::Milliseconds,
);

/// Every galaxycache measure, in declaration order.
pub const ALL_MEASURES: [Measure; 14] = [
    M_GETS,
    M_CACHE_HITS,
    M_CACHE_MISSES,
    M_STAR_AUTHORITY_LOADS,
    M_STAR_AUTHORITY_ERRORS,
    M_LOADS,
    M_LOAD_ERRORS,
    M_LOADS_DEDUPED,
    M_LOCAL_LOADS,
    M_LOCAL_LOAD_ERRORS,
    M_SERVER_REQUESTS,
    M_KEY_LENGTH,
    M_VALUE_LENGTH,
    M_ROUNDTRIP_LATENCY_MILLISECONDS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use galaxycache_core::stats::ValueKind;
    use std::collections::HashSet;

    #[test]
    fn names_units_kinds_are_pinned() {
        let got: Vec<(&str, &str, ValueKind)> = ALL_MEASURES
            .iter()
            .map(|m| (m.name(), m.unit().code(), m.kind()))
            .collect();
        let int = ValueKind::Int64;
        assert_eq!(
            got,
            vec![
                ("gets", "1", int),
                ("cache_hits", "1", int),
                ("cache_misses", "1", int),
                ("star_loads", "1", int),
                ("star_errors", "1", int),
                ("loads", "1", int),
                ("loads_errors", "1", int),
                ("loads_deduped", "1", int),
                ("local_loads", "1", int),
                ("local_load_errors", "1", int),
                ("server_requests", "1", int),
                ("key_length", "By", int),
                ("value_length", "By", int),
                ("roundtrip_latency", "ms", ValueKind::Float64),
            ]
        );
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = ALL_MEASURES.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), ALL_MEASURES.len());
    }

    #[test]
    fn descriptions_are_pinned() {
        assert_eq!(M_GETS.description(), "The number of Get requests");
        assert_eq!(M_LOADS.description(), "The number of gets/cacheHits");
        assert_eq!(
            M_SERVER_REQUESTS.description(),
            "The number of Gets that came over the network from starAuthorities"
        );
        assert_eq!(
            M_ROUNDTRIP_LATENCY_MILLISECONDS.description(),
            "Roundtrip latency in milliseconds"
        );
    }
}
