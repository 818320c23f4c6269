//! galaxycache views and their bucket ladders.
//!
//! View names are the external contract with dashboards, same as measure
//! names. Both ladders are shared by every view of their unit.

use galaxycache_core::stats::{Aggregation, Measure, TagKey, View};

use super::measures::*;

/// Byte-size bucket bounds, sub-kilobyte to 4GiB.
pub const BYTES_BOUNDS: [f64; 14] = [
    0.0,
    1024.0,
    2048.0,
    4096.0,
    16384.0,
    65536.0,
    262144.0,
    1048576.0,
    4194304.0,
    16777216.0,
    67108864.0,
    268435456.0,
    1073741824.0,
    4294967296.0,
];

/// Latency bucket bounds in milliseconds. Dense below 100ms.
pub const MILLISECONDS_BOUNDS: [f64; 41] = [
    0.0, 0.01, 0.05, 0.1, 0.3, 0.6, 0.8, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 13.0, 16.0,
    20.0, 25.0, 30.0, 40.0, 50.0, 65.0, 80.0, 100.0, 130.0, 160.0, 200.0, 250.0, 300.0, 400.0,
    500.0, 650.0, 800.0, 1000.0, 2000.0, 5000.0, 10000.0, 20000.0, 50000.0, 100000.0,
];

#[derive(Clone, Copy)]
enum Agg {
    Count,
    Bytes,
    Milliseconds,
}

impl Agg {
    fn aggregation(self) -> Aggregation {
        match self {
            Agg::Count => Aggregation::Count,
            Agg::Bytes => Aggregation::distribution(&BYTES_BOUNDS),
            Agg::Milliseconds => Aggregation::distribution(&MILLISECONDS_BOUNDS),
        }
    }
}

// (name, description, measure, aggregation), in registration order.
// loads_errors has no view.
const VIEW_DEFS: [(&str, &str, Measure, Agg); 13] = [
    ("galaxycache/gets", "The number of Get requests", M_GETS, Agg::Count),
    (
        "galaxycache/cache_hits",
        "The number of times that either cache was good",
        M_CACHE_HITS,
        Agg::Count,
    ),
    (
        "galaxycache/cache_misses",
        "The number of times that either cache was not good",
        M_CACHE_MISSES,
        Agg::Count,
    ),
    (
        "galaxycache/star_loads",
        "The number of remote loads or remote cache hits",
        M_STAR_AUTHORITY_LOADS,
        Agg::Count,
    ),
    ("galaxycache/star_errors", "The number of remote errors", M_STAR_AUTHORITY_ERRORS, Agg::Count),
    ("galaxycache/loads", "The number of loads after singleflight", M_LOADS, Agg::Count),
    (
        "galaxycache/loads_deduped",
        "The number of loads after singleflight",
        M_LOADS_DEDUPED,
        Agg::Count,
    ),
    ("galaxycache/local_loads", "The number of good local loads", M_LOCAL_LOADS, Agg::Count),
    (
        "galaxycache/local_load_errors",
        "The number of bad local loads",
        M_LOCAL_LOAD_ERRORS,
        Agg::Count,
    ),
    (
        "galaxycache/server_requests",
        "The number of Gets that came over the network from starAuthorities",
        M_SERVER_REQUESTS,
        Agg::Count,
    ),
    ("galaxycache/key_length", "The distribution of the key lengths", M_KEY_LENGTH, Agg::Bytes),
    (
        "galaxycache/value_length",
        "The distribution of the value lengths",
        M_VALUE_LENGTH,
        Agg::Bytes,
    ),
    (
        "galaxycache/roundtrip_latency",
        "The roundtrip latency",
        M_ROUNDTRIP_LATENCY_MILLISECONDS,
        Agg::Milliseconds,
    ),
];

/// Build every galaxycache view, each broken down by `command`.
pub(crate) fn all_views(command: &TagKey) -> Vec<View> {
    VIEW_DEFS
        .iter()
        .map(|(name, description, measure, agg)| {
            View::new(*name, *description, *measure, agg.aggregation())
                .with_tag_keys(vec![command.clone()])
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use galaxycache_core::stats::TagRegistry;

    fn views() -> Vec<View> {
        let tags = TagRegistry::new();
        all_views(&tags.new_key("command").unwrap())
    }

    #[test]
    fn view_names_are_pinned() {
        let names: Vec<String> = views().iter().map(|v| v.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "galaxycache/gets",
                "galaxycache/cache_hits",
                "galaxycache/cache_misses",
                "galaxycache/star_loads",
                "galaxycache/star_errors",
                "galaxycache/loads",
                "galaxycache/loads_deduped",
                "galaxycache/local_loads",
                "galaxycache/local_load_errors",
                "galaxycache/server_requests",
                "galaxycache/key_length",
                "galaxycache/value_length",
                "galaxycache/roundtrip_latency",
            ]
        );
    }

    #[test]
    fn every_view_uses_a_declared_measure() {
        for v in views() {
            assert!(ALL_MEASURES.contains(v.measure()), "{} has undeclared measure", v.name());
            assert!(v.validate().is_ok());
            assert_eq!(v.tag_keys().len(), 1);
            assert_eq!(v.tag_keys()[0].name(), "command");
        }
    }

    #[test]
    fn view_names_follow_measure_names() {
        for v in views() {
            assert_eq!(v.name(), format!("galaxycache/{}", v.measure().name()));
        }
    }

    #[test]
    fn counters_count_and_sizes_share_ladder() {
        for v in views() {
            match v.measure().unit().code() {
                "1" => assert_eq!(v.aggregation(), &Aggregation::Count, "{}", v.name()),
                "By" => {
                    assert_eq!(v.aggregation().bounds(), Some(&BYTES_BOUNDS[..]), "{}", v.name())
                }
                "ms" => assert_eq!(
                    v.aggregation().bounds(),
                    Some(&MILLISECONDS_BOUNDS[..]),
                    "{}",
                    v.name()
                ),
                other => panic!("unexpected unit {other}"),
            }
        }
    }

    #[test]
    fn ladders() {
        assert!(BYTES_BOUNDS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(BYTES_BOUNDS[0], 0.0);
        assert_eq!(BYTES_BOUNDS[13], 4294967296.0);

        assert!(MILLISECONDS_BOUNDS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(MILLISECONDS_BOUNDS[0], 0.0);
        assert_eq!(MILLISECONDS_BOUNDS[1], 0.01);
        assert_eq!(MILLISECONDS_BOUNDS[40], 100000.0);
    }
}
