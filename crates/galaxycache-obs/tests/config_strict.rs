#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use galaxycache_obs::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
tags:
  max_value_lenn: 64 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.tags.max_value_len, 255);
}

#[test]
fn explicit_tag_limit() {
    let ok = r#"
version: 1
tags:
  max_value_len: 32
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.tags.max_value_len, 32);
}

#[test]
fn wrong_version_is_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn tag_limit_out_of_range() {
    let cases = [
        "version: 1\ntags: { max_value_len: 0 }\n",
        "version: 1\ntags: { max_value_len: 256 }\n",
    ];
    for bad in cases {
        let err = config::load_from_str(bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_CONFIG");
    }
}

#[test]
fn missing_file_is_bad_config() {
    let err = config::load_from_file("/nonexistent/galaxycache-stats.yaml")
        .expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}
