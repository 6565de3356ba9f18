//! Written files load back into the configuration they were written from.

use krb5_conf::{Configuration, to_string, write_file};
use krb5_test_utils::{fixtures, parser_defaults, read};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[rstest]
#[case::test_kdc(fixtures::test_kdc_config())]
#[case::full(fixtures::full_config())]
fn test_fixture_round_trip(#[case] config: Configuration) {
    let loaded = read(&to_string(&config)).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_parser_defaults_round_trip() {
    let config = read("").unwrap();
    assert_eq!(config.lib_defaults, parser_defaults());
    assert_eq!(read(&to_string(&config)).unwrap(), config);
}

#[test]
fn test_round_trip_through_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("krb5.conf");
    let config = fixtures::test_kdc_config();

    write_file(&config, &path).unwrap();

    let loaded = read(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_unset_field_reloads_as_parser_default() {
    // ccache_type 0 is omitted, so a reader falls back to its own default.
    let mut config = fixtures::test_kdc_config();
    config.lib_defaults.ccache_type = 0;

    let loaded = read(&to_string(&config)).unwrap();
    assert_eq!(loaded.lib_defaults.ccache_type, parser_defaults().ccache_type);
}
