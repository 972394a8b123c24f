//! End-to-end tests for arrays and hashes through the binary.

mod common;

use common::assert_result;

#[test]
fn test_array_literal_prints() {
    assert_result("[1, 2 * 2, 3 + 3];", "[1, 4, 6]");
}

#[test]
fn test_array_indexing() {
    assert_result("let a = [1, 2, 3]; a[0] + a[1] + a[2];", "6");
}

#[test]
fn test_hash_lookup_with_computed_key() {
    assert_result("{\"one\": 1, \"two\": 2}[\"o\" + \"ne\"];", "1");
}

#[test]
fn test_hash_with_mixed_keys() {
    assert_result("let h = {1: \"int\", true: \"bool\"}; h[true];", "bool");
}

#[test]
fn test_single_pair_hash_prints() {
    assert_result("{\"one\": 1};", "{one: 1}");
}

#[test]
fn test_nested_collections() {
    assert_result("let m = {\"xs\": [1, 2, 3]}; m[\"xs\"][1];", "2");
}

#[test]
fn test_out_of_range_prints_nothing() {
    // Out-of-range indexing is null, and null results are not printed.
    let stdout = common::run_ok("[1, 2, 3][99];");
    assert_eq!(stdout, "");
}
