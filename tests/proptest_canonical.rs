// request-key-core/tests/proptest_canonical.rs
// ============================================================================
// Module: Canonicalization Property-Based Tests
// Description: Property tests for canonical ordering invariants.
// Purpose: Detect ordering drift and panics across wide input ranges.
// ============================================================================

//! Property-based tests for canonicalization invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use request_key_core::OperationName;
use request_key_core::RequestDescriptor;
use request_key_core::build_request_key;
use request_key_core::canonical_text;
use request_key_core::sort_json_value;
use serde_json::Value;

fn json_value_strategy(max_depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|v| Value::Number(v.into())),
        any::<f64>()
            .prop_filter("finite", |v| v.is_finite())
            .prop_map(|v| { serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number) }),
        ".*".prop_map(Value::String),
    ];

    leaf.prop_recursive(max_depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0 .. 4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0 .. 4).prop_map(|map| {
                let mut object = serde_json::Map::new();
                for (key, value) in map {
                    object.insert(key, value);
                }
                Value::Object(object)
            }),
        ]
    })
}

fn is_key_sorted(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
        Value::Array(items) => items.iter().all(is_key_sorted),
        Value::Object(entries) => {
            let keys: Vec<&String> = entries.keys().collect();
            keys.windows(2).all(|pair| pair[0] < pair[1])
                && entries.values().all(is_key_sorted)
        }
    }
}

/// Rebuilds every object in the value with entries in reverse order.
fn reverse_insertion_order(value: &Value) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
        Value::Array(items) => Value::Array(items.iter().map(reverse_insertion_order).collect()),
        Value::Object(entries) => {
            let mut reversed = serde_json::Map::with_capacity(entries.len());
            for (key, value) in entries.iter().rev() {
                reversed.insert(key.clone(), reverse_insertion_order(value));
            }
            Value::Object(reversed)
        }
    }
}

proptest! {
    #[test]
    fn canonicalization_is_idempotent(value in json_value_strategy(3)) {
        let once = sort_json_value(value);
        let twice = sort_json_value(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn every_object_is_key_sorted_after_canonicalization(value in json_value_strategy(3)) {
        let canonical = sort_json_value(value);
        prop_assert!(is_key_sorted(&canonical));
    }

    #[test]
    fn canonical_text_is_invariant_under_insertion_order(value in json_value_strategy(3)) {
        let reversed = reverse_insertion_order(&value);
        let text_forward = canonical_text(&sort_json_value(value)).unwrap();
        let text_reversed = canonical_text(&sort_json_value(reversed)).unwrap();
        prop_assert_eq!(text_forward, text_reversed);
    }

    #[test]
    fn key_derivation_is_deterministic(value in json_value_strategy(2)) {
        let descriptor = RequestDescriptor {
            id: Some("abc123".to_string()),
            text: None,
            name: OperationName::new("Prop"),
        };
        let first = build_request_key(&descriptor, &value).unwrap();
        let second = build_request_key(&descriptor, &value).unwrap();
        prop_assert_eq!(first, second);
    }
}
