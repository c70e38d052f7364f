//! JSON deep-merge support
//!
//! Overlays contribute settings into shared namespaces rather than replacing
//! them wholesale. This module provides the recursive merge used for those
//! nested maps: objects merge key by key, and anything else is replaced by
//! the incoming value.

use serde_json::Value as JsonValue;

/// Recursively merge `source` into `target`.
///
/// - Objects: merged key by key, descending into sub-objects on both sides.
/// - Everything else (arrays, scalars, null): `target` is replaced with a
///   clone of `source`.
///
/// Keys present only in `target` are never touched, so a namespace that
/// already carries unrelated entries keeps them.
pub fn deep_merge(target: &mut JsonValue, source: &JsonValue) {
    match (target, source) {
        (JsonValue::Object(target_map), JsonValue::Object(source_map)) => {
            for (key, value) in source_map {
                match target_map.get_mut(key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        deep_merge(existing, value);
                    }
                    Some(existing) => *existing = value.clone(),
                    None => {
                        target_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}
