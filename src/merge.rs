//! Recursive merge for JSON mappings.
//!
//! Used by embedding systems to layer override mappings (for example, log
//! formatter configuration) on top of defaults without touching either input.

use serde_json::{Map, Value};

/// Deep-merge `overlay` onto `base`, returning a new value.
///
/// Where both sides hold an object under the same key the merge recurses;
/// any other collision resolves to the overlay's value. Keys unique to either
/// side are preserved. Neither input is modified.
pub fn merge_values(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut merged: Map<String, Value> = base_map.clone();
            for (key, overlay_value) in overlay_map {
                let merged_value = match base_map.get(key) {
                    Some(base_value) => merge_values(base_value, overlay_value),
                    None => overlay_value.clone(),
                };
                merged.insert(key.clone(), merged_value);
            }
            Value::Object(merged)
        }
        _ => overlay.clone(),
    }
}
