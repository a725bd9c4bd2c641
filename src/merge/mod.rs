//! Recursive deep merge for dynamic configuration mappings
//!
//! Merge semantics:
//! - Mappings: deep-merge by key (recursive)
//! - Arrays: REPLACE (source wins wholesale, no element-wise merge)
//! - Scalars: override (source wins)
//! - Reserved keys: never assigned through (default deny-list: `__proto__`)
//!
//! The merge never fails. A non-mapping target is replaced with an empty
//! mapping before merging; non-mapping sources are skipped entirely.

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Keys that are never assigned through during a merge
const DEFAULT_RESERVED_KEYS: &[&str] = &["__proto__"];

/// Deep-merge engine with a configurable reserved-key deny-list
#[derive(Debug, Clone)]
pub struct Merger {
    /// Keys skipped in every source mapping, at every depth
    reserved_keys: HashSet<String>,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

impl Merger {
    /// Create a merger with the default reserved-key deny-list
    pub fn new() -> Self {
        Self {
            reserved_keys: DEFAULT_RESERVED_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Create a merger with an empty deny-list
    pub fn permissive() -> Self {
        Self {
            reserved_keys: HashSet::new(),
        }
    }

    /// Add a key to the deny-list
    pub fn deny(mut self, key: impl Into<String>) -> Self {
        self.reserved_keys.insert(key.into());
        self
    }

    /// Check whether a key is on the deny-list
    pub fn is_reserved(&self, key: &str) -> bool {
        self.reserved_keys.contains(key)
    }

    /// Merge `source` into `target` in place.
    ///
    /// A non-mapping `target` is replaced with an empty mapping first; a
    /// non-mapping `source` leaves `target` untouched. Nested mappings
    /// merge field-by-field; arrays and scalars are assigned wholesale.
    /// An entry equal to what the target already holds for the same key
    /// is left in place, so merging a mapping into an equal mapping is a
    /// no-op.
    pub fn merge_into(&self, target: &mut Value, source: &Value) {
        if !target.is_object() {
            *target = Value::Object(Map::new());
        }

        let source_map = match source.as_object() {
            Some(map) => map,
            None => return,
        };

        let target_map = match target.as_object_mut() {
            Some(map) => map,
            None => return,
        };

        for (key, incoming) in source_map {
            if self.is_reserved(key) {
                continue;
            }

            if target_map.get(key) == Some(incoming) {
                continue;
            }

            if incoming.is_object() {
                let slot = target_map.entry(key.clone()).or_insert(Value::Null);
                self.merge_into(slot, incoming);
            } else {
                target_map.insert(key.clone(), incoming.clone());
            }
        }
    }

    /// Merge each source into `target`, left to right
    pub fn merge_all(&self, target: &mut Value, sources: &[Value]) {
        for source in sources {
            self.merge_into(target, source);
        }
    }
}

/// Merge `source` into `target` with the default deny-list
pub fn deep_merge_into(target: &mut Value, source: &Value) {
    Merger::new().merge_into(target, source);
}

/// Merge each source into `target`, left to right, with the default deny-list
pub fn deep_merge_all(target: &mut Value, sources: &[Value]) {
    Merger::new().merge_all(target, sources);
}

/// Merge layers in order (first is base, last has highest precedence)
pub fn merge_layers(layers: Vec<Value>) -> Value {
    let merger = Merger::new();
    let mut merged = Value::Object(Map::new());
    for layer in &layers {
        merger.merge_into(&mut merged, layer);
    }
    merged
}
