//! Ordered attribute map for image tags.
//!
//! Attribute order is part of the output contract: resolving the same field
//! twice must yield a byte-identical attribute set, so the map preserves
//! insertion order (serde_json with `preserve_order`) instead of hashing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered `name -> value` attribute map.
///
/// Values are JSON values as delivered by the CMS payload; the render
/// boundary decides how each value kind becomes markup. Merging always
/// produces a new map, caller-supplied maps are never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether an attribute is present (value may still be null).
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set an attribute. An existing attribute keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Layer `overlay` on top of `self`, producing a new map.
    ///
    /// Overlay entries win on name collisions; neither input is modified.
    pub fn merged_with(&self, overlay: &Attributes) -> Attributes {
        let mut merged = self.0.clone();
        for (name, value) in &overlay.0 {
            merged.insert(name.clone(), value.clone());
        }
        Attributes(merged)
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
