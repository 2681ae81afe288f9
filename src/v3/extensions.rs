//! # Specification Extensions
//!
//! OpenAPI allows certain objects to carry additional vendor-specific
//! fields whose names start with `x-`. `Extensions` holds those fields
//! and merges them into the owning object's serialized form; the
//! `Extensible` trait marks which object types support the capability.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Vendor extension fields (`x-...`) attached to a spec object.
///
/// Keys are stored with their full `x-` prefix and serialize alongside
/// the owning object's declared fields. On deserialization, keys without
/// the prefix are ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions {
    values: BTreeMap<String, Value>,
}

impl Extensions {
    /// Creates an empty extension map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an extension field. The key must carry its `x-` prefix.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Removes the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Returns true when no extension fields are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of extension fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the extension entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl Serialize for Extensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Extensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let values = raw
            .into_iter()
            .filter(|(key, _)| key.starts_with("x-"))
            .collect();
        Ok(Self { values })
    }
}

/// Capability marker for objects that permit vendor extension fields.
///
/// Mirrors the specification's "This object MAY be extended" notes: a
/// type implements this trait exactly when its serialized form accepts
/// additional `x-` keys.
pub trait Extensible {
    /// Read access to the object's extension fields.
    fn extensions(&self) -> &Extensions;

    /// Mutable access to the object's extension fields.
    fn extensions_mut(&mut self) -> &mut Extensions;
}

/// Implements `Extensible` for types carrying an `extensions` field.
macro_rules! impl_extensible {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::v3::extensions::Extensible for $ty {
                fn extensions(&self) -> &$crate::v3::extensions::Extensions {
                    &self.extensions
                }

                fn extensions_mut(&mut self) -> &mut $crate::v3::extensions::Extensions {
                    &mut self.extensions
                }
            }
        )+
    };
}

pub(crate) use impl_extensible;
