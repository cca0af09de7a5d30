//! Records with declared fields plus open-ended dynamic properties.
//!
//! Several catalog objects are JSON objects whose keys are only partly known
//! in advance: per-language UI strings, per-locale overviews, per-account
//! visibility entries. [`ExtensibleRecord`] models them as two parts:
//!
//! - declared fields `F`, a regular serde struct listing its key names in
//!   [`DeclaredFields::FIELD_NAMES`]
//! - a map from any other key to a value `V`
//!
//! On the wire both parts share one flat JSON object. Decoding routes every
//! declared key into `F` and every other key into the map. Encoding merges
//! them again; a dynamic key that collides with a declared name is skipped,
//! so the declared field always wins.
//!
//! # Example
//!
//! ```rust
//! use global_catalog::model::{VisibilityDetailAccounts, AccountFields};
//! use serde_json::json;
//!
//! let accounts = VisibilityDetailAccounts::from_json(
//!     r#"{"_accountid_": "abc", "def": "2020-01-01T00:00:00Z"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(accounts.fields().accountid.as_deref(), Some("abc"));
//! assert_eq!(accounts.get_property("def"), Some(&json!("2020-01-01T00:00:00Z")));
//! assert!(accounts.get_property("_accountid_").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, DeserializeOwned};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::model::errors::{PropertyError, SerializationError};

/// The fixed part of an [`ExtensibleRecord`].
pub trait DeclaredFields: Serialize + DeserializeOwned {
    /// The JSON key of every declared field.
    const FIELD_NAMES: &'static [&'static str];
}

/// Declared fields of a record that has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoFields {}

impl DeclaredFields for NoFields {
    const FIELD_NAMES: &'static [&'static str] = &[];
}

/// A JSON object with declared fields `F` and dynamic properties of type `V`.
///
/// Dynamic key order is not preserved.
#[derive(Clone, PartialEq)]
pub struct ExtensibleRecord<F = NoFields, V = Value> {
    fields: F,
    properties: HashMap<String, V>,
}

impl<F: Default, V> Default for ExtensibleRecord<F, V> {
    fn default() -> Self {
        Self {
            fields: F::default(),
            properties: HashMap::new(),
        }
    }
}

impl<F: fmt::Debug, V: fmt::Debug> fmt::Debug for ExtensibleRecord<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensibleRecord")
            .field("fields", &self.fields)
            .field("properties", &self.properties)
            .finish()
    }
}

impl<F: Default, V> ExtensibleRecord<F, V> {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F, V> ExtensibleRecord<F, V> {
    /// Creates a record with the given declared fields and no properties.
    #[must_use]
    pub fn with_fields(fields: F) -> Self {
        Self {
            fields,
            properties: HashMap::new(),
        }
    }

    /// Returns the declared fields.
    #[must_use]
    pub const fn fields(&self) -> &F {
        &self.fields
    }

    /// Returns the declared fields for modification.
    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    /// Returns the value stored under `key`.
    ///
    /// `None` means the key is absent. A stored JSON `null` is returned as
    /// `Some`.
    #[must_use]
    pub fn get_property(&self, key: &str) -> Option<&V> {
        self.properties.get(key)
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove_property(&mut self, key: &str) -> Option<V> {
        self.properties.remove(key)
    }

    /// Returns the dynamic properties only.
    #[must_use]
    pub const fn properties(&self) -> &HashMap<String, V> {
        &self.properties
    }

    /// Returns `true` if no dynamic property is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Consumes the record and returns its two parts.
    #[must_use]
    pub fn into_parts(self) -> (F, HashMap<String, V>) {
        (self.fields, self.properties)
    }
}

impl<F: DeclaredFields, V> ExtensibleRecord<F, V> {
    /// Stores `value` under `key`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::DeclaredField`] if `key` names a declared field.
    pub fn set_property(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>, PropertyError> {
        let key = key.into();
        if F::FIELD_NAMES.contains(&key.as_str()) {
            return Err(PropertyError::DeclaredField { key });
        }
        Ok(self.properties.insert(key, value))
    }

    /// Stores `value` under `key`, returning the record for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::DeclaredField`] if `key` names a declared field.
    pub fn with_property(mut self, key: impl Into<String>, value: V) -> Result<Self, PropertyError> {
        self.set_property(key, value)?;
        Ok(self)
    }
}

impl<F: DeclaredFields, V: Serialize> ExtensibleRecord<F, V> {
    /// Encodes the record as a JSON object string.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if a value cannot be encoded.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<F: DeclaredFields, V: DeserializeOwned> ExtensibleRecord<F, V> {
    /// Decodes a record from a JSON object string.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if the input is not a JSON object or a
    /// value does not match its expected type.
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<F: DeclaredFields, V: Serialize> Serialize for ExtensibleRecord<F, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let declared = match serde_json::to_value(&self.fields).map_err(ser::Error::custom)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(ser::Error::custom(format!(
                    "declared fields must encode as an object, got {other}"
                )))
            }
        };

        let mut map = serializer.serialize_map(Some(declared.len() + self.properties.len()))?;
        for (key, value) in &declared {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in &self.properties {
            if F::FIELD_NAMES.contains(&key.as_str()) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, F: DeclaredFields, V: DeserializeOwned> Deserialize<'de> for ExtensibleRecord<F, V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;

        let mut declared = Map::new();
        for name in F::FIELD_NAMES {
            if let Some(value) = object.remove(*name) {
                declared.insert((*name).to_string(), value);
            }
        }
        let fields = serde_json::from_value(Value::Object(declared)).map_err(de::Error::custom)?;

        let properties = object
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value(value)
                    .map(|value| (key.clone(), value))
                    .map_err(|e| de::Error::custom(format!("property '{key}': {e}")))
            })
            .collect::<Result<HashMap<String, V>, D::Error>>()?;

        Ok(Self { fields, properties })
    }
}
