//! Configuration tree values
//!
//! The dynamic, schema-constrained representation produced by the declarative
//! configuration front end: nested blocks, 0..1-element lists standing in for
//! optional blocks, unordered sets and bare scalars.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// A leaf of the configuration tree
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
}

impl Scalar {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::String(_) => "string",
            Scalar::Number(_) => "number",
            Scalar::Bool(_) => "bool",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Float scalar, falling back to a string for values JSON cannot carry (NaN, infinities)
    pub fn from_f64(value: f64) -> Self {
        Number::from_f64(value)
            .map(Scalar::Number)
            .unwrap_or_else(|| Scalar::String(value.to_string()))
    }

    fn to_json(&self) -> Value {
        match self {
            Scalar::String(s) => Value::String(s.clone()),
            Scalar::Number(n) => Value::Number(n.clone()),
            Scalar::Bool(b) => Value::Bool(*b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(Number::from(value))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// A node of the configuration tree
///
/// Unset fields are absent from a [`ConfigValue::Block`]; they are never
/// represented by an explicit null.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Scalar(Scalar),
    /// Ordered repetition, also used for optional single blocks (0 or 1 element)
    OrderedList(Vec<ConfigValue>),
    /// Repetition without order semantics
    UnorderedSet(Vec<ConfigValue>),
    /// Named-field group
    Block(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// An empty block
    pub fn block() -> Self {
        ConfigValue::Block(BTreeMap::new())
    }

    /// A string scalar
    pub fn string(value: impl Into<String>) -> Self {
        ConfigValue::Scalar(Scalar::String(value.into()))
    }

    /// An integer scalar
    pub fn int(value: i64) -> Self {
        ConfigValue::Scalar(Scalar::from(value))
    }

    /// A floating point scalar
    pub fn float(value: f64) -> Self {
        ConfigValue::Scalar(Scalar::from_f64(value))
    }

    /// A boolean scalar
    pub fn bool(value: bool) -> Self {
        ConfigValue::Scalar(Scalar::Bool(value))
    }

    /// An optional single block holding `value`
    pub fn single(value: ConfigValue) -> Self {
        ConfigValue::OrderedList(vec![value])
    }

    /// Builder-style insertion into a block; no-op on other kinds
    pub fn with(mut self, name: impl Into<String>, value: ConfigValue) -> Self {
        if let ConfigValue::Block(fields) = &mut self {
            fields.insert(name.into(), value);
        }
        self
    }

    /// Insert a one-element list holding `value`
    pub fn with_single(self, name: impl Into<String>, value: ConfigValue) -> Self {
        self.with(name, ConfigValue::single(value))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ConfigValue::Scalar(s) => s.kind_name(),
            ConfigValue::OrderedList(_) => "list",
            ConfigValue::UnorderedSet(_) => "set",
            ConfigValue::Block(_) => "block",
        }
    }

    pub fn as_block(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Block(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            ConfigValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of a list or set
    pub fn elements(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::OrderedList(items) | ConfigValue::UnorderedSet(items) => Some(items),
            _ => None,
        }
    }

    /// Field lookup on a block
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.as_block().and_then(|fields| fields.get(name))
    }

    /// Follow a dotted path through blocks, descending into the first element of lists
    pub fn pointer(&self, path: &str) -> Option<&ConfigValue> {
        let mut current = self;
        for part in path.split('.') {
            if let Some(items) = current.elements() {
                current = items.first()?;
            }
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Convert from JSON; `null` becomes `None`, null members and elements are dropped
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(ConfigValue::Scalar(Scalar::Bool(*b))),
            Value::Number(n) => Some(ConfigValue::Scalar(Scalar::Number(n.clone()))),
            Value::String(s) => Some(ConfigValue::Scalar(Scalar::String(s.clone()))),
            Value::Array(items) => Some(ConfigValue::OrderedList(
                items.iter().filter_map(ConfigValue::from_json).collect(),
            )),
            Value::Object(map) => Some(ConfigValue::Block(
                map.iter()
                    .filter_map(|(k, v)| ConfigValue::from_json(v).map(|v| (k.clone(), v)))
                    .collect(),
            )),
        }
    }

    /// Convert to JSON; lists and sets both become arrays
    pub fn to_json(&self) -> Value {
        match self {
            ConfigValue::Scalar(s) => s.to_json(),
            ConfigValue::OrderedList(items) | ConfigValue::UnorderedSet(items) => {
                Value::Array(items.iter().map(ConfigValue::to_json).collect())
            }
            ConfigValue::Block(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    /// Structural equality that compares set elements as multisets
    pub fn set_eq(&self, other: &ConfigValue) -> bool {
        match (self, other) {
            (ConfigValue::Scalar(a), ConfigValue::Scalar(b)) => a == b,
            (ConfigValue::OrderedList(a), ConfigValue::OrderedList(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.set_eq(y))
            }
            (ConfigValue::UnorderedSet(a), ConfigValue::UnorderedSet(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                let mut used = vec![false; b.len()];
                a.iter().all(|x| {
                    match b
                        .iter()
                        .enumerate()
                        .find(|(i, y)| !used[*i] && x.set_eq(y))
                    {
                        Some((i, _)) => {
                            used[i] = true;
                            true
                        }
                        None => false,
                    }
                })
            }
            (ConfigValue::Block(a), ConfigValue::Block(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|other| v.set_eq(other)))
            }
            _ => false,
        }
    }
}

impl From<Scalar> for ConfigValue {
    fn from(value: Scalar) -> Self {
        ConfigValue::Scalar(value)
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ConfigValue::from_json(&value)
            .ok_or_else(|| D::Error::custom("configuration tree cannot be null"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_drops_nulls() {
        let value = ConfigValue::from_json(&json!({
            "filter_id": "f1",
            "parameter_name": null,
            "values": ["a", null, "b"]
        }))
        .unwrap();

        let block = value.as_block().unwrap();
        assert_eq!(block.len(), 2);
        assert!(!block.contains_key("parameter_name"));
        assert_eq!(value.get("values").unwrap().elements().unwrap().len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let source = json!({
            "column": [{"column_name": "sales", "data_set_identifier": "ds"}],
            "include_minimum": true,
            "value": 1.5
        });
        let value = ConfigValue::from_json(&source).unwrap();
        assert_eq!(value.to_json(), source);
    }

    #[test]
    fn test_set_eq_ignores_set_order_only() {
        let a = ConfigValue::UnorderedSet(vec![ConfigValue::string("x"), ConfigValue::string("y")]);
        let b = ConfigValue::UnorderedSet(vec![ConfigValue::string("y"), ConfigValue::string("x")]);
        assert!(a.set_eq(&b));
        assert_ne!(a, b);

        let c = ConfigValue::OrderedList(vec![ConfigValue::string("x"), ConfigValue::string("y")]);
        let d = ConfigValue::OrderedList(vec![ConfigValue::string("y"), ConfigValue::string("x")]);
        assert!(!c.set_eq(&d));
    }

    #[test]
    fn test_pointer_descends_through_single_blocks() {
        let tree = ConfigValue::block().with_single(
            "column",
            ConfigValue::block().with("column_name", ConfigValue::string("sales")),
        );
        assert_eq!(
            tree.pointer("column.column_name"),
            Some(&ConfigValue::string("sales"))
        );
        assert_eq!(tree.pointer("column.missing"), None);
    }

    #[test]
    fn test_deserialize_rejects_null() {
        let result: Result<ConfigValue, _> = serde_json::from_str("null");
        assert!(result.is_err());
    }
}
