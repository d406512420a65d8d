//! Caller-supplied custom data: scalar values keyed by literal marker name.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar substitution value. Displays as the value's literal text:
/// strings as-is, booleans as `true`/`false`, integral floats without a
/// fractional part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// An insertion-ordered mapping from key to [`Scalar`], supplied per
/// [`process`](crate::Engine::process) call.
///
/// Each key corresponds 1:1 to a literal parameterless marker name; the
/// custom-data pass runs before the registry pass, so a key shadows any
/// registered marker of the same name. Iteration order is insertion order;
/// re-inserting a key overwrites the value in place, keeping its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomData {
    entries: Vec<(String, Scalar)>,
}

impl CustomData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds custom data from a JSON object, taking scalar members in the
    /// map's iteration order. Nested arrays and objects have no scalar text
    /// form and are skipped; `null` members are skipped likewise.
    pub fn from_json_value(value: &serde_json::Value) -> Self {
        let mut data = Self::new();
        let Some(object) = value.as_object() else {
            debug!("custom data JSON is not an object, ignoring");
            return data;
        };
        for (key, member) in object {
            let scalar = match member {
                serde_json::Value::Bool(b) => Scalar::Bool(*b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => Scalar::Int(i),
                    None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
                },
                serde_json::Value::String(s) => Scalar::Str(s.clone()),
                _ => {
                    debug!("skipping non-scalar custom data member '{}'", key);
                    continue;
                }
            };
            data.insert(key.clone(), scalar);
        }
        data
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for CustomData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (key, value) in iter {
            data.insert(key, value);
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::from("hi").to_string(), "hi");
        assert_eq!(Scalar::from(42).to_string(), "42");
        assert_eq!(Scalar::from(3.0).to_string(), "3");
        assert_eq!(Scalar::from(2.5).to_string(), "2.5");
        assert_eq!(Scalar::from(true).to_string(), "true");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut data = CustomData::new();
        data.insert("b", 1).insert("a", 2).insert("c", 3);
        let keys: Vec<&str> = data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut data = CustomData::new();
        data.insert("x", "old").insert("y", 2);
        data.insert("x", "new");
        let entries: Vec<(&str, String)> =
            data.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(entries, [("x", "new".to_string()), ("y", "2".to_string())]);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_from_json_value_scalars_only() {
        let data = CustomData::from_json_value(&json!({
            "name": "Bob",
            "count": 3,
            "ratio": 0.5,
            "active": true,
            "nested": {"no": 1},
            "list": [1, 2],
            "missing": null
        }));
        assert_eq!(data.get("name").unwrap().to_string(), "Bob");
        assert_eq!(data.get("count").unwrap().to_string(), "3");
        assert_eq!(data.get("ratio").unwrap().to_string(), "0.5");
        assert_eq!(data.get("active").unwrap().to_string(), "true");
        assert!(data.get("nested").is_none());
        assert!(data.get("list").is_none());
        assert!(data.get("missing").is_none());
    }

    #[test]
    fn test_scalar_untagged_deserialize() {
        let scalar: Scalar = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(scalar, Scalar::Str("text".to_string()));
        let scalar: Scalar = serde_json::from_str("7").unwrap();
        assert_eq!(scalar, Scalar::Int(7));
        let scalar: Scalar = serde_json::from_str("false").unwrap();
        assert_eq!(scalar, Scalar::Bool(false));
    }
}
