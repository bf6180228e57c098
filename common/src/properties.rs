//! Feature property bags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// String-keyed property map of one GeoJSON feature. A `null` properties
/// member deserializes to an empty map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<BTreeMap<String, Value>>")]
pub struct PropertyMap(pub BTreeMap<String, Value>);

impl From<Option<BTreeMap<String, Value>>> for PropertyMap {
    fn from(value: Option<BTreeMap<String, Value>>) -> Self {
        PropertyMap(value.unwrap_or_default())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        PropertyMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// JS-style truthiness: null, false, 0, NaN and "" count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl PropertyMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive lookup of a truthy value.
    ///
    /// Precedence: the key as given, then its capitalized form, then its
    /// upper-case form, then any other casing in key order.
    pub fn get_ignore_case(&self, key: &str) -> Option<&Value> {
        let mut capitalized = key.to_ascii_lowercase();
        if let Some(first) = capitalized.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        let preferred = [key.to_string(), capitalized, key.to_ascii_uppercase()];
        for candidate in preferred.iter() {
            if let Some(value) = self.0.get(candidate).filter(|v| is_truthy(v)) {
                return Some(value);
            }
        }
        self.0
            .iter()
            .find(|(k, v)| k.eq_ignore_ascii_case(key) && is_truthy(v))
            .map(|(_, v)| v)
    }

    /// Display text of a property, numbers rendered as-is.
    pub fn text_ignore_case(&self, key: &str) -> Option<String> {
        match self.get_ignore_case(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Numeric value of a truthy property. The feed encodes most numbers as
    /// strings, so both forms are accepted.
    pub fn number(&self, key: &str) -> Option<f64> {
        let value = self.0.get(key).filter(|v| is_truthy(v))?;
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| *f != 0.0),
            _ => None,
        }
    }
}
