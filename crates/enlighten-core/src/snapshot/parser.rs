//! Decoding recorded JSON into snapshot values

use super::model::{FunctionSnapshot, Key, ObjectSnapshot, ParameterSnapshot, Snapshot};
use crate::error::{EnlightenError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved keys that mark object and function snapshots in recorded JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SnapshotKeys {
    pub class_name: String,
    pub attributes: String,
    pub function: String,
    pub parameters: String,
    pub parameter: String,
    pub type_name: String,
    pub optional: String,
    pub default: String,
    pub return_type: String,
}

impl Default for SnapshotKeys {
    fn default() -> Self {
        Self {
            class_name: "className".to_string(),
            attributes: "attributes".to_string(),
            function: "function".to_string(),
            parameters: "parameters".to_string(),
            parameter: "parameter".to_string(),
            type_name: "type".to_string(),
            optional: "optional".to_string(),
            default: "default".to_string(),
            return_type: "returnType".to_string(),
        }
    }
}

/// What to do with a node that has no recognized shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Substitute [`Snapshot::Unrecognized`] and keep going
    #[default]
    Permissive,
    /// Fail with [`EnlightenError::MalformedSnapshot`]
    Strict,
}

/// Converts recorded JSON into [`Snapshot`] values
#[derive(Debug, Clone, Default)]
pub struct SnapshotParser {
    keys: SnapshotKeys,
    policy: MalformedPolicy,
}

impl SnapshotParser {
    /// Create a parser with default marker keys and the permissive policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom marker keys
    pub fn with_keys(mut self, keys: SnapshotKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Use a malformed-input policy
    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Decode JSON text
    pub fn parse_str(&self, json: &str) -> Result<Snapshot> {
        let value: Value = serde_json::from_str(json)?;
        self.parse(&value)
    }

    /// Decode an already parsed JSON value
    pub fn parse(&self, value: &Value) -> Result<Snapshot> {
        self.parse_node(value, "")
    }

    fn parse_node(&self, value: &Value, path: &str) -> Result<Snapshot> {
        match value {
            Value::Null => Ok(Snapshot::Null),
            Value::Bool(b) => Ok(Snapshot::Bool(*b)),
            Value::Number(n) => Ok(match n.as_i64() {
                Some(i) => Snapshot::Integer(i),
                None => Snapshot::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::String(s) => Ok(Snapshot::String(s.clone())),
            Value::Array(items) => {
                let items = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| self.parse_node(item, &child(path, &index.to_string())))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Snapshot::Sequence(items))
            }
            Value::Object(map) => {
                if present(map, &self.keys.class_name) {
                    return self.recover(self.parse_object(map, path));
                }
                if present(map, &self.keys.function) {
                    return self.recover(self.parse_function(map, path));
                }

                let entries = map
                    .iter()
                    .map(|(key, item)| {
                        Ok((Key::from_name(key), self.parse_node(item, &child(path, key))?))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Snapshot::from_entries(entries))
            }
        }
    }

    fn parse_object(&self, map: &Map<String, Value>, path: &str) -> Result<Snapshot> {
        let keys = &self.keys;
        let class_name = expect_str(map, &keys.class_name, path)?;

        let attributes = match map.get(&keys.attributes) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Object(attributes)) => {
                let base = child(path, &keys.attributes);
                attributes
                    .iter()
                    .map(|(name, item)| Ok((name.clone(), self.parse_node(item, &child(&base, name))?)))
                    .collect::<Result<Vec<_>>>()?
            }
            // An empty attribute list is recorded as `[]`; list items are named by index
            Some(Value::Array(items)) => {
                let base = child(path, &keys.attributes);
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let name = index.to_string();
                        let value = self.parse_node(item, &child(&base, &name))?;
                        Ok((name, value))
                    })
                    .collect::<Result<Vec<_>>>()?
            }
            Some(_) => {
                return Err(EnlightenError::malformed(
                    pointer(&child(path, &keys.attributes)),
                    "attributes must be an object or an array",
                ))
            }
        };

        Ok(Snapshot::Object(ObjectSnapshot {
            class_name: class_name.to_string(),
            attributes,
        }))
    }

    fn parse_function(&self, map: &Map<String, Value>, path: &str) -> Result<Snapshot> {
        let keys = &self.keys;
        let function = expect_str(map, &keys.function, path)?;

        let parameters = match map.get(&keys.parameters) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(parameters)) => {
                let base = child(path, &keys.parameters);
                parameters
                    .iter()
                    .enumerate()
                    .map(|(index, item)| self.parse_parameter(item, &child(&base, &index.to_string())))
                    .collect::<Result<Vec<_>>>()?
            }
            Some(_) => {
                return Err(EnlightenError::malformed(
                    pointer(&child(path, &keys.parameters)),
                    "parameters must be an array",
                ))
            }
        };

        Ok(Snapshot::Function(FunctionSnapshot {
            function: function.to_string(),
            parameters,
            return_type: optional_str(map, &keys.return_type, path)?,
        }))
    }

    fn parse_parameter(&self, value: &Value, path: &str) -> Result<ParameterSnapshot> {
        let keys = &self.keys;
        let map = value
            .as_object()
            .ok_or_else(|| EnlightenError::malformed(pointer(path), "parameter must be an object"))?;

        let optional = match map.get(&keys.optional) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                return Err(EnlightenError::malformed(
                    pointer(&child(path, &keys.optional)),
                    "optional must be a boolean",
                ))
            }
        };

        let default = match map.get(&keys.default) {
            None | Some(Value::Null) => None,
            Some(item) => Some(self.parse_node(item, &child(path, &keys.default))?),
        };

        Ok(ParameterSnapshot {
            parameter: expect_str(map, &keys.parameter, path)?.to_string(),
            type_name: optional_str(map, &keys.type_name, path)?,
            optional,
            default,
        })
    }

    fn recover(&self, result: Result<Snapshot>) -> Result<Snapshot> {
        match (result, self.policy) {
            (Err(EnlightenError::MalformedSnapshot { path, reason }), MalformedPolicy::Permissive) => {
                tracing::warn!(%path, %reason, "Skipping malformed snapshot node");
                Ok(Snapshot::Unrecognized)
            }
            (result, _) => result,
        }
    }
}

/// A marker counts only when its value is not null
fn present(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).map_or(false, |value| !value.is_null())
}

fn expect_str<'a>(map: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a str> {
    map.get(key).and_then(Value::as_str).ok_or_else(|| {
        EnlightenError::malformed(pointer(&child(path, key)), format!("{} must be a string", key))
    })
}

/// Absent, null and empty strings all mean "not declared"
fn optional_str(map: &Map<String, Value>, key: &str, path: &str) -> Result<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(EnlightenError::malformed(
            pointer(&child(path, key)),
            format!("{} must be a string or null", key),
        )),
    }
}

fn child(path: &str, segment: &str) -> String {
    format!("{}/{}", path, segment.replace('~', "~0").replace('/', "~1"))
}

fn pointer(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
