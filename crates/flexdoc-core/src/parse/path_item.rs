use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::parameter::ParameterOrRef;
use super::request_body::RequestBodyOrRef;
use super::response::ResponseOrRef;
use super::security::SecurityRequirement;

/// Keys of a path item that describe the path itself rather than a method.
const PATH_LEVEL_KEYS: &[&str] = &["summary", "description", "parameters", "servers", "$ref"];

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterOrRef>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodyOrRef>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseOrRef>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}

impl Operation {
    /// The summary, if it is present and non-empty.
    pub fn display_summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }

    /// Read an operation object field by field. A field that does not fit its
    /// type falls back to its default, and a bad parameter or response is
    /// dropped on its own, so the rest of the operation is kept.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Operation {
            operation_id: field(object, "operationId"),
            summary: field(object, "summary"),
            description: field(object, "description"),
            tags: field(object, "tags"),
            parameters: object
                .get("parameters")
                .map(|v| lenient_list(v, "parameters"))
                .unwrap_or_default(),
            request_body: field(object, "requestBody"),
            responses: object
                .get("responses")
                .map(lenient_responses)
                .unwrap_or_default(),
            deprecated: field(object, "deprecated"),
            security: field(object, "security"),
        }
    }
}

/// One method entry of a path item, classified at the parse boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PathEntry {
    Operation(Box<Operation>),
    /// The value under a method key was not an object.
    Malformed { raw: Value, reason: String },
}

impl PathEntry {
    fn classify(raw: Value) -> Self {
        match &raw {
            Value::Object(object) => PathEntry::Operation(Box::new(Operation::from_object(object))),
            _ => {
                let reason = format!("expected an operation object, found {}", value_kind(&raw));
                PathEntry::Malformed { raw, reason }
            }
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            PathEntry::Operation(op) => Some(op),
            PathEntry::Malformed { .. } => None,
        }
    }
}

/// A path item: path-level metadata plus method entries in document order.
///
/// Method keys are not restricted to the canonical HTTP verbs. Any key that
/// is not a path-level field or an `x-` extension is treated as a method.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<ParameterOrRef>,
    pub entries: IndexMap<String, PathEntry>,
    /// Path-level `servers`, `$ref`, and extension values, kept verbatim.
    pub extra: IndexMap<String, Value>,
}

impl PathItem {
    pub fn from_raw(raw: IndexMap<String, Value>) -> Self {
        let mut item = PathItem::default();
        for (key, value) in raw {
            match key.as_str() {
                "summary" => item.summary = value.as_str().map(String::from),
                "description" => item.description = value.as_str().map(String::from),
                "parameters" => item.parameters = lenient_list(&value, "path-level parameters"),
                k if PATH_LEVEL_KEYS.contains(&k) || k.starts_with("x-") => {
                    item.extra.insert(key, value);
                }
                _ => {
                    let entry = PathEntry::classify(value);
                    if let PathEntry::Malformed { reason, .. } = &entry {
                        log::debug!("method entry `{key}` is malformed: {reason}");
                    }
                    item.entries.insert(key, entry);
                }
            }
        }
        item
    }

    /// Well-formed operations in document order, keyed by the raw method key.
    pub fn operations(&self) -> impl Iterator<Item = (&str, &Operation)> {
        self.entries
            .iter()
            .filter_map(|(method, entry)| entry.as_operation().map(|op| (method.as_str(), op)))
    }

    /// Method keys whose values were rejected at the boundary.
    pub fn malformed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(method, entry)| match entry {
            PathEntry::Malformed { reason, .. } => Some((method.as_str(), reason.as_str())),
            PathEntry::Operation(_) => None,
        })
    }
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(PathItem::from_raw(raw))
    }
}

impl Serialize for PathItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(summary) = &self.summary {
            map.serialize_entry("summary", summary)?;
        }
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        if !self.parameters.is_empty() {
            map.serialize_entry("parameters", &self.parameters)?;
        }
        for (method, entry) in &self.entries {
            match entry {
                PathEntry::Operation(op) => map.serialize_entry(method, op)?,
                PathEntry::Malformed { raw, .. } => map.serialize_entry(method, raw)?,
            }
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn field<T: DeserializeOwned + Default>(object: &Map<String, Value>, key: &str) -> T {
    match object.get(key) {
        None | Some(Value::Null) => T::default(),
        Some(value) => T::deserialize(value).unwrap_or_else(|e| {
            log::debug!("ignoring malformed operation field `{key}`: {e}");
            T::default()
        }),
    }
}

fn lenient_list<T: DeserializeOwned>(value: &Value, what: &str) -> Vec<T> {
    let Value::Array(items) = value else {
        log::debug!("ignoring {what}: expected an array, found {}", value_kind(value));
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            T::deserialize(item)
                .inspect_err(|e| log::debug!("skipping malformed entry in {what}: {e}"))
                .ok()
        })
        .collect()
}

fn lenient_responses(value: &Value) -> IndexMap<String, ResponseOrRef> {
    let Value::Object(entries) = value else {
        log::debug!("ignoring responses: expected an object, found {}", value_kind(value));
        return IndexMap::new();
    };
    entries
        .iter()
        .filter_map(|(status, response)| match ResponseOrRef::deserialize(response) {
            Ok(response) => Some((status.clone(), response)),
            Err(e) => {
                log::debug!("skipping malformed response `{status}`: {e}");
                None
            }
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
