use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::MediaType;

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,

    #[serde(default)]
    pub required: bool,
}

/// A reference or inline request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestBodyOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    RequestBody(RequestBody),
}

impl RequestBodyOrRef {
    /// Referenced bodies are not resolved, so they never report `required`.
    pub fn is_required(&self) -> bool {
        match self {
            RequestBodyOrRef::RequestBody(body) => body.required,
            RequestBodyOrRef::Ref { .. } => false,
        }
    }

    pub fn content_types(&self) -> Vec<&str> {
        match self {
            RequestBodyOrRef::RequestBody(body) => body.content.keys().map(String::as_str).collect(),
            RequestBodyOrRef::Ref { .. } => Vec::new(),
        }
    }
}
