pub mod components;
pub mod media_type;
pub mod parameter;
pub mod path_item;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod security;
pub mod server;
pub mod spec;

use std::fs;
use std::path::Path;

use crate::error::ParseError;
pub use spec::OpenApiDocument;

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiDocument, ParseError> {
    let doc: OpenApiDocument = serde_yaml_ng::from_str(input)?;
    validate(&doc)?;
    Ok(doc)
}

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiDocument, ParseError> {
    let doc: OpenApiDocument = serde_json::from_str(input)?;
    validate(&doc)?;
    Ok(doc)
}

/// Read and parse a document, choosing the format from the file extension.
/// Anything other than `.json` is read as YAML.
pub fn from_path(path: &Path) -> Result<OpenApiDocument, ParseError> {
    let content = fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.display().to_string(),
        source,
    })?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => from_json(&content),
        _ => from_yaml(&content),
    }
}

fn validate(doc: &OpenApiDocument) -> Result<(), ParseError> {
    if !doc.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(doc.openapi.clone()));
    }
    for (path, item) in &doc.paths {
        for (method, reason) in item.malformed() {
            log::debug!("skipping {method} {path}: {reason}");
        }
    }
    Ok(())
}
