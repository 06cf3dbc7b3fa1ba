use std::fmt;

use serde::Serialize;

use crate::error::ActionError;
use crate::parse::path_item::Operation;
use crate::parse::spec::OpenApiDocument;

/// Group key used when an operation carries no tags.
pub const DEFAULT_GROUP: &str = "Default";

/// HTTP method of a method entry. Keys outside the standard verbs are kept
/// as `Other` (uppercased) rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
    Other(String),
}

impl HttpMethod {
    /// Methods shown in the distribution panel, in display order.
    pub const DISPLAYED: [&'static str; 6] = ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"];

    /// Case-insensitive parse of a method key.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "get" => HttpMethod::Get,
            "post" => HttpMethod::Post,
            "put" => HttpMethod::Put,
            "delete" => HttpMethod::Delete,
            "patch" => HttpMethod::Patch,
            "options" => HttpMethod::Options,
            "head" => HttpMethod::Head,
            "trace" => HttpMethod::Trace,
            _ => HttpMethod::Other(raw.to_ascii_uppercase()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Other(name) => name,
        }
    }

    /// Position used by the `method` operations sorter. Non-standard methods sort last.
    pub fn sort_rank(&self) -> usize {
        match self {
            HttpMethod::Get => 0,
            HttpMethod::Post => 1,
            HttpMethod::Put => 2,
            HttpMethod::Delete => 3,
            HttpMethod::Patch => 4,
            HttpMethod::Options => 5,
            HttpMethod::Head => 6,
            HttpMethod::Trace => 7,
            HttpMethod::Other(_) => 8,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HttpMethod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Identifier of a projected operation: `"{METHOD}-{path}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EndpointId(String);

impl EndpointId {
    pub fn new(method: &HttpMethod, path: &str) -> Self {
        EndpointId(format!("{}-{}", method.as_str(), path))
    }

    /// Parse user input such as `post-/products`. The method part is
    /// normalized to uppercase; the path must start with `/`.
    pub fn parse(raw: &str) -> Result<Self, ActionError> {
        let (method, path) = raw
            .split_once('-')
            .ok_or_else(|| ActionError::InvalidEndpointId(raw.to_string()))?;
        if method.is_empty() || !path.starts_with('/') {
            return Err(ActionError::InvalidEndpointId(raw.to_string()));
        }
        Ok(EndpointId::new(&HttpMethod::parse(method), path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One projected operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationEntry<'a> {
    pub id: EndpointId,
    pub path: &'a str,
    pub method: HttpMethod,
    pub operation: &'a Operation,
    pub group: String,
}

impl OperationEntry<'_> {
    pub fn summary(&self) -> Option<&str> {
        self.operation.display_summary()
    }
}

/// Group key of an operation: its first tag, or [`DEFAULT_GROUP`].
pub fn group_key(operation: &Operation) -> &str {
    operation
        .tags
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_GROUP)
}

/// Flatten every summarised operation, preserving path order and method
/// order within each path item. Operations without a non-empty summary and
/// malformed method entries are skipped.
pub fn flatten_operations(doc: &OpenApiDocument) -> Vec<OperationEntry<'_>> {
    let mut entries = Vec::new();
    for (path, item) in &doc.paths {
        for (method_key, operation) in item.operations() {
            if operation.display_summary().is_none() {
                log::debug!("skipping {method_key} {path}: no summary");
                continue;
            }
            let method = HttpMethod::parse(method_key);
            entries.push(OperationEntry {
                id: EndpointId::new(&method, path),
                path,
                method,
                operation,
                group: group_key(operation).to_string(),
            });
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_case_insensitive() {
        assert_eq!(HttpMethod::parse("get"), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("DELETE"), HttpMethod::Delete);
        assert_eq!(HttpMethod::parse("query"), HttpMethod::Other("QUERY".into()));
        assert_eq!(HttpMethod::parse("query").as_str(), "QUERY");
    }

    #[test]
    fn test_endpoint_id_format() {
        let id = EndpointId::new(&HttpMethod::Post, "/products");
        assert_eq!(id.as_str(), "POST-/products");
    }

    #[test]
    fn test_endpoint_id_parse() {
        let id = EndpointId::parse("get-/products/{id}").unwrap();
        assert_eq!(id.as_str(), "GET-/products/{id}");
        assert!(EndpointId::parse("GET/products").is_err());
        assert!(EndpointId::parse("-/products").is_err());
        assert!(EndpointId::parse("GET-products").is_err());
    }

    #[test]
    fn test_group_key_defaults() {
        let tagged = Operation {
            tags: vec!["Orders".into(), "Admin".into()],
            ..Default::default()
        };
        assert_eq!(group_key(&tagged), "Orders");
        assert_eq!(group_key(&Operation::default()), DEFAULT_GROUP);
    }
}
