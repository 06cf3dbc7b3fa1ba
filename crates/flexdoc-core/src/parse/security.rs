use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A security scheme type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecuritySchemeType {
    #[serde(rename = "apiKey")]
    ApiKey,
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "oauth2")]
    OAuth2,
    #[serde(rename = "openIdConnect")]
    OpenIdConnect,
    #[serde(rename = "mutualTLS")]
    MutualTls,
}

/// Location of an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Query,
    Header,
    Cookie,
}

/// A security scheme definition. OAuth flows are kept as raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: SecuritySchemeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ApiKeyLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<serde_json::Value>,

    #[serde(rename = "openIdConnectUrl", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_url: Option<String>,
}

impl SecurityScheme {
    /// Short human label, e.g. `http bearer (JWT)` or `apiKey in header`.
    pub fn label(&self) -> String {
        match self.scheme_type {
            SecuritySchemeType::Http => {
                let scheme = self.scheme.as_deref().unwrap_or("http");
                match &self.bearer_format {
                    Some(format) => format!("http {scheme} ({format})"),
                    None => format!("http {scheme}"),
                }
            }
            SecuritySchemeType::ApiKey => match self.location {
                Some(ApiKeyLocation::Query) => "apiKey in query".to_string(),
                Some(ApiKeyLocation::Header) => "apiKey in header".to_string(),
                Some(ApiKeyLocation::Cookie) => "apiKey in cookie".to_string(),
                None => "apiKey".to_string(),
            },
            SecuritySchemeType::OAuth2 => "oauth2".to_string(),
            SecuritySchemeType::OpenIdConnect => "openIdConnect".to_string(),
            SecuritySchemeType::MutualTls => "mutualTLS".to_string(),
        }
    }
}

/// A security requirement: map of scheme name to required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;
