use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// An action string the navigation layer could not interpret.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("invalid endpoint id `{0}`, expected METHOD-/path")]
    InvalidEndpointId(String),

    #[error("unknown section `{0}`, expected group:NAME, responses, request-body, or code-examples")]
    UnknownSection(String),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}
