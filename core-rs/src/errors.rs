//! Error types for G2P Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum G2pError {
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("Schema validation failed against {schema}: {payload}")]
    SchemaValidation { schema: String, payload: String },

    #[error("Malformed URI: {0}")]
    MalformedUri(String),

    #[error("Incomplete record {id}: missing {predicate}")]
    IncompleteRecord { id: String, predicate: String },

    #[error("Triple store error: {0}")]
    Store(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for G2pError {
    fn from(err: reqwest::Error) -> Self {
        G2pError::Http(err.to_string())
    }
}

impl From<url::ParseError> for G2pError {
    fn from(err: url::ParseError) -> Self {
        G2pError::MalformedUri(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, G2pError>;
