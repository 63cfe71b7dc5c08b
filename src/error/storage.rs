use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("The environment variable {var} must be set.")]
    MissingCredentialsEnv { var: &'static str },
    #[error("Failed to read credentials '{path}': {source}")]
    ReadCredentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse credentials '{path}': {source}")]
    ParseCredentials {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "'{path}' is a service account key; LOADPROBE_HMAC_KEY_FILE must name an HMAC key file ({{\"accessId\": ..., \"secret\": ...}})."
    )]
    ServiceAccountKey { path: PathBuf },
    #[error("Invalid storage endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Storage endpoint '{endpoint}' cannot address objects.")]
    EndpointCannotBeBase { endpoint: String },
    #[error("Results path '{path}' has no usable file name.")]
    InvalidObjectName { path: PathBuf },
    #[error("Failed to open file '{path}': {source}")]
    ReadUpload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to build sigv4 params: {source}")]
    SigV4Params {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to build sigv4 request: {source}")]
    SigV4Request {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to sign request: {source}")]
    SigV4Sign {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to build sign request: {source}")]
    SigV4BuildSign {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to write file to bucket: {source}")]
    UploadFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Bucket rejected upload with status {status}: {body}")]
    UploadRejected { status: u16, body: String },
}
