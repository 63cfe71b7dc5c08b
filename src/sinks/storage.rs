use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use aws_credential_types::Credentials;
use aws_sigv4::http_request::{
    PayloadChecksumKind, SignableBody, SignableRequest, SigningSettings, sign,
};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult, StorageError};

/// Environment variable naming the HMAC key file used for uploads.
pub const CREDENTIALS_ENV: &str = "LOADPROBE_HMAC_KEY_FILE";
/// Cloud Storage accepts SigV4 with this region/service pair for HMAC keys.
const SIGNING_REGION: &str = "auto";
const SIGNING_SERVICE: &str = "s3";
const CSV_CONTENT_TYPE: &str = "text/csv";
const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// HMAC key pair for Cloud Storage interoperability access.
#[derive(Clone, Deserialize)]
pub struct HmacCredentials {
    #[serde(rename = "accessId", alias = "access_id", alias = "access_key_id")]
    pub access_id: String,
    #[serde(alias = "secret_access_key")]
    pub secret: String,
}

impl fmt::Debug for HmacCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacCredentials")
            .field("access_id", &self.access_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl HmacCredentials {
    /// Loads credentials from the file named by `LOADPROBE_HMAC_KEY_FILE`.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset or empty, or the file
    /// cannot be read or parsed.
    pub async fn from_env() -> AppResult<Self> {
        Self::from_env_value(std::env::var_os(CREDENTIALS_ENV)).await
    }

    pub(crate) async fn from_env_value(value: Option<OsString>) -> AppResult<Self> {
        let path = value
            .filter(|path| !path.is_empty())
            .ok_or(StorageError::MissingCredentialsEnv {
                var: CREDENTIALS_ENV,
            })?;
        Self::from_file(Path::new(&path)).await
    }

    /// Reads a JSON key file (`{"accessId": "...", "secret": "..."}`).
    ///
    /// Service account keys are rejected with a message naming the expected
    /// format, since uploads are signed with an HMAC key.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed, or holds a
    /// service account key.
    pub async fn from_file(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|err| {
            AppError::storage(StorageError::ReadCredentials {
                path: path.to_path_buf(),
                source: err,
            })
        })?;
        let parse_error = |err| {
            AppError::storage(StorageError::ParseCredentials {
                path: path.to_path_buf(),
                source: err,
            })
        };
        let value: serde_json::Value = serde_json::from_str(&content).map_err(parse_error)?;
        if value.get("type").and_then(serde_json::Value::as_str) == Some(SERVICE_ACCOUNT_TYPE) {
            return Err(AppError::storage(StorageError::ServiceAccountKey {
                path: path.to_path_buf(),
            }));
        }
        serde_json::from_value(value).map_err(parse_error)
    }
}

/// Where results are uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageTarget {
    pub endpoint: String,
    pub bucket: String,
}

/// Builds `<endpoint>/<bucket>/<object>` with each segment percent-encoded.
///
/// # Errors
///
/// Returns an error when the endpoint is not an absolute base URL.
pub fn object_url(target: &StorageTarget, object: &str) -> AppResult<Url> {
    let mut url = Url::parse(&target.endpoint).map_err(|err| {
        AppError::storage(StorageError::InvalidEndpoint {
            endpoint: target.endpoint.clone(),
            source: err,
        })
    })?;
    url.path_segments_mut()
        .map_err(|()| {
            AppError::storage(StorageError::EndpointCannotBeBase {
                endpoint: target.endpoint.clone(),
            })
        })?
        .pop_if_empty()
        .push(&target.bucket)
        .push(object);
    Ok(url)
}

/// Uploads the file at `path` to the target bucket under its base file name.
///
/// # Errors
///
/// Returns an error when the file cannot be read, the request cannot be
/// signed or sent, or the bucket rejects the upload.
pub async fn upload_results(
    client: &Client,
    target: &StorageTarget,
    credentials: &HmacCredentials,
    path: &Path,
) -> AppResult<()> {
    let object = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            AppError::storage(StorageError::InvalidObjectName {
                path: path.to_path_buf(),
            })
        })?;
    let body = tokio::fs::read(path).await.map_err(|err| {
        AppError::storage(StorageError::ReadUpload {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let url = object_url(target, object)?;
    let headers = [("content-type", CSV_CONTENT_TYPE)];
    let signed = sign_put(credentials, &url, &headers, &body)?;

    info!("Uploading {} to bucket {}", object, target.bucket);
    let response = client
        .put(url)
        .headers(signed)
        .body(body)
        .send()
        .await
        .map_err(|err| AppError::storage(StorageError::UploadFailed { source: err }))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::storage(StorageError::UploadRejected {
            status: status.as_u16(),
            body,
        }));
    }
    debug!("Upload of {} finished with {}", object, status);
    Ok(())
}

/// Produces the full header set of a SigV4-signed `PUT`.
fn sign_put(
    credentials: &HmacCredentials,
    url: &Url,
    headers: &[(&str, &str)],
    body: &[u8],
) -> AppResult<::http::HeaderMap> {
    let identity: Identity = Credentials::new(
        &credentials.access_id,
        &credentials.secret,
        None,
        None,
        "loadprobe",
    )
    .into();
    let mut signing_settings = SigningSettings::default();
    signing_settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
    let signing_params = v4::SigningParams::builder()
        .identity(&identity)
        .region(SIGNING_REGION)
        .name(SIGNING_SERVICE)
        .time(std::time::SystemTime::now())
        .settings(signing_settings)
        .build()
        .map_err(|err| {
            AppError::storage(StorageError::SigV4Params {
                source: Box::new(err),
            })
        })?
        .into();

    let signable = SignableRequest::new(
        "PUT",
        url.as_str(),
        headers.iter().copied(),
        SignableBody::Bytes(body),
    )
    .map_err(|err| {
        AppError::storage(StorageError::SigV4Request {
            source: Box::new(err),
        })
    })?;

    let (instructions, _signature) = sign(signable, &signing_params)
        .map_err(|err| {
            AppError::storage(StorageError::SigV4Sign {
                source: Box::new(err),
            })
        })?
        .into_parts();

    let mut http_req = ::http::Request::builder().method("PUT").uri(url.as_str());
    for (key, value) in headers {
        http_req = http_req.header(*key, *value);
    }
    let mut http_req = http_req.body(()).map_err(|err| {
        AppError::storage(StorageError::SigV4BuildSign {
            source: Box::new(err),
        })
    })?;
    instructions.apply_to_request_http1x(&mut http_req);

    Ok(http_req.headers().clone())
}
