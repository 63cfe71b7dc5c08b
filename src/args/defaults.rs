pub const DEFAULT_URL: &str = "https://www.example.com";
pub const DEFAULT_TEST_TYPE: &str = "ramp_up";
pub const DEFAULT_BUCKET: &str = "my-bucket";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
/// Cloud Storage XML API host (S3-compatible, HMAC-signed requests).
pub const DEFAULT_STORAGE_ENDPOINT: &str = "https://storage.googleapis.com";
