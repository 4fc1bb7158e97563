use aws_sdk_s3::Client;

/// Configuration for the R2 storage client
pub struct S3Config {
    pub key_id: String,
    pub application_key: String,
    pub bucket: String,
    /// Cloudflare account id; the endpoint is account-scoped
    pub account_id: String,
    /// Cache headers applied to every uploaded object
    pub cache_control: String,
}

/// Result of a single object upload
#[derive(Debug, Clone)]
pub struct S3UploadResult {
    /// ETag reported by the store, quotes stripped
    pub hash: String,
    /// Object key the file landed under
    pub key: String,
}

/// Blocking client for R2 over the S3 API
pub struct S3StorageClient {
    pub(crate) bucket_name: String,
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) cache_control: String,
}
