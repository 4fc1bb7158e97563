use crate::storage::error::{Result, StorageError};
use crate::storage::models::{S3Config, S3StorageClient};
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};

impl S3StorageClient {
    /// Create a new R2 client from the provided config.
    ///
    /// Construction is offline; nothing is sent until the first upload call.
    pub fn new(config: S3Config) -> Result<Self> {
        // R2 endpoints are scoped to the Cloudflare account
        let endpoint = format!("https://{}.r2.cloudflarestorage.com", config.account_id);

        // Create runtime for async operations - reused for all upload calls
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| StorageError::Runtime(format!("Failed to create runtime: {e}")))?;

        // Static credentials from the resolved key pair
        let credentials = Credentials::new(
            config.key_id,
            config.application_key,
            None, // No session token
            None, // No expiry
            "R2StaticCredentials",
        );

        // One attempt per object; failed uploads are tallied by the caller
        let s3_config = aws_sdk_s3::Config::builder()
            .region(Region::new("auto"))
            .endpoint_url(endpoint)
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled())
            .behavior_version(BehaviorVersion::latest())
            .build();

        Ok(Self {
            bucket_name: config.bucket,
            client: Client::from_conf(s3_config),
            runtime,
            cache_control: config.cache_control,
        })
    }

    /// Get the bucket this client uploads into
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_config() -> S3Config {
        S3Config {
            key_id: "test-key-id".to_string(),
            application_key: "test-application-key".to_string(),
            bucket: "test-bucket".to_string(),
            account_id: "0123456789abcdef0123456789abcdef".to_string(),
            cache_control: "public, max-age=31536000, immutable".to_string(),
        }
    }

    #[test]
    fn test_construction_is_offline() {
        // No endpoint is reachable for this account id; construction must
        // still succeed because nothing is sent until the first upload
        let client = S3StorageClient::new(dummy_config()).unwrap();
        assert_eq!(client.bucket_name(), "test-bucket");
    }
}
