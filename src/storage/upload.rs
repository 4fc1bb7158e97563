use crate::storage::error::{Result, StorageError};
use crate::storage::models::{S3StorageClient, S3UploadResult};
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

impl S3StorageClient {
    /// Upload one file, setting its content type and the fixed cache headers.
    ///
    /// # Errors
    ///
    /// Any failure (unreadable local file, network error, rejected request)
    /// is returned as a single error value; the caller decides whether to
    /// continue with the next file.
    pub fn upload_file(
        &self,
        local_path: &Path,
        object_key: &str,
        content_type: &str,
    ) -> Result<S3UploadResult> {
        // Use the client's runtime instead of creating a new one
        self.runtime.block_on(async {
            // Stream straight from disk - no loading into memory
            let body = ByteStream::from_path(local_path).await.map_err(|e| {
                StorageError::Upload(format!(
                    "Failed to read {}: {e}",
                    local_path.display()
                ))
            })?;

            let response = self
                .client
                .put_object()
                .bucket(&self.bucket_name)
                .key(object_key)
                .content_type(content_type)
                .cache_control(&self.cache_control)
                .body(body)
                .send()
                .await
                .map_err(|e| {
                    StorageError::Upload(format!("Failed to upload to storage: {e}"))
                })?;

            // Get the ETag (hash) from the response
            let etag = response
                .e_tag()
                .ok_or_else(|| StorageError::Upload("No ETag in response".to_string()))?
                .replace('"', "");

            Ok::<S3UploadResult, Box<dyn std::error::Error>>(S3UploadResult {
                hash: etag,
                key: object_key.to_string(),
            })
        })
    }
}
