use crate::storage::error::Result;
use crate::storage::{S3StorageClient, S3UploadResult};
use mockall::automock;
use std::path::Path;

/// Interface for object-store upload calls to facilitate testing
#[automock]
pub trait ObjectStoreClient {
    fn upload_file(
        &self,
        local_path: &Path,
        object_key: &str,
        content_type: &str,
    ) -> Result<S3UploadResult>;
}

impl ObjectStoreClient for S3StorageClient {
    fn upload_file(
        &self,
        local_path: &Path,
        object_key: &str,
        content_type: &str,
    ) -> Result<S3UploadResult> {
        S3StorageClient::upload_file(self, local_path, object_key, content_type)
    }
}
