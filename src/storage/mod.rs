pub mod client;
pub mod error;
pub mod models;
pub mod upload;

// Re-export types for convenient access from other modules
pub use models::{S3Config, S3StorageClient, S3UploadResult};
