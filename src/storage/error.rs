use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Upload error: {0}")]
    Upload(String),
}

// Public seams use Box<dyn Error> so the trait mocks and the real client
// share one signature
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
