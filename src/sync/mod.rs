pub mod content_type;
pub mod process;
pub mod walker;

// Re-export types for convenient access from other modules
pub use content_type::content_type_for;
pub use process::{UploadConfig, UploadSummary, process_files};
pub use walker::{ImageFile, image_files, object_key};
