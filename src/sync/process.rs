use std::path::PathBuf;

use crate::interfaces::ObjectStoreClient;
use crate::sync::walker::ImageFile;
use crate::utils::log_utils::Logger;

/// Fixed source and destination settings for one run.
///
/// The defaults reproduce the production destination; tests construct their
/// own config against a temporary directory and a mock store.
pub struct UploadConfig {
    /// Cloudflare account id; the R2 endpoint is derived from it
    pub account_id: String,
    pub bucket: String,
    /// Base URL where uploaded objects are served from
    pub public_url: String,
    /// Local directory mirrored into the bucket
    pub images_dir: PathBuf,
    /// Cache headers applied to every uploaded object
    pub cache_control: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            account_id: "819cc5c82aeb77dcbe9002c23c026748".to_string(),
            bucket: "beeswarmsimulator".to_string(),
            public_url: "https://imagers.beeswarmsimulator.org".to_string(),
            images_dir: PathBuf::from("public/images"),
            cache_control: "public, max-age=31536000, immutable".to_string(),
        }
    }
}

/// Counters accumulated over one run, printed once at the end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub uploaded: usize,
    pub errors: usize,
}

/// Upload every file in `files` sequentially and print the run summary.
///
/// In dry-run mode nothing touches the client; the "would upload" lines
/// count into `uploaded`, same as live uploads. A failed upload is logged
/// with its key and counted, and the walk continues with the next file.
pub fn process_files<C, I>(
    config: &UploadConfig,
    files: I,
    client: &C,
    dry_run: bool,
    logger: &Logger,
) -> UploadSummary
where
    C: ObjectStoreClient,
    I: IntoIterator<Item = ImageFile>,
{
    let mut summary = UploadSummary::default();

    for file in files {
        if dry_run {
            logger.normal(&format!(
                "[DRY RUN] Would upload: {} ({})",
                file.key, file.content_type
            ));
            summary.uploaded += 1;
            continue;
        }

        match client.upload_file(&file.path, &file.key, file.content_type) {
            Ok(_) => {
                logger.normal(&format!("[OK] {}", file.key));
                summary.uploaded += 1;
            }
            Err(e) => {
                logger.normal(&format!("[ERROR] {}: {e}", file.key));
                summary.errors += 1;
            }
        }
    }

    logger.normal("");
    if dry_run {
        logger.normal("DRY RUN Summary:");
    } else {
        logger.normal("Summary:");
    }
    logger.normal(&format!("  Uploaded: {}", summary.uploaded));
    logger.normal(&format!("  Errors: {}", summary.errors));
    logger.normal("");
    logger.normal(&format!(
        "Images will be available at: {}/",
        config.public_url
    ));

    summary
}
