pub mod args;
pub mod interfaces;
pub mod storage;
pub mod sync;
pub mod utils;

pub use args::Args;
pub use storage::error::Result;

use storage::{S3Config, S3StorageClient};
use sync::UploadConfig;
use utils::log_utils::Logger;

/// Run one upload pass against the fixed destination bucket.
///
/// Resolves credentials, builds the storage client, walks the image root and
/// uploads (or, with `--dry-run`, reports) every recognized image file. The
/// summary is printed by the process loop.
///
/// # Errors
///
/// Returns an error when credentials cannot be resolved from flags or the
/// environment, or when the storage client cannot be constructed. Per-file
/// upload failures are counted and reported in the summary instead of being
/// returned here; a run that completes the walk is a success.
pub fn run_app(args: &Args) -> Result<()> {
    let credentials = args.resolve_credentials()?;
    let logger = Logger::new(args.verbose);
    let config = UploadConfig::default();

    logger.info(&format!("Image root: {}", config.images_dir.display()));
    logger.debug(&format!(
        "Bucket '{}' on account {}",
        config.bucket, config.account_id
    ));

    let client = S3StorageClient::new(S3Config {
        key_id: credentials.access_key_id,
        application_key: credentials.secret_access_key,
        bucket: config.bucket.clone(),
        account_id: config.account_id.clone(),
        cache_control: config.cache_control.clone(),
    })?;

    let files = sync::image_files(&config.images_dir);
    sync::process_files(&config, files, &client, args.dry_run, &logger);

    Ok(())
}
