use clap::Parser;
use std::env;

use super::validators::resolve_credentials_from;

/// Environment variable consulted when `--access-key` is absent
pub const ACCESS_KEY_ENV: &str = "R2_ACCESS_KEY_ID";
/// Environment variable consulted when `--secret-key` is absent
pub const SECRET_KEY_ENV: &str = "R2_SECRET_ACCESS_KEY";

#[derive(Parser, Debug, Clone, Default, serde::Serialize)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// R2 Access Key ID (falls back to R2_ACCESS_KEY_ID)
    #[arg(long, value_name = "KEY")]
    pub access_key: Option<String>,

    /// R2 Secret Access Key (falls back to R2_SECRET_ACCESS_KEY)
    #[arg(long, value_name = "KEY")]
    pub secret_key: Option<String>,

    /// Report what would be uploaded without performing any upload
    #[arg(long)]
    pub dry_run: bool,

    /// Print extra stuff (use -v -v for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Credential pair resolved from flags or the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl Args {
    /// Resolve the credential pair, flag value winning over environment.
    ///
    /// # Errors
    ///
    /// Returns a usage-style message naming both configuration methods when
    /// either key is missing from both sources.
    pub fn resolve_credentials(&self) -> Result<ResolvedCredentials, String> {
        resolve_credentials_from(
            self.access_key.as_deref(),
            env::var(ACCESS_KEY_ENV).ok(),
            self.secret_key.as_deref(),
            env::var(SECRET_KEY_ENV).ok(),
        )
    }
}
