// Public modules
pub mod types;
mod validators;

// Re-export everything from the submodules
pub use types::*;
pub use validators::*;

use clap::Parser;

/// Parse command line arguments.
///
/// Credential resolution happens later, in [`Args::resolve_credentials`],
/// because the environment fallback is only consulted once flags are known.
#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
