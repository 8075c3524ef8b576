pub mod analyze;
pub mod counties;
pub mod init;
pub mod stats;

use std::fs;
use std::io::Write;
use std::path::Path;

/// Resolve the output destination: a file when requested, stdout otherwise.
pub(crate) fn output_target(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(fs::File::create(path)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}
