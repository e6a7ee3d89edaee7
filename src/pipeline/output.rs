//! Output routing: stdout or file.

use crate::error::{CharacterError, Result};
use std::io::Write;
use std::path::PathBuf;

/// Where report output goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Build a target from an optional file path.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Write rendered report content to the target.
pub fn write_output(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            std::io::stdout()
                .write_all(content.as_bytes())
                .map_err(CharacterError::from)?;
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|err| CharacterError::io(path, err))?;
            tracing::info!(path = %path.display(), "report written");
        }
    }
    Ok(())
}
