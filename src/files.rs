//! Reading combined shader files from disk.

use std::fs;
use std::path::Path;

use crate::source::{split, ParseError, ShaderSource};

/// An error from loading a combined shader file.
///
/// Keeps filesystem failures distinct from failures
/// in the file's own contents.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("could not read shader file")]
    Io(#[from] std::io::Error),
    #[error("could not parse shader file")]
    Parse(#[from] ParseError),
}

/// Reads the combined shader file at `path` and splits it into stages.
pub fn load_source(path: impl AsRef<Path>) -> Result<ShaderSource, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    log::debug!("loaded shader source from {}", path.display());
    Ok(split(&text)?)
}
