//! Frame store - ASCII-art sprites loaded from text files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A frame file could not be read.
#[derive(Debug, Error)]
#[error("failed to load frame {path}: {source}")]
pub struct FrameLoadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Immutable multi-line text sprite.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    rows: Vec<String>,
    width: usize,
}

impl Frame {
    /// Split `text` on line boundaries (`\n` or `\r\n`).
    pub fn parse(text: &str) -> Self {
        let rows: Vec<String> = text.lines().map(str::to_owned).collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        Self { rows, width }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FrameLoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FrameLoadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Bounding box as `(height, width)`.
    pub fn size(&self) -> (usize, usize) {
        (self.rows.len(), self.width)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }
}

/// Load `names` from `dir`, in order, stopping at the first failure.
pub fn load_frames<S: AsRef<str>>(dir: &Path, names: &[S]) -> Result<Vec<Frame>, FrameLoadError> {
    names
        .iter()
        .map(|name| Frame::load(dir.join(name.as_ref())))
        .collect()
}
