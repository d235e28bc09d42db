//! Output document abstraction.
//!
//! The generator hands the finished document to a [`DocumentSink`]; the sink
//! only rewrites the target when the content actually changed, and the write
//! itself is all-or-nothing.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

pub trait DocumentSink {
    /// Current text of the target document, `None` when it does not exist.
    fn current_text(&self) -> Result<Option<String>>;

    /// Replace the whole target document with `text`, atomically.
    fn replace(&self, text: &str) -> Result<()>;

    /// Write `text` only when it differs from the current content.
    ///
    /// Returns `true` when a write happened.
    fn replace_if_changed(&self, text: &str) -> Result<bool> {
        if self.current_text()?.as_deref() == Some(text) {
            return Ok(false);
        }
        self.replace(text)?;
        Ok(true)
    }
}

/// File-backed sink writing through a sibling temp file plus rename, so a
/// failed write never leaves a half-written document.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for FileSink {
    fn current_text(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(Some(text))
    }

    fn replace(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let tmp_path = self.path.with_extension("dart.tmp");
        fs::write(&tmp_path, text)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}
