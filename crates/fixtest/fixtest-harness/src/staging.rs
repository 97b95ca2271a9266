//! Staging directories: a fixture's files materialized on disk.

use std::fs;
use std::path::{Component, Path, PathBuf};

use fixtest_core::errors::{HarnessError, HarnessResult};
use tempfile::TempDir;

use crate::config_text::render_config;
use crate::fixture::Fixture;

/// A uniquely named temporary directory owned by one fixture run.
///
/// Dropping it removes the directory; [`StagingDir::release`] can keep it.
#[derive(Debug)]
pub struct StagingDir {
    dir: TempDir,
}

impl StagingDir {
    /// Create a fresh directory under the system temp dir.
    pub fn create(prefix: &str) -> HarnessResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(|source| HarnessError::Stage {
                path: std::env::temp_dir(),
                source,
            })?;
        tracing::debug!(root = %dir.path().display(), "created staging directory");
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write every fixture file, then the analyzer config file.
    ///
    /// A FILE section naming the primary path is shadowed by the primary file.
    pub fn materialize(&self, fixture: &Fixture, config_filename: &str) -> HarnessResult<()> {
        for (relative, content) in fixture.staged_files() {
            self.write_file(relative, content)?;
        }
        self.write_file(config_filename, &render_config(fixture.config()))?;
        Ok(())
    }

    /// Write one file below the root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> HarnessResult<PathBuf> {
        let path = self.resolve(relative)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| HarnessError::Stage {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, content).map_err(|source| HarnessError::Stage {
            path: path.clone(),
            source,
        })?;
        tracing::trace!(path = %path.display(), bytes = content.len(), "staged file");
        Ok(path)
    }

    /// Remove the directory, or keep it and return its path.
    pub fn release(self, keep: bool) -> HarnessResult<Option<PathBuf>> {
        if keep {
            let path = self.dir.keep();
            tracing::warn!(path = %path.display(), "keeping staging directory");
            return Ok(Some(path));
        }
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|source| HarnessError::Stage { path, source })?;
        Ok(None)
    }

    /// Join a fixture-relative path onto the root, rejecting escapes.
    fn resolve(&self, relative: &str) -> HarnessResult<PathBuf> {
        let candidate = Path::new(relative);
        let escapes = relative.is_empty()
            || candidate
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(HarnessError::UnsafePath {
                path: relative.to_string(),
            });
        }
        Ok(self.dir.path().join(candidate))
    }
}
