//! Fixture discovery.
//!
//! Walks a suite directory with the `ignore` crate and collects fixture files
//! by extension. Hidden directories are walked; `.gitignore` rules apply.

use std::path::{Path, PathBuf};

use fixtest_core::errors::{HarnessError, HarnessResult};

/// Find every `*.{extension}` file below `root`, sorted by path.
pub fn discover_fixtures(root: &Path, extension: &str) -> HarnessResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(HarnessError::Discovery {
            root: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let walker = ignore::WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(false)
        .require_git(false)
        .build();

    let mut fixtures = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            fixtures.push(path);
        }
    }

    fixtures.sort();
    tracing::debug!(root = %root.display(), count = fixtures.len(), "discovered fixtures");
    Ok(fixtures)
}
