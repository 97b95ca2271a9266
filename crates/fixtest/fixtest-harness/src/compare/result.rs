//! Result model produced by the analysis engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fixture::{AttributeMap, LineNumber};

/// Engine output for one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResult {
    pub comments_by_line: BTreeMap<LineNumber, Vec<String>>,
    pub line_attributes: BTreeMap<LineNumber, AttributeMap>,
    /// Content after the fix pass. Equals the input content when nothing was fixed.
    pub fixed_content: String,
}

impl FileResult {
    /// A result with no comments or attributes whose fixed content is `content`.
    pub fn unchanged(content: impl Into<String>) -> Self {
        Self {
            fixed_content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, line: LineNumber, comment: impl Into<String>) -> Self {
        self.comments_by_line
            .entry(line)
            .or_default()
            .push(comment.into());
        self
    }

    pub fn with_attributes(mut self, line: LineNumber, attributes: AttributeMap) -> Self {
        self.line_attributes.insert(line, attributes);
        self
    }

    /// Total number of comments across all lines.
    pub fn comment_count(&self) -> usize {
        self.comments_by_line.values().map(Vec::len).sum()
    }
}

/// Engine output for a whole staged tree, keyed by path relative to the root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectResult {
    pub files: BTreeMap<String, FileResult>,
}

impl ProjectResult {
    pub fn with_file(mut self, path: impl Into<String>, result: FileResult) -> Self {
        self.files.insert(path.into(), result);
        self
    }

    pub fn file(&self, path: &str) -> Option<&FileResult> {
        self.files.get(path)
    }

    /// Remove and return one file's result.
    pub fn take_file(&mut self, path: &str) -> Option<FileResult> {
        self.files.remove(path)
    }
}
