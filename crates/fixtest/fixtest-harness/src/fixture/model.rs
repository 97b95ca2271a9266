//! The parsed `Fixture` record.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// 1-based source line number.
pub type LineNumber = u32;

/// Attributes attached to one source line.
pub type AttributeMap = Map<String, Value>;

/// Analyzer configuration parsed from a CONFIG section.
pub type ConfigMap = Map<String, Value>;

/// One parsed test case. Immutable once built by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub(crate) primary_filename: String,
    pub(crate) primary_content: String,
    pub(crate) additional_files: BTreeMap<String, String>,
    pub(crate) config: ConfigMap,
    pub(crate) changed_paths: Vec<String>,
    pub(crate) expected_comments: BTreeMap<LineNumber, Vec<String>>,
    pub(crate) expected_line_attributes: BTreeMap<LineNumber, AttributeMap>,
    pub(crate) expected_fixed_content: Option<String>,
}

impl Fixture {
    /// Path of the file under analysis, relative to the staging root.
    pub fn primary_filename(&self) -> &str {
        &self.primary_filename
    }

    /// Verbatim text preceding the first section.
    pub fn primary_content(&self) -> &str {
        &self.primary_content
    }

    pub fn additional_files(&self) -> &BTreeMap<String, String> {
        &self.additional_files
    }

    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    pub fn changed_paths(&self) -> &[String] {
        &self.changed_paths
    }

    pub fn expected_comments(&self) -> &BTreeMap<LineNumber, Vec<String>> {
        &self.expected_comments
    }

    pub fn expected_line_attributes(&self) -> &BTreeMap<LineNumber, AttributeMap> {
        &self.expected_line_attributes
    }

    /// The FIXED CONTENT section, if the fixture declared one.
    pub fn expected_fixed_content(&self) -> Option<&str> {
        self.expected_fixed_content.as_deref()
    }

    /// Content the fixed file must have: the FIXED CONTENT section, or the
    /// primary content unchanged when the section is omitted.
    pub fn wanted_fixed_content(&self) -> &str {
        self.expected_fixed_content
            .as_deref()
            .unwrap_or(&self.primary_content)
    }

    /// Total number of expected comments across all lines.
    pub fn expected_comment_count(&self) -> usize {
        self.expected_comments.values().map(Vec::len).sum()
    }

    /// Every file to stage: additional files plus the primary file, which
    /// wins when a FILE section names the same path.
    pub fn staged_files(&self) -> BTreeMap<&str, &str> {
        let mut files: BTreeMap<&str, &str> = self
            .additional_files
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
            .collect();
        files.insert(self.primary_filename.as_str(), self.primary_content.as_str());
        files
    }
}

/// Accumulates sections while parsing; `finish` enforces the filename invariant.
#[derive(Debug, Default)]
pub(crate) struct FixtureDraft {
    pub primary_filename: Option<String>,
    pub primary_content: String,
    pub additional_files: BTreeMap<String, String>,
    pub config: ConfigMap,
    pub changed_paths: Vec<String>,
    pub expected_comments: BTreeMap<LineNumber, Vec<String>>,
    pub expected_line_attributes: BTreeMap<LineNumber, AttributeMap>,
    pub expected_fixed_content: Option<String>,
}

impl FixtureDraft {
    pub fn finish(self) -> Option<Fixture> {
        Some(Fixture {
            primary_filename: self.primary_filename?,
            primary_content: self.primary_content,
            additional_files: self.additional_files,
            config: self.config,
            changed_paths: self.changed_paths,
            expected_comments: self.expected_comments,
            expected_line_attributes: self.expected_line_attributes,
            expected_fixed_content: self.expected_fixed_content,
        })
    }
}
