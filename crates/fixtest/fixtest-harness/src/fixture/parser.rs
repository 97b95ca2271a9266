//! Fixture text → [`Fixture`].
//!
//! Parsing runs in three steps: literal substitution over the raw text,
//! splitting on section delimiters, then per-section dispatch on
//! [`SectionKind`].

use fixtest_core::errors::ParseError;
use regex::Regex;
use serde_json::Value;

use super::model::{AttributeMap, Fixture, FixtureDraft, LineNumber};
use super::section::SectionKind;
use crate::config_text::{json_kind, ConfigService, YamlConfigService};

/// A blank line, `-- NAME --`, newline.
const DELIMITER_PATTERN: &str = r"\n\n-- (.+?) --\n";

/// `Line <digits>: <payload>` in COMMENTS and LINE ATTRIBUTES.
const LINE_ENTRY_PATTERN: &str = r"^Line ([0-9]+): (.+)$";

/// One section of a fixture: its header, body, and where the body starts.
#[derive(Debug)]
struct RawSection<'a> {
    header: &'a str,
    header_line: usize,
    body: &'a str,
    body_line: usize,
}

/// Parses fixture text. Holds compiled patterns and the config service.
pub struct FixtureParser {
    delimiter: Regex,
    line_entry: Regex,
    config_service: Box<dyn ConfigService + Send + Sync>,
}

impl FixtureParser {
    /// Create a parser that reads CONFIG sections as YAML.
    pub fn new() -> Self {
        Self::with_config_service(YamlConfigService)
    }

    /// Create a parser with a custom structured-config service.
    pub fn with_config_service(service: impl ConfigService + Send + Sync + 'static) -> Self {
        Self {
            delimiter: Regex::new(DELIMITER_PATTERN).expect("delimiter pattern is valid"),
            line_entry: Regex::new(LINE_ENTRY_PATTERN).expect("line entry pattern is valid"),
            config_service: Box::new(service),
        }
    }

    /// Parse raw fixture text after applying `substitutions` in order.
    pub fn parse(
        &self,
        raw_text: &str,
        substitutions: &[(String, String)],
    ) -> Result<Fixture, ParseError> {
        let text = substitute(raw_text, substitutions);
        let (primary_content, sections) = self.split_sections(&text);

        let mut draft = FixtureDraft {
            primary_content: primary_content.to_string(),
            ..Default::default()
        };

        for section in &sections {
            let kind = SectionKind::from_header(section.header).ok_or_else(|| {
                ParseError::UnknownSection {
                    header: section.header.to_string(),
                    fixture_line: section.header_line,
                }
            })?;
            self.apply_section(&mut draft, &kind, section)?;
        }

        draft.finish().ok_or(ParseError::MissingFilename)
    }

    /// Split into primary content and sections. Bodies run from the end of
    /// one delimiter to the start of the next; empty bodies are kept.
    fn split_sections<'a>(&self, text: &'a str) -> (&'a str, Vec<RawSection<'a>>) {
        let delimiters: Vec<_> = self.delimiter.captures_iter(text).collect();
        let Some(first) = delimiters.first() else {
            return (text, Vec::new());
        };

        let primary_end = first.get(0).map_or(text.len(), |m| m.start());
        let mut sections = Vec::with_capacity(delimiters.len());

        for (i, caps) in delimiters.iter().enumerate() {
            let (Some(whole), Some(header)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let body_end = delimiters
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |m| m.start());

            sections.push(RawSection {
                header: header.as_str(),
                header_line: line_of(text, header.start()),
                body: &text[whole.end()..body_end],
                body_line: line_of(text, whole.end()),
            });
        }

        (&text[..primary_end], sections)
    }

    fn apply_section(
        &self,
        draft: &mut FixtureDraft,
        kind: &SectionKind,
        section: &RawSection<'_>,
    ) -> Result<(), ParseError> {
        match kind {
            SectionKind::Filename => {
                draft.primary_filename = Some(section.body.trim().to_string());
            }
            SectionKind::Comments => {
                for (_, line, text) in self.line_entries(kind, section)? {
                    draft
                        .expected_comments
                        .entry(line)
                        .or_default()
                        .push(text.to_string());
                }
            }
            SectionKind::ChangedPaths => {
                draft.changed_paths.extend(
                    section
                        .body
                        .lines()
                        .map(str::trim)
                        .filter(|path| !path.is_empty())
                        .map(str::to_string),
                );
            }
            SectionKind::LineAttributes => {
                for (fixture_line, line, payload) in self.line_entries(kind, section)? {
                    let attributes = decode_attributes(line, fixture_line, payload)?;
                    if draft.expected_line_attributes.contains_key(&line) {
                        return Err(ParseError::DuplicateAttributes { line, fixture_line });
                    }
                    draft.expected_line_attributes.insert(line, attributes);
                }
            }
            SectionKind::FixedContent => {
                draft.expected_fixed_content = Some(section.body.to_string());
            }
            SectionKind::Config => {
                draft.config = self.config_service.parse(section.body).map_err(|source| {
                    ParseError::InvalidConfig {
                        fixture_line: section.body_line,
                        source,
                    }
                })?;
            }
            SectionKind::File(path) => {
                draft
                    .additional_files
                    .insert(path.clone(), section.body.to_string());
            }
        }
        Ok(())
    }

    /// Parse every non-blank line of a section as `Line N: payload`.
    /// Yields `(fixture_line, line_number, payload)`.
    fn line_entries<'a>(
        &self,
        kind: &SectionKind,
        section: &RawSection<'a>,
    ) -> Result<Vec<(usize, LineNumber, &'a str)>, ParseError> {
        let mut entries = Vec::new();

        for (offset, raw_line) in section.body.lines().enumerate() {
            let trimmed = raw_line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let fixture_line = section.body_line + offset;

            let caps = self
                .line_entry
                .captures(trimmed)
                .ok_or_else(|| ParseError::MalformedLine {
                    section: kind.name().to_string(),
                    fixture_line,
                    raw_line: raw_line.to_string(),
                })?;
            let (Some(digits), Some(payload)) = (caps.get(1), caps.get(2)) else {
                return Err(ParseError::MalformedLine {
                    section: kind.name().to_string(),
                    fixture_line,
                    raw_line: raw_line.to_string(),
                });
            };

            let line = digits
                .as_str()
                .parse::<LineNumber>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ParseError::InvalidLineNumber {
                    section: kind.name().to_string(),
                    fixture_line,
                    raw_line: raw_line.to_string(),
                })?;

            entries.push((fixture_line, line, payload.as_str()));
        }

        Ok(entries)
    }
}

impl Default for FixtureParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FixtureParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureParser")
            .field("delimiter", &self.delimiter.as_str())
            .finish_non_exhaustive()
    }
}

/// Apply literal token replacements in order.
fn substitute(raw_text: &str, substitutions: &[(String, String)]) -> String {
    substitutions
        .iter()
        .filter(|(token, _)| !token.is_empty())
        .fold(raw_text.to_string(), |text, (token, value)| {
            text.replace(token.as_str(), value)
        })
}

/// Decode a LINE ATTRIBUTES payload. Arrays become index-keyed objects.
fn decode_attributes(
    line: LineNumber,
    fixture_line: usize,
    payload: &str,
) -> Result<AttributeMap, ParseError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| ParseError::InvalidAttributesJson {
            line,
            fixture_line,
            message: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect()),
        other => Err(ParseError::AttributesNotStructured {
            line,
            fixture_line,
            found: json_kind(&other).to_string(),
        }),
    }
}

/// 1-based line number of a byte offset.
fn line_of(text: &str, offset: usize) -> usize {
    text.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}
