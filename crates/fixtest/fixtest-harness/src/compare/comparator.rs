//! The expectation comparator.

use std::fmt;

use super::pool::CommentPool;
use super::render::{dump_comments, dump_line_attributes, dump_line_comments};
use super::result::FileResult;
use crate::fixture::{Fixture, LineNumber};

/// Which of the three independent checks a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Comments,
    FixedContent,
    LineAttributes,
}

/// A single unmet expectation.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonFailure {
    /// Total comment counts differ.
    CommentCountMismatch {
        expected: usize,
        actual: usize,
        actual_dump: String,
    },
    /// Comments were expected on a line the engine left untouched.
    MissingLine {
        line: LineNumber,
        actual_dump: String,
    },
    /// No remaining comment on the line contains the expected substring.
    MissingComment {
        line: LineNumber,
        expected: String,
        remaining: Vec<String>,
    },
    /// Comments left over after every expected substring was matched.
    UnexpectedComments {
        line: LineNumber,
        comments: Vec<String>,
    },
    FixedContentMismatch {
        expected: String,
        actual: String,
    },
    /// Canonical attribute texts differ.
    LineAttributesMismatch {
        expected: String,
        actual: String,
    },
}

impl ComparisonFailure {
    pub fn check(&self) -> CheckKind {
        match self {
            Self::CommentCountMismatch { .. }
            | Self::MissingLine { .. }
            | Self::MissingComment { .. }
            | Self::UnexpectedComments { .. } => CheckKind::Comments,
            Self::FixedContentMismatch { .. } => CheckKind::FixedContent,
            Self::LineAttributesMismatch { .. } => CheckKind::LineAttributes,
        }
    }
}

impl fmt::Display for ComparisonFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommentCountMismatch {
                expected,
                actual,
                actual_dump,
            } => write!(
                f,
                "Expected {expected} comment(s), but found {actual}. Found comments:\n{actual_dump}"
            ),
            Self::MissingLine { line, actual_dump } => write!(
                f,
                "Expected comments on line {line}, but found none. Found comments:\n{actual_dump}"
            ),
            Self::MissingComment {
                line,
                expected,
                remaining,
            } => write!(
                f,
                "Expected comment '{expected}' on line {line}, but did not find it. Found comments:\n{}",
                dump_line_comments(*line, remaining)
            ),
            Self::UnexpectedComments { line, comments } => write!(
                f,
                "Found some comments on line {line} which were not expected. Unexpected comments:\n{}",
                dump_line_comments(*line, comments)
            ),
            Self::FixedContentMismatch { expected, actual } => write!(
                f,
                "Fixed content does not match.\n--- expected\n{expected}\n--- actual\n{actual}"
            ),
            Self::LineAttributesMismatch { expected, actual } => write!(
                f,
                "Line attributes do not match.\n--- expected\n{expected}--- actual\n{actual}"
            ),
        }
    }
}

/// Result of comparing one fixture against one engine result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonOutcome {
    failures: Vec<ComparisonFailure>,
}

impl ComparisonOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[ComparisonFailure] {
        &self.failures
    }

    /// Whether the given check produced at least one failure.
    pub fn failed(&self, check: CheckKind) -> bool {
        self.failures.iter().any(|f| f.check() == check)
    }
}

impl fmt::Display for ComparisonOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return f.write_str("all expectations met");
        }
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

/// Compare a fixture's expectations with an engine result.
///
/// All three checks always run; the outcome carries every failure found.
pub fn compare(expected: &Fixture, actual: &FileResult) -> ComparisonOutcome {
    let mut failures = Vec::new();
    compare_comments(expected, actual, &mut failures);
    compare_fixed_content(expected, actual, &mut failures);
    compare_line_attributes(expected, actual, &mut failures);
    ComparisonOutcome { failures }
}

fn compare_comments(expected: &Fixture, actual: &FileResult, failures: &mut Vec<ComparisonFailure>) {
    let expected_total = expected.expected_comment_count();
    let actual_total = actual.comment_count();
    if expected_total != actual_total {
        failures.push(ComparisonFailure::CommentCountMismatch {
            expected: expected_total,
            actual: actual_total,
            actual_dump: dump_comments(&actual.comments_by_line),
        });
    }

    // Per-line diagnostics still run after a count mismatch.
    for (line, wanted) in expected.expected_comments() {
        let Some(found) = actual
            .comments_by_line
            .get(line)
            .filter(|found| !found.is_empty())
        else {
            failures.push(ComparisonFailure::MissingLine {
                line: *line,
                actual_dump: dump_comments(&actual.comments_by_line),
            });
            continue;
        };

        let mut pool = CommentPool::new(found);
        let missed = wanted.iter().find(|needle| pool.take_containing(needle).is_none());

        match missed {
            Some(needle) => failures.push(ComparisonFailure::MissingComment {
                line: *line,
                expected: needle.clone(),
                remaining: pool.into_remaining(),
            }),
            None if !pool.is_empty() => failures.push(ComparisonFailure::UnexpectedComments {
                line: *line,
                comments: pool.into_remaining(),
            }),
            None => {}
        }
    }

    for (line, found) in &actual.comments_by_line {
        if !found.is_empty() && !expected.expected_comments().contains_key(line) {
            failures.push(ComparisonFailure::UnexpectedComments {
                line: *line,
                comments: found.clone(),
            });
        }
    }
}

fn compare_fixed_content(
    expected: &Fixture,
    actual: &FileResult,
    failures: &mut Vec<ComparisonFailure>,
) {
    let wanted = expected.wanted_fixed_content();
    if wanted != actual.fixed_content {
        failures.push(ComparisonFailure::FixedContentMismatch {
            expected: wanted.to_string(),
            actual: actual.fixed_content.clone(),
        });
    }
}

fn compare_line_attributes(
    expected: &Fixture,
    actual: &FileResult,
    failures: &mut Vec<ComparisonFailure>,
) {
    let expected_text = dump_line_attributes(expected.expected_line_attributes());
    let actual_text = dump_line_attributes(&actual.line_attributes);
    if expected_text != actual_text {
        failures.push(ComparisonFailure::LineAttributesMismatch {
            expected: expected_text,
            actual: actual_text,
        });
    }
}
