//! Section header normalization and lookup.

/// The kind of a fixture section, resolved from its header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Filename,
    Comments,
    ChangedPaths,
    LineAttributes,
    FixedContent,
    Config,
    /// `FILE: <path>`: an auxiliary file staged next to the primary one.
    File(String),
}

/// Canonical header names. Lookup happens after [`normalize_header`].
const NAMED_SECTIONS: &[(&str, SectionKind)] = &[
    ("FILENAME", SectionKind::Filename),
    ("COMMENTS", SectionKind::Comments),
    ("CHANGED PATHS", SectionKind::ChangedPaths),
    ("LINE ATTRIBUTES", SectionKind::LineAttributes),
    ("FIXED CONTENT", SectionKind::FixedContent),
    ("CONFIG", SectionKind::Config),
];

const FILE_PREFIX: &str = "FILE: ";

/// Treat space, dash, and underscore as the same separator.
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}

impl SectionKind {
    /// Resolve a raw header. Returns `None` for unknown headers.
    ///
    /// `FILE:` headers are matched on the raw text so paths keep their
    /// dashes and underscores.
    pub fn from_header(header: &str) -> Option<Self> {
        let normalized = normalize_header(header);
        if let Some((_, kind)) = NAMED_SECTIONS.iter().find(|(name, _)| *name == normalized) {
            return Some(kind.clone());
        }
        header
            .strip_prefix(FILE_PREFIX)
            .map(|path| SectionKind::File(path.to_string()))
    }

    /// Canonical name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Filename => "FILENAME",
            Self::Comments => "COMMENTS",
            Self::ChangedPaths => "CHANGED PATHS",
            Self::LineAttributes => "LINE ATTRIBUTES",
            Self::FixedContent => "FIXED CONTENT",
            Self::Config => "CONFIG",
            Self::File(_) => "FILE",
        }
    }
}
