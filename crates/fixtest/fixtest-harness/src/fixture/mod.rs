//! Fixture model and the text-format parser.
//!
//! ## Format
//! ```text
//! <primary file content>
//!
//! -- FILENAME --
//! src/a.php
//!
//! -- COMMENTS --
//! Line 1: Unused variable $x
//! ```
//! Sections are introduced by a blank line followed by `-- NAME --`.

pub mod model;
pub mod parser;
pub mod section;

pub use model::{AttributeMap, ConfigMap, Fixture, LineNumber};
pub use parser::FixtureParser;
pub use section::SectionKind;
