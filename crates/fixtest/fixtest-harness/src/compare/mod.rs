//! Expectation comparison: engine output vs. fixture expectations.
//!
//! Three independent checks run on every fixture:
//! - comments, matched per line by greedy substring consumption
//! - fixed content, byte-exact
//! - line attributes, compared through a canonical text rendering

pub mod comparator;
pub mod pool;
pub mod render;
pub mod result;

pub use comparator::{compare, CheckKind, ComparisonFailure, ComparisonOutcome};
pub use pool::CommentPool;
pub use render::{dump_comments, dump_line_attributes};
pub use result::{FileResult, ProjectResult};
