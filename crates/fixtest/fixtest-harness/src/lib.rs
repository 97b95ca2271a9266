//! # fixtest-harness
//!
//! Fixture-driven test harness for a static-analysis engine.
//! Parses `.test` fixture files, stages them on disk, runs an
//! [`engine::AnalysisEngine`] over the staged tree, and compares the
//! engine's comments, line attributes, and fixed content against the
//! fixture's expectations.

pub mod compare;
pub mod config_text;
pub mod discovery;
pub mod engine;
pub mod fixture;
pub mod runner;
pub mod staging;

pub use compare::{compare, ComparisonFailure, ComparisonOutcome, FileResult, ProjectResult};
pub use engine::{AnalysisEngine, AnalysisRequest};
pub use fixture::{Fixture, FixtureParser};
pub use runner::{FixtureReport, FixtureRunner, FixtureStatus, SuiteReport};
