//! The analysis-engine boundary.
//!
//! The harness never analyzes code itself. An engine receives a staged
//! directory and the changed paths, and returns per-file results.

use std::path::Path;

use fixtest_core::errors::EngineError;

use crate::compare::ProjectResult;

/// Input for one engine run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    /// Root of the staged fixture tree.
    pub root: &'a Path,
    /// Paths the engine should treat as modified, in fixture order.
    pub changed_paths: &'a [String],
}

/// A static-analysis engine driven by the harness.
///
/// Implementations must be deterministic for a given tree, config, and
/// changed-path list.
pub trait AnalysisEngine {
    fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<ProjectResult, EngineError>;
}

impl<T: AnalysisEngine + ?Sized> AnalysisEngine for &T {
    fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<ProjectResult, EngineError> {
        (**self).analyze(request)
    }
}

impl<T: AnalysisEngine + ?Sized> AnalysisEngine for Box<T> {
    fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<ProjectResult, EngineError> {
        (**self).analyze(request)
    }
}
