//! Fixture runner: load → stage → analyze → compare → release.
//!
//! One fixture at a time, fully synchronous. The staging directory lives
//! until the comparison is done, so a failed fixture can keep it for
//! inspection when `keep_failed_staging` is set.

use std::fmt;
use std::path::{Path, PathBuf};

use fixtest_core::errors::{HarnessError, HarnessResult};
use fixtest_core::{FixtestErrorCode, HarnessConfig};

use crate::compare::{compare, ComparisonOutcome};
use crate::discovery::discover_fixtures;
use crate::engine::{AnalysisEngine, AnalysisRequest};
use crate::fixture::{Fixture, FixtureParser};
use crate::staging::StagingDir;

/// How a single fixture ended.
#[derive(Debug)]
pub enum FixtureStatus {
    Passed,
    /// Expectations were not met.
    Failed(ComparisonOutcome),
    /// The fixture never reached a verdict: bad fixture text, staging I/O,
    /// or an engine error.
    Errored(HarnessError),
}

/// Outcome of one fixture file.
#[derive(Debug)]
pub struct FixtureReport {
    pub path: PathBuf,
    pub status: FixtureStatus,
    /// Staging directory preserved for post-mortem, if any.
    pub kept_staging: Option<PathBuf>,
}

impl FixtureReport {
    pub fn passed(&self) -> bool {
        matches!(self.status, FixtureStatus::Passed)
    }
}

impl fmt::Display for FixtureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            FixtureStatus::Passed => write!(f, "PASS {}", self.path.display())?,
            FixtureStatus::Failed(outcome) => {
                write!(f, "FAIL {}\n{outcome}", self.path.display())?
            }
            FixtureStatus::Errored(err) => write!(
                f,
                "ERROR {} [{}]: {err}",
                self.path.display(),
                err.error_code()
            )?,
        }
        if let Some(kept) = &self.kept_staging {
            write!(f, "\n(staging kept at {})", kept.display())?;
        }
        Ok(())
    }
}

/// Reports for a whole suite, in discovery order.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub reports: Vec<FixtureReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, FixtureStatus::Failed(_)))
            .count()
    }

    pub fn errored(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, FixtureStatus::Errored(_)))
            .count()
    }

    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(FixtureReport::passed)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} fixture(s): {} passed, {} failed, {} errored",
            self.reports.len(),
            self.passed(),
            self.failed(),
            self.errored()
        )
    }

    /// Panic with every non-passing report. For use inside `#[test]` functions.
    pub fn assert_all_passed(&self) {
        if !self.all_passed() {
            panic!("{self}");
        }
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in self.reports.iter().filter(|r| !r.passed()) {
            writeln!(f, "{report}\n")?;
        }
        f.write_str(&self.summary())
    }
}

/// Drives an [`AnalysisEngine`] over fixture files.
pub struct FixtureRunner<E> {
    engine: E,
    config: HarnessConfig,
    suite_root: PathBuf,
    parser: FixtureParser,
}

impl<E: AnalysisEngine> FixtureRunner<E> {
    /// `suite_root` is where fixtures are discovered and what the directory
    /// placeholder expands to.
    pub fn new(engine: E, config: HarnessConfig, suite_root: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            config,
            suite_root: suite_root.into(),
            parser: FixtureParser::new(),
        }
    }

    /// Like [`FixtureRunner::new`], with the config read from a TOML file.
    pub fn from_config_file(
        engine: E,
        config_path: &Path,
        suite_root: impl Into<PathBuf>,
    ) -> HarnessResult<Self> {
        let config = HarnessConfig::load(config_path)?;
        Ok(Self::new(engine, config, suite_root))
    }

    /// Replace the parser, e.g. to use a different config service.
    pub fn with_parser(mut self, parser: FixtureParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn suite_root(&self) -> &Path {
        &self.suite_root
    }

    /// Read and parse one fixture file.
    pub fn load(&self, path: &Path) -> HarnessResult<Fixture> {
        let raw = std::fs::read_to_string(path).map_err(|source| HarnessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let substitutions = self.config.substitutions(&self.suite_root);
        self.parser
            .parse(&raw, &substitutions)
            .map_err(|source| HarnessError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load and run one fixture file.
    pub fn run_fixture(&self, path: &Path) -> FixtureReport {
        match self.load(path) {
            Ok(fixture) => self.run_parsed(path, &fixture),
            Err(err) => {
                tracing::warn!(fixture = %path.display(), error = %err, "fixture could not be loaded");
                FixtureReport {
                    path: path.to_path_buf(),
                    status: FixtureStatus::Errored(err),
                    kept_staging: None,
                }
            }
        }
    }

    /// Run an already parsed fixture. `path` labels the report.
    pub fn run_parsed(&self, path: &Path, fixture: &Fixture) -> FixtureReport {
        let staging = match StagingDir::create(self.config.effective_staging_prefix()) {
            Ok(staging) => staging,
            Err(err) => {
                return FixtureReport {
                    path: path.to_path_buf(),
                    status: FixtureStatus::Errored(err),
                    kept_staging: None,
                }
            }
        };

        let result = self.analyze_and_compare(&staging, fixture);
        let passed = matches!(&result, Ok(outcome) if outcome.passed());
        let keep = !passed && self.config.effective_keep_failed_staging();

        let kept_staging = match staging.release(keep) {
            Ok(kept) => kept,
            Err(err) => {
                tracing::warn!(error = %err, "could not release staging directory");
                None
            }
        };

        let status = match result {
            Ok(outcome) if outcome.passed() => {
                tracing::info!(fixture = %path.display(), "fixture passed");
                FixtureStatus::Passed
            }
            Ok(outcome) => {
                tracing::warn!(
                    fixture = %path.display(),
                    failures = outcome.failures().len(),
                    "fixture failed"
                );
                FixtureStatus::Failed(outcome)
            }
            Err(err) => {
                tracing::warn!(fixture = %path.display(), error = %err, "fixture errored");
                FixtureStatus::Errored(err)
            }
        };

        FixtureReport {
            path: path.to_path_buf(),
            status,
            kept_staging,
        }
    }

    /// Discover and run every fixture under the suite root.
    ///
    /// Only discovery errors abort; each fixture's failure is recorded and
    /// the rest still run.
    pub fn run_suite(&self) -> HarnessResult<SuiteReport> {
        let fixtures =
            discover_fixtures(&self.suite_root, self.config.effective_fixture_extension())?;
        let reports = fixtures.iter().map(|path| self.run_fixture(path)).collect();
        let report = SuiteReport { reports };
        tracing::info!(root = %self.suite_root.display(), "{}", report.summary());
        Ok(report)
    }

    fn analyze_and_compare(
        &self,
        staging: &StagingDir,
        fixture: &Fixture,
    ) -> HarnessResult<ComparisonOutcome> {
        staging.materialize(fixture, self.config.effective_analyzer_config_filename())?;

        let request = AnalysisRequest {
            root: staging.root(),
            changed_paths: fixture.changed_paths(),
        };
        tracing::debug!(
            root = %request.root.display(),
            changed = request.changed_paths.len(),
            "running analysis engine"
        );
        let mut project = self.engine.analyze(&request)?;

        let file = project
            .take_file(fixture.primary_filename())
            .ok_or_else(|| HarnessError::FileNotAnalyzed {
                filename: fixture.primary_filename().to_string(),
            })?;

        Ok(compare(fixture, &file))
    }
}
