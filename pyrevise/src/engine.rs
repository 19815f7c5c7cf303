//! The review engine.
//!
//! Ties the two halves together: detection (source → issue report) and
//! repair (source → corrected text). Both consume the scope analyzer
//! independently; repair never requires detection to have run first. Every
//! call parses its own tree and keeps nothing across calls.

use crate::config::EngineConfig;
use crate::detect;
use crate::issue::Report;
use crate::repair::{self, RepairOutcome};

/// Stateless engine bundling a configuration with the review and repair
/// entry points. Running several engines concurrently over different inputs
/// is safe; nothing is shared.
#[derive(Debug, Default, Clone)]
pub struct ReviewEngine {
    config: EngineConfig,
}

impl ReviewEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs all defect detectors over the source.
    ///
    /// Never fails: detectors degrade to "no additional issue" and external
    /// tool problems surface as `ToolError` issues in the report.
    #[must_use]
    pub fn review(&self, source: &str) -> Report {
        detect::run_detectors(source, &self.config)
    }

    /// Runs the repair pipeline over the source.
    ///
    /// Never fails: fallible stages degrade to tagged skips recorded in the
    /// outcome, leaving the text unchanged.
    #[must_use]
    pub fn repair(&self, source: &str) -> RepairOutcome {
        repair::run_pipeline(source, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueKind;

    fn offline_engine() -> ReviewEngine {
        ReviewEngine::new(EngineConfig::default().with_style(false).with_format(false))
    }

    #[test]
    fn test_review_and_repair_are_independent() {
        let engine = offline_engine();
        let source = "print(x)\n";

        // Repair without a prior review.
        let repaired = engine.repair(source);
        assert!(repaired.text.starts_with("x = 0\n"));

        // Review is unaffected by the repair having run.
        let report = engine.review(source);
        assert_eq!(report.count(IssueKind::UndefinedVariable), 1);
    }

    #[test]
    fn test_repaired_source_reviews_clean() {
        let engine = offline_engine();
        let repaired = engine.repair("def f()\n    if x > 5\n        y = 1\n");
        let report = engine.review(&repaired.text);
        assert!(
            report.is_clean(),
            "repaired text still has issues: {:?}",
            report.issues
        );
    }
}
