use futures::StreamExt;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::measurement::CheckGroup;
use crate::probe::Probe;
use crate::rule::ClassificationRule;
use crate::verdict::Verdict;

/// Outcome of one check invocation: the report line and the verdict that
/// decides the process exit code.
#[derive(Clone, Debug)]
pub struct Report {
    /// Overall severity.
    pub verdict: Verdict,
    /// The single machine-parsable report line.
    pub line: String,
}

impl Report {
    /// Exit code for the invoking monitoring supervisor.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }
}

/// Orchestrates probe → classify → aggregate → report for one invocation.
///
/// The probe is invoked exactly once and nothing is retried: any
/// collaborator error already arrives as a failure measurement.
#[derive(Clone, Debug)]
pub struct CheckRunner {
    group: CheckGroup,
    rule: ClassificationRule,
}

impl CheckRunner {
    /// Pairs a classification group with the rule applied to its
    /// measurements.
    #[must_use]
    pub const fn new(group: CheckGroup, rule: ClassificationRule) -> Self {
        Self { group, rule }
    }

    /// Runs the pipeline, classifying measurements as the probe yields
    /// them.
    pub async fn run(&self, probe: &dyn Probe) -> Report {
        let mut results = Vec::new();
        let mut measurements = probe.probe();
        while let Some(measurement) = measurements.next().await {
            let result = self.rule.classify(measurement);
            debug!(
                group = self.group.label(),
                verdict = result.verdict.label(),
                description = %result.description,
                "classified measurement",
            );
            results.push(result);
        }

        let (verdict, summary) = aggregate(&results);
        Report {
            verdict,
            line: format!("{} {}: {summary}", verdict.label(), self.group.label()),
        }
    }
}
