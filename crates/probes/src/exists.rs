use amqcheck_check::{CheckGroup, Measurement, Probe};
use amqcheck_jolokia::{Jolokia, Result, queue_mbean, topic_mbean};
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::failure::failure_measurement;

/// Probes whether a queue or topic with the given name exists.
///
/// Queues are checked first; the topic lookup only happens when no queue
/// matched. The codes are the existence rule's contract: 1 queue, 2 topic,
/// 0 neither.
pub struct ExistsProbe<J> {
    jolokia: J,
    name: String,
}

impl<J> ExistsProbe<J> {
    /// Creates the probe for a destination name.
    pub fn new(jolokia: J, name: impl Into<String>) -> Self {
        Self {
            jolokia,
            name: name.into(),
        }
    }
}

impl<J: Jolokia> ExistsProbe<J> {
    async fn lookup(&self) -> Result<i64> {
        let queue = self.jolokia.read(&queue_mbean(&self.name)).await?;
        if queue.is_found() {
            return Ok(1);
        }
        let topic = self.jolokia.read(&topic_mbean(&self.name)).await?;
        if topic.is_found() {
            return Ok(2);
        }
        Ok(0)
    }
}

impl<J: Jolokia> Probe for ExistsProbe<J> {
    fn probe(&self) -> BoxStream<'_, Measurement> {
        futures::stream::once(async move {
            match self.lookup().await {
                Ok(code) => Measurement::count("exists", code, CheckGroup::Exists),
                Err(err) => failure_measurement(&err, "Queue(s)", CheckGroup::Exists),
            }
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use amqcheck_check::{CheckRunner, ClassificationRule, Verdict};
    use serde_json::json;

    use super::*;
    use crate::mock::MockJolokia;

    fn runner(name: &str) -> CheckRunner {
        CheckRunner::new(
            CheckGroup::Exists,
            ClassificationRule::Existence { name: name.into() },
        )
    }

    #[tokio::test]
    async fn queue_match_wins_without_topic_lookup() {
        let mock = MockJolokia::new().respond(
            queue_mbean("orders"),
            json!({ "status": 200, "value": { "Name": "orders", "QueueSize": 0 } }),
        );
        // topic mbean deliberately absent: a queue hit must not consult it
        let report = runner("orders").run(&ExistsProbe::new(mock, "orders")).await;
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.line, "OK exists: Found Queue with name orders");
    }

    #[tokio::test]
    async fn topic_match_reports_code_two() {
        let mock = MockJolokia::new()
            .respond(queue_mbean("prices"), json!({ "status": 404 }))
            .respond(topic_mbean("prices"), json!({ "status": 200, "value": {} }));
        let report = runner("prices").run(&ExistsProbe::new(mock, "prices")).await;
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.line, "OK exists: Found Topic with name prices");
    }

    #[tokio::test]
    async fn neither_found_is_critical() {
        let mock = MockJolokia::new()
            .respond(queue_mbean("ghost"), json!({ "status": 404 }))
            .respond(topic_mbean("ghost"), json!({ "status": 404 }));
        let report = runner("ghost").run(&ExistsProbe::new(mock, "ghost")).await;
        assert_eq!(report.verdict, Verdict::Critical);
        assert_eq!(report.exit_code(), 2);
        assert_eq!(
            report.line,
            "CRITICAL exists: Neither Queue nor Topic with name ghost were found!"
        );
    }

    #[tokio::test]
    async fn transport_failure_is_unknown() {
        let mock = MockJolokia::new().unreachable(queue_mbean("orders"));
        let report = runner("orders").run(&ExistsProbe::new(mock, "orders")).await;
        assert_eq!(report.verdict, Verdict::Unknown);
        assert_eq!(report.exit_code(), 3);
    }
}
