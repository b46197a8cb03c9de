use amqcheck_check::{
    CheckGroup, Measurement, Probe, RecordOutcome, SubscriberOutcome, classify_record,
    reduce_records,
};
use amqcheck_jolokia::{Jolokia, Result, SubscriptionValue, TopicValue, topic_mbean};
use futures::StreamExt;
use futures::future;
use futures::stream::BoxStream;
use tracing::debug;

use crate::failure::failure_measurement;

/// Resolves whether a client is an active subscriber of a topic.
///
/// Drives the resolution precedence: topic lookup, then one detail fetch
/// per subscription record, then the commutative record reduction. The
/// detail fetches run concurrently; the first failure aborts the whole
/// resolution, since a partial record set supports no conclusion.
pub struct SubscriberProbe<J> {
    jolokia: J,
    topic: String,
    client_id: String,
}

impl<J> SubscriberProbe<J> {
    /// Creates the probe for a topic / client-identifier pair.
    pub fn new(jolokia: J, topic: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            jolokia,
            topic: topic.into(),
            client_id: client_id.into(),
        }
    }
}

impl<J: Jolokia> SubscriberProbe<J> {
    async fn resolve(&self) -> Result<SubscriberOutcome> {
        let topic = self.jolokia.read(&topic_mbean(&self.topic)).await?;
        if !topic.is_found() {
            return Ok(SubscriberOutcome::TopicMissing);
        }
        let topic: TopicValue = topic.value()?;

        let outcomes: Vec<RecordOutcome> =
            future::try_join_all(topic.subscriptions.iter().map(|record| async {
                let detail: SubscriptionValue =
                    self.jolokia.read(&record.object_name).await?.value()?;
                Ok::<_, amqcheck_jolokia::Error>(classify_record(
                    &detail.destination_name,
                    &detail.client_id,
                    detail.active,
                    &self.topic,
                    &self.client_id,
                ))
            }))
            .await?;

        debug!(records = outcomes.len(), topic = %self.topic, "reducing subscription records");
        Ok(reduce_records(&outcomes))
    }
}

impl<J: Jolokia> Probe for SubscriberProbe<J> {
    fn probe(&self) -> BoxStream<'_, Measurement> {
        futures::stream::once(async move {
            match self.resolve().await {
                Ok(outcome) => {
                    Measurement::new("subscription", outcome.sentinel(), CheckGroup::Subscriber)
                }
                Err(err) => failure_measurement(&err, "Values", CheckGroup::Subscriber),
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

    const TOPIC: &str = "prices";
    const CLIENT: &str = "dashboard";

    fn runner() -> CheckRunner {
        CheckRunner::new(
            CheckGroup::Subscriber,
            ClassificationRule::SubscriberState {
                topic: TOPIC.into(),
                client_id: CLIENT.into(),
            },
        )
    }

    fn sub_mbean(n: usize) -> String {
        format!("org.apache.activemq:type=Broker,brokerName=localhost,endpoint=Consumer,sub={n}")
    }

    fn topic_with(records: &[serde_json::Value]) -> MockJolokia {
        let refs: Vec<_> = (0..records.len())
            .map(|n| json!({ "objectName": sub_mbean(n) }))
            .collect();
        let mut mock = MockJolokia::new().respond(
            topic_mbean(TOPIC),
            json!({ "status": 200, "value": { "Subscriptions": refs } }),
        );
        for (n, record) in records.iter().enumerate() {
            mock = mock.respond(sub_mbean(n), json!({ "status": 200, "value": record }));
        }
        mock
    }

    fn record(client_id: &str, active: bool) -> serde_json::Value {
        json!({ "DestinationName": TOPIC, "ClientId": client_id, "Active": active })
    }

    #[tokio::test]
    async fn active_subscription_is_ok() {
        let mock = topic_with(&[record("someone-else", false), record(CLIENT, true)]);
        let report = runner().run(&SubscriberProbe::new(mock, TOPIC, CLIENT)).await;
        assert_eq!(report.exit_code(), 0);
        assert_eq!(
            report.line,
            "OK subscriber: Client dashboard is an active subscriber of Topic prices"
        );
    }

    #[tokio::test]
    async fn inactive_record_beats_foreign_clients() {
        // one record belongs to another client, one is ours but inactive:
        // the verdict must be INACTIVE, not client-missing
        let mock = topic_with(&[record("someone-else", true), record(CLIENT, false)]);
        let report = runner().run(&SubscriberProbe::new(mock, TOPIC, CLIENT)).await;
        assert_eq!(report.verdict, Verdict::Warning);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(
            report.line,
            "WARNING subscriber: Client dashboard is an INACTIVE subscriber of Topic prices"
        );
    }

    #[tokio::test]
    async fn missing_topic_is_critical() {
        let mock = MockJolokia::new().respond(topic_mbean(TOPIC), json!({ "status": 404 }));
        let report = runner().run(&SubscriberProbe::new(mock, TOPIC, CLIENT)).await;
        assert_eq!(report.verdict, Verdict::Critical);
        assert_eq!(report.exit_code(), 2);
        assert_eq!(
            report.line,
            "CRITICAL subscriber: Topic prices IS INVALID / DOES NOT EXIST"
        );
    }

    #[tokio::test]
    async fn topic_without_records_is_critical() {
        let mock = topic_with(&[]);
        let report = runner().run(&SubscriberProbe::new(mock, TOPIC, CLIENT)).await;
        assert_eq!(report.verdict, Verdict::Critical);
        assert_eq!(
            report.line,
            "CRITICAL subscriber: Topic prices HAS NO SUBSCRIBERS"
        );
    }

    #[tokio::test]
    async fn only_foreign_clients_is_critical() {
        let mock = topic_with(&[record("someone-else", true), record("third", false)]);
        let report = runner().run(&SubscriberProbe::new(mock, TOPIC, CLIENT)).await;
        assert_eq!(report.verdict, Verdict::Critical);
        assert_eq!(
            report.line,
            "CRITICAL subscriber: Subscriber ID dashboard IS INVALID / DOES NOT EXIST"
        );
    }

    #[tokio::test]
    async fn mismatched_destination_reports_invalid_topic() {
        let mock = topic_with(&[
            json!({ "DestinationName": "trades", "ClientId": CLIENT, "Active": true }),
            record(CLIENT, true),
        ]);
        let report = runner().run(&SubscriberProbe::new(mock, TOPIC, CLIENT)).await;
        assert_eq!(report.verdict, Verdict::Critical);
        assert_eq!(
            report.line,
            "CRITICAL subscriber: Topic prices IS INVALID / DOES NOT EXIST"
        );
    }

    #[tokio::test]
    async fn record_fetch_failure_aborts_resolution_as_unknown() {
        let mock = topic_with(&[record(CLIENT, true)]).unreachable(sub_mbean(0));
        let report = runner().run(&SubscriberProbe::new(mock, TOPIC, CLIENT)).await;
        assert_eq!(report.verdict, Verdict::Unknown);
        assert_eq!(report.exit_code(), 3);
    }
}
