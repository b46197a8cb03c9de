use amqcheck_check::{CheckGroup, Measurement, Probe};
use amqcheck_jolokia::{BROKER_MBEAN, BrokerValue, DurableSubscriptionValue, Jolokia, Result};
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::failure::failure_measurement;

/// Probes the pending-message backlog of one durable subscription.
///
/// Walks the broker's active and inactive durable topic subscribers,
/// looking for the record whose subscription name matches. A matching
/// record held by a different client is a configuration error and is
/// reported as a failure measurement, as is a subscription that cannot be
/// found at all; the pending-check policy classifies both CRITICAL.
pub struct SubscriberPendingProbe<J> {
    jolokia: J,
    subscription: String,
    client_id: String,
}

impl<J> SubscriberPendingProbe<J> {
    /// Creates the probe for a subscription-name / client-identifier pair.
    pub fn new(
        jolokia: J,
        subscription: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            jolokia,
            subscription: subscription.into(),
            client_id: client_id.into(),
        }
    }
}

impl<J: Jolokia> SubscriberPendingProbe<J> {
    async fn find(&self) -> Result<Measurement> {
        let broker: BrokerValue = self.jolokia.read(BROKER_MBEAN).await?.value()?;
        let records = broker
            .topic_subscribers
            .iter()
            .chain(&broker.inactive_durable_topic_subscribers);

        for record in records {
            let detail: DurableSubscriptionValue =
                self.jolokia.read(&record.object_name).await?.value()?;
            if detail.subscription_name != self.subscription {
                continue;
            }
            if detail.client_id != self.client_id {
                return Ok(Measurement::failure(
                    format!(
                        "ClientId error: Expected: {}. Got: {}",
                        self.client_id, detail.client_id
                    ),
                    CheckGroup::SubscriberPending,
                ));
            }
            return Ok(Measurement::count(
                format!("Pending Messages for {}", detail.subscription_name),
                detail.pending_queue_size,
                CheckGroup::SubscriberPending,
            )
            .with_floor(0));
        }

        Ok(Measurement::failure(
            format!("Subscription {} NOT FOUND", self.subscription),
            CheckGroup::SubscriberPending,
        ))
    }
}

impl<J: Jolokia> Probe for SubscriberPendingProbe<J> {
    fn probe(&self) -> BoxStream<'_, Measurement> {
        futures::stream::once(async move {
            self.find().await.unwrap_or_else(|err| {
                failure_measurement(&err, "Subscriber", CheckGroup::SubscriberPending)
            })
        })
        .boxed()
    }
}
