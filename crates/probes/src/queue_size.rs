use amqcheck_check::{CheckGroup, Measurement, Probe};
use amqcheck_jolokia::{BROKER_MBEAN, BrokerValue, Jolokia, QueueValue};
use async_stream::stream;
use futures::stream::BoxStream;
use glob::Pattern;
use tracing::debug;

use crate::failure::failure_measurement;

/// Probes the depth of every queue on the broker, optionally narrowed by a
/// shell-style pattern.
///
/// Queues are fetched and yielded one at a time, so memory stays bounded
/// on brokers with large queue fleets. Internal `ActiveMQ*` queues are
/// skipped. The first fetch failure yields a single failure measurement
/// and ends the stream.
pub struct QueueSizeProbe<J> {
    jolokia: J,
    pattern: Option<Pattern>,
}

impl<J> QueueSizeProbe<J> {
    /// Probes every queue.
    #[must_use]
    pub const fn all(jolokia: J) -> Self {
        Self {
            jolokia,
            pattern: None,
        }
    }

    /// Probes queues whose name matches `pattern` (`*` and `?` wildcards).
    ///
    /// # Errors
    ///
    /// Returns the pattern error when `pattern` is not a valid glob.
    pub fn matching(jolokia: J, pattern: &str) -> Result<Self, glob::PatternError> {
        Ok(Self {
            jolokia,
            pattern: Some(Pattern::new(pattern)?),
        })
    }

    fn selects(&self, queue_name: &str) -> bool {
        self.pattern
            .as_ref()
            .is_none_or(|pattern| pattern.matches(queue_name))
    }
}

impl<J: Jolokia> Probe for QueueSizeProbe<J> {
    fn probe(&self) -> BoxStream<'_, Measurement> {
        Box::pin(stream! {
            let broker = self.jolokia.read(BROKER_MBEAN).await;
            let broker: BrokerValue = match broker.and_then(|resp| resp.value()) {
                Ok(broker) => broker,
                Err(err) => {
                    yield failure_measurement(&err, "Queue(s)", CheckGroup::Size);
                    return;
                }
            };

            for queue_ref in &broker.queues {
                let queue = self.jolokia.read(&queue_ref.object_name).await;
                let queue: QueueValue = match queue.and_then(|resp| resp.value()) {
                    Ok(queue) => queue,
                    Err(err) => {
                        yield failure_measurement(&err, "Queue(s)", CheckGroup::Size);
                        return;
                    }
                };
                if queue.name.starts_with("ActiveMQ") {
                    debug!(queue = %queue.name, "skipping internal queue");
                    continue;
                }
                if self.selects(&queue.name) {
                    yield Measurement::count(
                        format!("Queue Size of {}", queue.name),
                        queue.queue_size,
                        CheckGroup::Size,
                    )
                    .with_floor(0);
                }
            }
        })
    }
}
