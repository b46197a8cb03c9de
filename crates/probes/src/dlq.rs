use amqcheck_check::{CheckGroup, Measurement, Probe};
use amqcheck_jolokia::{Jolokia, QueueValue, queue_mbean};
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::failure::failure_measurement;

/// Dead-letter queue checked when no name is given.
pub const DEFAULT_DLQ: &str = "ActiveMQ.DLQ";

/// Probes the depth of the dead-letter queue.
///
/// A DLQ that cannot be observed — absent, unreachable, malformed — is an
/// operational emergency in its own right, so every failure path emits the
/// sentinel that the DLQ policy classifies CRITICAL.
pub struct DlqProbe<J> {
    jolokia: J,
    dlq: String,
}

impl<J> DlqProbe<J> {
    /// Creates the probe for a dead-letter queue name.
    pub fn new(jolokia: J, dlq: impl Into<String>) -> Self {
        Self {
            jolokia,
            dlq: dlq.into(),
        }
    }
}

impl<J: Jolokia> Probe for DlqProbe<J> {
    fn probe(&self) -> BoxStream<'_, Measurement> {
        futures::stream::once(async move {
            let response = match self.jolokia.read(&queue_mbean(&self.dlq)).await {
                Ok(response) => response,
                Err(err) => return failure_measurement(&err, "Queue(s)", CheckGroup::Dlq),
            };
            if !response.is_found() {
                return Measurement::failure("DLQ does not exist", CheckGroup::Dlq);
            }
            match response.value::<QueueValue>() {
                Ok(queue) => {
                    Measurement::count("DLQ Queue Size", queue.queue_size, CheckGroup::Dlq)
                        .with_floor(0)
                }
                Err(err) => failure_measurement(&err, "Queue(s)", CheckGroup::Dlq),
            }
        })
        .boxed()
    }
}
