use amqcheck_check::{CheckGroup, Measurement, Probe, Value};
use amqcheck_jolokia::{HealthValue, Jolokia, health_mbean};
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::failure::failure_measurement;

/// Probes the broker health service's `CurrentStatus` flag.
pub struct HealthProbe<J> {
    jolokia: J,
}

impl<J> HealthProbe<J> {
    /// Creates the probe.
    #[must_use]
    pub const fn new(jolokia: J) -> Self {
        Self { jolokia }
    }
}

impl<J: Jolokia> Probe for HealthProbe<J> {
    fn probe(&self) -> BoxStream<'_, Measurement> {
        futures::stream::once(async move {
            let status = self
                .jolokia
                .read(&health_mbean())
                .await
                .and_then(|resp| resp.value::<HealthValue>());
            match status {
                Ok(health) => Measurement::new(
                    "CurrentStatus",
                    Value::Status(health.current_status),
                    CheckGroup::Health,
                ),
                Err(err) => failure_measurement(&err, "Values", CheckGroup::Health),
            }
        })
        .boxed()
    }
}
