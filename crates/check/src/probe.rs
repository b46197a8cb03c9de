use futures::stream::BoxStream;

use crate::measurement::Measurement;

/// External collaborator producing measurements from a live system.
///
/// The stream is finite and consumed exactly once per invocation; probes
/// over many sub-resources (the all-queues fan-out) should yield lazily so
/// memory stays bounded. A probe never fails: collaborator errors are
/// emitted as negative-valued measurements with an explanatory name, not
/// as stream errors.
pub trait Probe: Send + Sync {
    /// Observes the system, yielding zero or more measurements.
    fn probe(&self) -> BoxStream<'_, Measurement>;
}
