//! Probes for the ActiveMQ checks.
//!
//! One probe per check mode, each observing the broker through a
//! [`Jolokia`](amqcheck_jolokia::Jolokia) implementation and emitting
//! engine measurements. Fetch failures never escape a probe: they become
//! negative-valued measurements named after the failed step, and the
//! classification layer decides their severity.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod dlq;
mod exists;
mod failure;
mod health;
#[cfg(test)]
mod mock;
mod queue_size;
mod subscriber;
mod subscriber_pending;

pub use dlq::{DEFAULT_DLQ, DlqProbe};
pub use exists::ExistsProbe;
pub use health::HealthProbe;
pub use queue_size::QueueSizeProbe;
pub use subscriber::SubscriberProbe;
pub use subscriber_pending::SubscriberPendingProbe;
