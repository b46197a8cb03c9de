//! Check evaluation and aggregation core for the ActiveMQ monitoring suite.
//!
//! Probes observe a broker and emit [`Measurement`]s; a [`ClassificationRule`]
//! turns each measurement into a [`Verdict`] plus a description; the
//! aggregator reduces everything to one overall verdict and one report line.
//! Collaborator failures never cross into this crate as errors — probes
//! encode them as negative-valued measurements up front.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod aggregate;
mod measurement;
mod probe;
mod rule;
mod runner;
mod subscriber;
mod verdict;

pub use aggregate::aggregate;
pub use measurement::{CheckGroup, Measurement, Value};
pub use probe::Probe;
pub use rule::{Classified, ClassificationRule, ThresholdRule};
pub use runner::{CheckRunner, Report};
pub use subscriber::{RecordOutcome, SubscriberOutcome, classify_record, reduce_records};
pub use verdict::Verdict;
