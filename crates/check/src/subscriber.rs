//! Reduction of per-record subscription lookups into one outcome.
//!
//! A client may appear under several subscription records (e.g. after a
//! reconnect). The question is whether the client is an active subscriber
//! *anywhere*, so `Active` dominates `Inactive`, which dominates records
//! that merely belong to other clients. The reduction is commutative:
//! record order, and therefore fetch completion order, never changes the
//! result.

use crate::measurement::Value;
use crate::verdict::Verdict;

/// Classification of a single subscription record against the target
/// topic and client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The record's destination disagrees with the queried topic.
    /// Should not occur; treated as the topic being invalid.
    TopicMismatch,
    /// The record belongs to a different client.
    ClientMismatch,
    /// The record belongs to the target client and is active.
    Active,
    /// The record belongs to the target client and is inactive.
    Inactive,
}

/// Final outcome of subscriber resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriberOutcome {
    /// The target client has an active subscription on the topic.
    Active,
    /// The target client subscribes but every matching record is inactive.
    Inactive,
    /// The topic lookup failed or a record contradicted the topic.
    TopicMissing,
    /// The topic exists but has no subscription records at all.
    NoSubscribers,
    /// Every record belongs to other clients.
    ClientMissing,
    /// A fetch failed mid-resolution; nothing can be concluded.
    TransportError,
}

impl SubscriberOutcome {
    /// Severity of this outcome. Logical absence is CRITICAL; only a
    /// transport failure is UNKNOWN.
    #[must_use]
    pub const fn verdict(self) -> Verdict {
        match self {
            Self::Active => Verdict::Ok,
            Self::Inactive => Verdict::Warning,
            Self::TransportError => Verdict::Unknown,
            Self::TopicMissing | Self::NoSubscribers | Self::ClientMissing => Verdict::Critical,
        }
    }

    /// Sentinel encoding carried by the `subscription` measurement:
    /// the activity flag for resolved clients, a small negative code
    /// otherwise.
    #[must_use]
    pub const fn sentinel(self) -> Value {
        match self {
            Self::Active => Value::Flag(true),
            Self::Inactive => Value::Flag(false),
            Self::TransportError => Value::Count(-1),
            Self::TopicMissing => Value::Count(-2),
            Self::NoSubscribers => Value::Count(-3),
            Self::ClientMissing => Value::Count(-4),
        }
    }
}

/// Classifies one fetched subscription record against the target topic and
/// client identifier.
#[must_use]
pub fn classify_record(
    destination: &str,
    record_client_id: &str,
    active: bool,
    topic: &str,
    client_id: &str,
) -> RecordOutcome {
    if destination != topic {
        return RecordOutcome::TopicMismatch;
    }
    if record_client_id != client_id {
        return RecordOutcome::ClientMismatch;
    }
    if active {
        RecordOutcome::Active
    } else {
        RecordOutcome::Inactive
    }
}

/// Reduces the per-record outcomes over the whole set. First matching
/// clause wins, independent of record order: a mismatched topic anywhere
/// invalidates the lookup, otherwise any active record wins, otherwise any
/// inactive record, otherwise the client is simply not subscribed.
#[must_use]
pub fn reduce_records(outcomes: &[RecordOutcome]) -> SubscriberOutcome {
    if outcomes.is_empty() {
        return SubscriberOutcome::NoSubscribers;
    }
    if outcomes.contains(&RecordOutcome::TopicMismatch) {
        SubscriberOutcome::TopicMissing
    } else if outcomes.contains(&RecordOutcome::Active) {
        SubscriberOutcome::Active
    } else if outcomes.contains(&RecordOutcome::Inactive) {
        SubscriberOutcome::Inactive
    } else {
        SubscriberOutcome::ClientMissing
    }
}
