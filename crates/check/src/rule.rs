use crate::measurement::{Measurement, Value};
use crate::verdict::Verdict;

/// A measurement together with its verdict and description.
#[derive(Clone, Debug)]
pub struct Classified {
    /// The measurement that was classified.
    pub measurement: Measurement,
    /// Severity assigned by the rule.
    pub verdict: Verdict,
    /// Human-readable description; becomes the report line when this
    /// result is the worst one.
    pub description: String,
}

/// Range-based classifier for numeric measurements.
///
/// Both bounds are "alert if the observed value is strictly greater":
/// `value == warn` or `value == crit` is not alerting. A negative value is
/// the probe-failure sentinel and short-circuits to `on_failure` before any
/// comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdRule {
    warn: i64,
    crit: i64,
    on_failure: Verdict,
}

impl ThresholdRule {
    /// Rule for read-only checks: a failed probe is `UNKNOWN`.
    #[must_use]
    pub const fn new(warn: i64, crit: i64) -> Self {
        Self {
            warn,
            crit,
            on_failure: Verdict::Unknown,
        }
    }

    /// Rule for checks guarding against silent failure (dead-letter queue,
    /// pending backlog): a failed probe is itself `CRITICAL`.
    #[must_use]
    pub const fn critical_on_failure(warn: i64, crit: i64) -> Self {
        Self {
            warn,
            crit,
            on_failure: Verdict::Critical,
        }
    }

    fn classify(&self, measurement: &Measurement) -> (Verdict, String) {
        let Value::Count(n) = measurement.value else {
            return error_sentinel(self.on_failure, measurement);
        };
        if n < 0 {
            return error_sentinel(self.on_failure, measurement);
        }
        if n > self.crit {
            (
                Verdict::Critical,
                format!("{} is {n} (greater than {})", measurement.name, self.crit),
            )
        } else if n > self.warn {
            (
                Verdict::Warning,
                format!("{} is {n} (greater than {})", measurement.name, self.warn),
            )
        } else {
            (Verdict::Ok, format!("{} is {n}", measurement.name))
        }
    }
}

/// The closed family of classifiers. One variant per check type, each
/// carrying exactly the configuration it needs; dispatch is a `match`.
#[derive(Clone, Debug)]
pub enum ClassificationRule {
    /// Numeric warn/crit bounds (queue size, pending messages, DLQ depth).
    Threshold(ThresholdRule),
    /// Broker health flag: `"Good"` is OK, anything else fetched is
    /// WARNING. CRITICAL is unreachable for health.
    HealthFlag,
    /// Queue/topic existence lookup for `name`.
    Existence {
        /// The queried destination name, used in descriptions.
        name: String,
    },
    /// Subscription state of `client_id` on `topic`, as produced by
    /// subscriber resolution (boolean activity flag or sentinel code).
    SubscriberState {
        /// The queried topic name.
        topic: String,
        /// The queried client identifier.
        client_id: String,
    },
    /// Maps any measurement to a fixed verdict with an `ERROR:` description.
    ErrorSentinel {
        /// The verdict every measurement receives.
        verdict: Verdict,
    },
}

impl ClassificationRule {
    /// Applies the rule, pairing the measurement with its verdict and
    /// description. Pure: the same measurement always yields the same
    /// result.
    #[must_use]
    pub fn classify(&self, measurement: Measurement) -> Classified {
        let (verdict, description) = self.evaluate(&measurement);
        Classified {
            measurement,
            verdict,
            description,
        }
    }

    fn evaluate(&self, measurement: &Measurement) -> (Verdict, String) {
        match self {
            Self::Threshold(rule) => rule.classify(measurement),
            Self::HealthFlag => health_flag(measurement),
            Self::Existence { name } => existence(name, measurement),
            Self::SubscriberState { topic, client_id } => {
                subscriber_state(topic, client_id, measurement)
            }
            Self::ErrorSentinel { verdict } => error_sentinel(*verdict, measurement),
        }
    }
}

fn error_sentinel(verdict: Verdict, measurement: &Measurement) -> (Verdict, String) {
    (verdict, format!("ERROR: {}", measurement.name))
}

fn health_flag(measurement: &Measurement) -> (Verdict, String) {
    match &measurement.value {
        Value::Status(status) if status == "Good" => {
            (Verdict::Ok, format!("{} {status}", measurement.name))
        }
        Value::Status(status) => (Verdict::Warning, format!("{} {status}", measurement.name)),
        _ => error_sentinel(Verdict::Unknown, measurement),
    }
}

fn existence(name: &str, measurement: &Measurement) -> (Verdict, String) {
    match measurement.value {
        Value::Count(0) => (
            Verdict::Critical,
            format!("Neither Queue nor Topic with name {name} were found!"),
        ),
        Value::Count(1) => (Verdict::Ok, format!("Found Queue with name {name}")),
        Value::Count(2) => (Verdict::Ok, format!("Found Topic with name {name}")),
        _ => error_sentinel(Verdict::Unknown, measurement),
    }
}

fn subscriber_state(topic: &str, client_id: &str, measurement: &Measurement) -> (Verdict, String) {
    match measurement.value {
        Value::Flag(true) => (
            Verdict::Ok,
            format!("Client {client_id} is an active subscriber of Topic {topic}"),
        ),
        Value::Flag(false) => (
            Verdict::Warning,
            format!("Client {client_id} is an INACTIVE subscriber of Topic {topic}"),
        ),
        Value::Count(-1) => error_sentinel(Verdict::Unknown, measurement),
        Value::Count(-2) => (
            Verdict::Critical,
            format!("Topic {topic} IS INVALID / DOES NOT EXIST"),
        ),
        Value::Count(-3) => (
            Verdict::Critical,
            format!("Topic {topic} HAS NO SUBSCRIBERS"),
        ),
        Value::Count(-4) => (
            Verdict::Critical,
            format!("Subscriber ID {client_id} IS INVALID / DOES NOT EXIST"),
        ),
        _ => error_sentinel(Verdict::Critical, measurement),
    }
}
