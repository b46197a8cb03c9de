use std::fmt;

/// Observed payload of a [`Measurement`].
///
/// Negative counts are the probe-failure convention: a probe that could not
/// observe anything emits a `Count` below zero and an explanatory name, and
/// classification short-circuits before any threshold comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A non-negative quantity (queue depth, pending messages), or a
    /// negative sentinel when the probe failed.
    Count(i64),
    /// A boolean observation, e.g. whether a subscription is active.
    Flag(bool),
    /// An enumerated status string, e.g. the broker health flag.
    Status(String),
}

impl Value {
    /// Whether this value encodes a probe failure rather than an observation.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Count(n) if *n < 0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Status(s) => f.write_str(s),
        }
    }
}

/// Classification group of a measurement. Selects the rule that applies and
/// names the check in the report line.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum CheckGroup {
    /// Queue depth checks.
    Size,
    /// Broker health flag.
    Health,
    /// Queue/topic existence.
    Exists,
    /// Topic subscription state of one client.
    Subscriber,
    /// Pending message backlog of one durable subscription.
    SubscriberPending,
    /// Dead-letter-queue depth.
    Dlq,
}

impl CheckGroup {
    /// Stable lowercase label used in the report line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Health => "health",
            Self::Exists => "exists",
            Self::Subscriber => "subscriber",
            Self::SubscriberPending => "subscriber_pending",
            Self::Dlq => "dlq",
        }
    }
}

impl fmt::Display for CheckGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One observed value plus its classification context.
///
/// Immutable once produced; created by a probe during a single invocation
/// and consumed exactly once by classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Human label; doubles as the description when the probe failed.
    pub name: String,
    /// The observed payload.
    pub value: Value,
    /// Display unit, if any. Not consulted by classification.
    pub unit: Option<&'static str>,
    /// Documented lower bound of the value, if any. Not enforced.
    pub floor: Option<i64>,
    /// The classification group this measurement belongs to.
    pub group: CheckGroup,
}

impl Measurement {
    /// Creates a measurement with no unit and no floor.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value, group: CheckGroup) -> Self {
        Self {
            name: name.into(),
            value,
            unit: None,
            floor: None,
            group,
        }
    }

    /// Creates a numeric measurement.
    #[must_use]
    pub fn count(name: impl Into<String>, count: i64, group: CheckGroup) -> Self {
        Self::new(name, Value::Count(count), group)
    }

    /// Creates the conventional probe-failure measurement (`Count(-1)`).
    /// The name should explain what failed.
    #[must_use]
    pub fn failure(name: impl Into<String>, group: CheckGroup) -> Self {
        Self::count(name, -1, group)
    }

    /// Documents the lower bound of the value.
    #[must_use]
    pub const fn with_floor(mut self, floor: i64) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Attaches a display unit.
    #[must_use]
    pub const fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }
}
