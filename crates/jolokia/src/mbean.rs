//! MBean names for the broker objects the checks read.

/// The broker MBean every other name is derived from.
pub const BROKER_MBEAN: &str = "org.apache.activemq:type=Broker,brokerName=localhost";

/// MBean of a named queue.
#[must_use]
pub fn queue_mbean(queue: &str) -> String {
    format!("{BROKER_MBEAN},destinationType=Queue,destinationName={queue}")
}

/// MBean of a named topic.
#[must_use]
pub fn topic_mbean(topic: &str) -> String {
    format!("{BROKER_MBEAN},destinationType=Topic,destinationName={topic}")
}

/// MBean of the broker health service.
#[must_use]
pub fn health_mbean() -> String {
    format!("{BROKER_MBEAN},service=Health")
}
