use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Envelope of a Jolokia read operation.
///
/// `status != 200` signals logical absence of the queried MBean (the
/// destination genuinely does not exist) and is not an error; callers
/// decide what absence means for their check.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReadResponse {
    /// Jolokia's own status code, 200 when the MBean was found.
    pub status: i64,
    /// The MBean attribute map, absent for non-200 responses.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl ReadResponse {
    /// Whether the queried MBean exists.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.status == 200
    }

    /// Deserializes the `value` field into a typed attribute struct.
    ///
    /// # Errors
    ///
    /// `MissingKey` when the response carries no value at all, `Decode`
    /// when the value does not have the expected shape.
    pub fn value<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.value.clone().ok_or(Error::MissingKey("value"))?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Reference to another MBean, as embedded in broker attribute lists.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectNameRef {
    /// Fully qualified MBean name, fetchable via another read.
    pub object_name: String,
}

/// Broker MBean attributes used by the checks.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrokerValue {
    /// Queues hosted by the broker.
    pub queues: Vec<ObjectNameRef>,
    /// Active durable topic subscribers.
    #[serde(default)]
    pub topic_subscribers: Vec<ObjectNameRef>,
    /// Inactive durable topic subscribers.
    #[serde(default)]
    pub inactive_durable_topic_subscribers: Vec<ObjectNameRef>,
}

/// Queue MBean attributes.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueValue {
    /// Queue name.
    pub name: String,
    /// Number of messages currently on the queue.
    pub queue_size: i64,
}

/// Topic MBean attributes.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopicValue {
    /// Subscription records registered on the topic.
    pub subscriptions: Vec<ObjectNameRef>,
}

/// Health service MBean attributes.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthValue {
    /// `"Good"` when the broker considers itself healthy.
    pub current_status: String,
}

/// Topic subscription MBean attributes.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionValue {
    /// Destination the subscription is registered on.
    pub destination_name: String,
    /// Identifier of the subscribed client.
    pub client_id: String,
    /// Whether the subscription is currently active.
    pub active: bool,
}

/// Durable subscription MBean attributes (pending-backlog check).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DurableSubscriptionValue {
    /// Name of the durable subscription.
    pub subscription_name: String,
    /// Identifier of the client involved in the subscription.
    pub client_id: String,
    /// Messages waiting to be delivered to the subscriber.
    pub pending_queue_size: i64,
}
