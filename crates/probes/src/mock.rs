//! In-memory [`Jolokia`] implementation for probe tests.

use std::collections::HashMap;

use amqcheck_jolokia::{Error, Jolokia, ReadResponse, Result};
use async_trait::async_trait;

/// Serves canned read envelopes keyed by MBean name. Unknown MBeans and
/// MBeans marked unreachable fail with a transport error, so tests can
/// exercise every branch of the failure policy.
pub(crate) struct MockJolokia {
    responses: HashMap<String, serde_json::Value>,
    unreachable: Vec<String>,
}

impl MockJolokia {
    pub(crate) fn new() -> Self {
        Self {
            responses: HashMap::new(),
            unreachable: Vec::new(),
        }
    }

    pub(crate) fn respond(mut self, mbean: impl Into<String>, envelope: serde_json::Value) -> Self {
        self.responses.insert(mbean.into(), envelope);
        self
    }

    pub(crate) fn unreachable(mut self, mbean: impl Into<String>) -> Self {
        self.unreachable.push(mbean.into());
        self
    }
}

#[async_trait]
impl Jolokia for MockJolokia {
    async fn read(&self, mbean: &str) -> Result<ReadResponse> {
        if self.unreachable.iter().any(|m| m == mbean) {
            return Err(Error::Transport("connection refused".into()));
        }
        let envelope = self
            .responses
            .get(mbean)
            .ok_or_else(|| Error::Transport(format!("no route to {mbean}")))?;
        Ok(serde_json::from_value(envelope.clone())?)
    }
}
