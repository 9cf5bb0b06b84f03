use async_trait::async_trait;

use crate::error::Result;
use crate::types::Turn;

/// Trait for producing assistant replies from a dialogue
///
/// Implementations are stateless per call: the full ordered history goes out
/// on every invocation, so conversational memory is whatever the caller
/// passes in.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    /// Send the full dialogue and return the assistant's reply text
    ///
    /// An empty string is a valid reply (see [`crate::AgentReply::text`]);
    /// errors are reserved for transport, auth and agent-resolution failures.
    async fn invoke(&self, turns: &[Turn]) -> Result<String>;
}
