//! Client crate for the hosted conversational agent service.
//!
//! The service hosts named, versioned agent configurations; this crate
//! resolves an agent by name, relays full dialogues to it and extracts the
//! reply text leniently (see [`AgentReply::text`]). The [`AgentInvoker`]
//! trait is the seam the HTTP layer injects mocks through.

pub mod client;
pub mod error;
pub mod invoker;
pub mod response;
pub mod types;

pub use client::{AgentDefinition, AgentInfo, AgentServiceClient, AgentServiceClientBuilder};
pub use error::AgentError;
pub use invoker::AgentInvoker;
pub use response::{AgentReply, ContentBlock, OutputItem};
pub use types::{Role, Turn};
