//! HTTP backend for the Orbita assistant.
//!
//! Relays chat between end users and a hosted conversational agent with
//! per-thread history in MongoDB, and proxies four public space-data feeds
//! into flat Portuguese-keyed summaries.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
