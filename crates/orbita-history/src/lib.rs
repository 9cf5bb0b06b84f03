//! Conversation history persistence.
//!
//! One MongoDB document per thread: the full turn sequence is rewritten on
//! every save (last write wins) and loads of unknown threads come back empty.
//! [`HistoryStore`] is the seam the HTTP layer and tests implement against.

pub mod document;
pub mod error;
pub mod mongo;
pub mod store;

pub use document::ThreadDocument;
pub use error::StorageError;
pub use mongo::MongoHistoryStore;
pub use store::HistoryStore;
