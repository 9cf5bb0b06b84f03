use async_trait::async_trait;

use orbita_agent::Turn;

use crate::error::Result;

/// Trait for conversation history persistence
///
/// Exactly three operations: read a thread's turns, replace them wholesale,
/// and drop the thread. There is no partial update and no concurrency token;
/// two concurrent saves on one thread race and the last write wins.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// All turns of a thread, in dialogue order
    ///
    /// A thread with no document is an empty sequence, not an error.
    async fn load(&self, thread_id: &str) -> Result<Vec<Turn>>;

    /// Replace the thread document with the given turns (upsert), stamping
    /// the current time
    async fn save(&self, thread_id: &str, user_id: &str, turns: &[Turn]) -> Result<()>;

    /// Remove the thread document; removing an unknown thread succeeds
    async fn delete(&self, thread_id: &str) -> Result<()>;
}
