use std::sync::Arc;

use orbita_agent::AgentInvoker;
use orbita_history::HistoryStore;
use orbita_spacedata::SpaceDataClient;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// The store and the agent sit behind trait objects so tests can swap in
/// in-memory fakes; the space data client is injected whole since its base
/// URLs are already overridable.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub history: Arc<dyn HistoryStore>,
    pub agent: Arc<dyn AgentInvoker>,
    pub spacedata: Arc<SpaceDataClient>,
}

impl AppState {
    pub fn new(
        config: Config,
        history: Arc<dyn HistoryStore>,
        agent: Arc<dyn AgentInvoker>,
        spacedata: SpaceDataClient,
    ) -> Self {
        Self {
            config: Arc::new(config),
            history,
            agent,
            spacedata: Arc::new(spacedata),
        }
    }
}
