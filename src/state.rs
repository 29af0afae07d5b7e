use crate::config::Config;
use crate::store::EntryStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: EntryStore,
    pub config: Arc<Config>,
}
