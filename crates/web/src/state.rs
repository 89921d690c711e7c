use std::sync::Arc;

use storage::ScoreStore;

/// Shared handler state; the store is chosen once at startup
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScoreStore>,
}

impl AppState {
    pub fn new(store: impl ScoreStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
