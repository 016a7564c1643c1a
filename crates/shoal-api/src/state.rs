use std::sync::Arc;

use shoal_ai::Assistant;
use shoal_store::Store;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
    pub assistant: Assistant,
}
