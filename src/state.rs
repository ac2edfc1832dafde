use crate::store::HabitStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle the handlers clone; the single mutex serializes every
/// operation against the one habit collection.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<HabitStore>>,
}

impl AppState {
    pub fn new(store: HabitStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
