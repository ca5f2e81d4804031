//! Application state for the timesheet API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{InMemoryStore, TimesheetStore};

/// Shared application state.
///
/// Holds the loaded configuration and the persistence backend.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn TimesheetStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, store: Arc<dyn TimesheetStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Creates a state backed by an empty [`InMemoryStore`].
    pub fn in_memory(config: ConfigLoader) -> Self {
        Self::new(config, Arc::new(InMemoryStore::new()))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the persistence backend.
    pub fn store(&self) -> &dyn TimesheetStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_store() {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        let state = AppState::in_memory(config);
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.store, &clone.store));
        assert_eq!(clone.store().backend_tag(), "memory");
    }
}
