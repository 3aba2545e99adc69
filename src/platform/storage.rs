use web_sys::Storage;

use crate::error::GameError;
use crate::leaderboard::KeyValueStore;

// Reads behave as empty when storage is blocked.
#[derive(Clone, Default)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, scores will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        let storage = self.storage.as_ref().ok_or(GameError::StorageUnavailable)?;
        storage.set_item(key, value)?;
        Ok(())
    }
}
