use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use super::KeyValueStore;
use crate::utils::errors::{AppError, AppResult};

/// Store en memoria.
///
/// Sustituto del almacenamiento persistente para tests y ejecuciones efímeras.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de claves almacenadas
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> AppError {
    AppError::Store("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        let value = entries.get(key).cloned();
        debug!("📥 MemoryStore GET {} (hit: {})", key, value.is_some());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        debug!("💾 MemoryStore SET {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        debug!("🗑️ MemoryStore DELETE {}", key);
        Ok(())
    }

    fn contains(&self, key: &str) -> AppResult<bool> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.contains_key(key))
    }

    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<&str>) -> AppResult<Option<String>>,
    ) -> AppResult<()> {
        // El write lock se mantiene durante toda la operación
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        if let Some(value) = f(entries.get(key).map(String::as_str))? {
            debug!("💾 MemoryStore UPDATE {} ({} bytes)", key, value.len());
            entries.insert(key.to_string(), value);
        }
        Ok(())
    }
}
