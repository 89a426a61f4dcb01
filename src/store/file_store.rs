//! Store en disco
//!
//! Cada clave se guarda como `<dir>/<key>.json`. Las escrituras van a un
//! fichero temporal que luego se renombra, así que un lector nunca ve un
//! valor a medio escribir. Las escrituras sobre una misma clave se serializan
//! con un mutex por clave compartido por todos los clones del store.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use super::KeyValueStore;
use crate::utils::errors::{store_error, AppError, AppResult};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    key_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl FileStore {
    /// Abrir (y crear si hace falta) el directorio de datos
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| store_error("create directory", &dir.display().to_string(), e))?;
        info!("📂 FileStore abierto en {}", dir.display());
        Ok(Self {
            dir,
            key_locks: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::Store(format!("invalid store key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.key_locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.entry(key.to_string()).or_default().clone()
    }

    fn read_value(&self, key: &str, path: &Path) -> AppResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(value) => {
                debug!("📥 FileStore GET {} ({} bytes)", key, value.len());
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("❌ FileStore MISS {}", key);
                Ok(None)
            }
            Err(e) => Err(store_error("read", key, e)),
        }
    }

    fn write_value(&self, key: &str, path: &Path, value: &str) -> AppResult<()> {
        let tmp = path.with_extension("json.tmp");

        let result = fs::File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(value.as_bytes())?;
                file.sync_all()
            })
            .map_err(|e| store_error("write", key, e))
            .and_then(|_| fs::rename(&tmp, path).map_err(|e| store_error("commit", key, e)));

        if let Err(e) = result {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("⚠️ No se pudo eliminar {}: {}", tmp.display(), cleanup);
                }
            }
            return Err(e);
        }

        debug!("💾 FileStore SET {} ({} bytes)", key, value.len());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        self.read_value(key, &path)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let lock = self.key_lock(key);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        self.write_value(key, &path, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let lock = self.key_lock(key);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("🗑️ FileStore DELETE {}", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(store_error("delete", key, e)),
        }
    }

    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.path_for(key)?.is_file())
    }

    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<&str>) -> AppResult<Option<String>>,
    ) -> AppResult<()> {
        let path = self.path_for(key)?;
        let lock = self.key_lock(key);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        let current = self.read_value(key, &path)?;
        match f(current.as_deref())? {
            Some(value) => self.write_value(key, &path, &value),
            None => Ok(()),
        }
    }
}
