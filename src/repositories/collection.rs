//! Colección JSON sobre el store
//!
//! Cada colección es un array JSON guardado bajo una única clave. Todas las
//! operaciones son lectura completa, transformación en memoria y escritura
//! completa. Las modificaciones pasan por `KeyValueStore::update`, así que dos
//! colecciones sobre la misma clave y el mismo store no pierden escrituras.

use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

use crate::store::KeyValueStore;
use crate::utils::errors::{AppError, AppResult};

/// Registro persistible con id estable
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Nombre del recurso para mensajes y logs
    const RESOURCE: &'static str;

    fn id(&self) -> &str;
}

pub struct JsonCollection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> JsonCollection<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    fn parse(raw: Option<&str>) -> AppResult<Vec<T>> {
        match raw {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Todos los registros en orden de inserción; una clave ausente es una colección vacía
    pub fn load(&self) -> AppResult<Vec<T>> {
        Self::parse(self.store.get(self.key)?.as_deref())
    }

    /// Reemplazar la colección completa
    pub fn save(&self, records: &[T]) -> AppResult<()> {
        self.store.set(self.key, &serde_json::to_string(records)?)?;
        debug!("💾 {} registros de {} guardados", records.len(), T::RESOURCE);
        Ok(())
    }

    pub fn find(&self, id: &str) -> AppResult<Option<T>> {
        Ok(self.load()?.into_iter().find(|r| r.id() == id))
    }

    /// Lectura-modificación-escritura indivisible.
    ///
    /// El closure devuelve el resultado y si la colección cambió; sólo se
    /// reescribe el store cuando cambió.
    pub fn modify<R>(&self, f: impl FnOnce(&mut Vec<T>) -> (R, bool)) -> AppResult<R> {
        let mut f = Some(f);
        let mut result = None;

        self.store.update(self.key, &mut |raw| {
            let mut records = Self::parse(raw)?;
            let Some(f) = f.take() else {
                return Ok(None);
            };
            let (value, changed) = f(&mut records);
            result = Some(value);
            if !changed {
                return Ok(None);
            }
            debug!("💾 {} registros de {} guardados", records.len(), T::RESOURCE);
            Ok(Some(serde_json::to_string(&records)?))
        })?;

        result.ok_or_else(|| {
            AppError::Store(format!("collection '{}' update did not run", self.key))
        })
    }

    pub fn insert(&self, record: T) -> AppResult<T> {
        self.modify(|records| {
            records.push(record.clone());
            (record, true)
        })
    }

    /// Aplicar `f` al registro con `id`; `None` si no existe
    pub fn update_by_id(&self, id: &str, f: impl FnOnce(&mut T)) -> AppResult<Option<T>> {
        self.modify(|records| match records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                f(record);
                (Some(record.clone()), true)
            }
            None => (None, false),
        })
    }

    /// Eliminar el registro con `id`; `false` si no existía
    pub fn remove_by_id(&self, id: &str) -> AppResult<bool> {
        self.modify(|records| {
            let before = records.len();
            records.retain(|r| r.id() != id);
            let removed = records.len() != before;
            (removed, removed)
        })
    }
}
