//! Store clave-valor
//!
//! Este módulo contiene la abstracción del almacenamiento local síncrono
//! (el equivalente del `localStorage` del navegador) y sus implementaciones.

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::utils::errors::AppResult;

/// Slot de los motoristas
pub const DRIVERS_KEY: &str = "logistics_drivers";
/// Slot de las rotas
pub const ROUTES_KEY: &str = "logistics_routes";
/// Slot de las entregas
pub const DELIVERIES_KEY: &str = "logistics_deliveries";

/// Operaciones del store: blobs de texto indexados por clave.
///
/// Todas las operaciones son síncronas. Un fallo de acceso se propaga como
/// `AppError::Store`; no hay persistencia alternativa.
pub trait KeyValueStore: Send + Sync {
    /// Leer el valor de una clave, `None` si la clave no existe
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Escribir (o sobrescribir) el valor de una clave
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Eliminar una clave; eliminar una clave inexistente no es un error
    fn remove(&self, key: &str) -> AppResult<()>;

    /// Verificar si la clave existe
    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Lectura-modificación-escritura atómica sobre una clave.
    ///
    /// `f` recibe el valor actual y devuelve el nuevo valor, o `None` para
    /// dejar la clave como está. Ninguna otra operación sobre la misma clave
    /// de este store se intercala entre la lectura y la escritura.
    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<&str>) -> AppResult<Option<String>>,
    ) -> AppResult<()>;
}
