// ============================================================================
// STORAGE - Abstracción clave/valor sobre localStorage
// ============================================================================
// Los services de sesión no tocan web_sys directamente: pasan por este
// trait, así la lógica se testea con un backend en memoria y el backend
// real se inyecta en el borde de la app (ver hooks/use_guest_session.rs).
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{window, Storage};

/// Interfaz mínima de almacenamiento clave/valor
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Backend real: localStorage del navegador
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn local_storage(&self) -> Option<Storage> {
        window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self
            .local_storage()
            .ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = self
            .local_storage()
            .ok_or("No se pudo acceder a localStorage")?;
        storage
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())?;
        Ok(())
    }
}

/// Backend en memoria - para tests y como modo degradado
/// (no sobrevive al reload, igual que localStorage bloqueado)
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);

        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k"), Some("v".to_string()));

        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k"), Some("v2".to_string()));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn memory_storage_remove_missing_key_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("nunca_existio").is_ok());
    }
}
