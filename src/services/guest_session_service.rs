// ============================================================================
// GUEST SESSION SERVICE - Autoridad única de persistencia del invitado
// ============================================================================
// Todo acceso a las claves de invitado en storage pasa por aquí.
// Una instancia por árbol de provider, inyectada (sin global de módulo).
// Limitación conocida: escrituras concurrentes entre pestañas se resuelven
// por last-write-wins del storage (uso single-tab por producto).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

use crate::models::guest_session::{GuestSessionData, SelectedMessageRecord};
use crate::utils::constants::{GUEST_SELECTED_MESSAGE_KEY, GUEST_SESSION_ID_KEY};
use crate::utils::storage::KeyValueStorage;

/// Identidad anónima durable: exactamente un id por navegador.
/// Si localStorage está bloqueado el id vive solo en memoria
/// (modo degradado: no sobrevive al reload, nunca un error).
pub struct SessionIdentityStore {
    storage: Rc<dyn KeyValueStorage>,
    cached_id: RefCell<Option<String>>,
}

impl SessionIdentityStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            cached_id: RefCell::new(None),
        }
    }

    /// Devuelve el id existente o acuña uno nuevo (idempotente)
    pub fn get_session_id(&self) -> String {
        if let Some(id) = self.cached_id.borrow().clone() {
            return id;
        }

        if let Some(id) = self.storage.get(GUEST_SESSION_ID_KEY) {
            *self.cached_id.borrow_mut() = Some(id.clone());
            return id;
        }

        let id = Uuid::new_v4().to_string();
        if let Err(e) = self.storage.set(GUEST_SESSION_ID_KEY, &id) {
            log::warn!("⚠️ No se pudo persistir el session id ({}), queda solo en memoria", e);
        } else {
            log::info!("🆕 Sesión de invitado creada: {}", id);
        }

        *self.cached_id.borrow_mut() = Some(id.clone());
        id
    }

    /// Elimina el id persistido y su registro de selección dependiente.
    /// El próximo get_session_id() acuña un id nuevo.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(GUEST_SESSION_ID_KEY) {
            log::warn!("⚠️ Error eliminando session id: {}", e);
        }
        if let Err(e) = self.storage.remove(GUEST_SELECTED_MESSAGE_KEY) {
            log::warn!("⚠️ Error eliminando selección persistida: {}", e);
        }
        *self.cached_id.borrow_mut() = None;
    }
}

/// Manager de sesión de invitado: id + selección persistida
pub struct GuestSessionService {
    identity: SessionIdentityStore,
    storage: Rc<dyn KeyValueStorage>,
}

impl GuestSessionService {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            identity: SessionIdentityStore::new(storage.clone()),
            storage,
        }
    }

    pub fn get_session_id(&self) -> String {
        self.identity.get_session_id()
    }

    /// Lee la selección persistida. None si falta, no parsea, o pertenece
    /// a una sesión anterior (guard de sesión: se descarta en silencio).
    pub fn get_selected_message(&self) -> Option<SelectedMessageRecord> {
        let json = self.storage.get(GUEST_SELECTED_MESSAGE_KEY)?;

        let record = match serde_json::from_str::<SelectedMessageRecord>(&json) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("⚠️ Selección persistida corrupta, se descarta: {}", e);
                return None;
            }
        };

        if record.session_id != self.get_session_id() {
            log::info!("ℹ️ Selección de una sesión previa, se ignora");
            return None;
        }

        Some(record)
    }

    /// Escribe { message, version, sessionId } como un solo registro,
    /// pisando cualquier selección anterior.
    pub fn set_selected_message(&self, message: &str, version: &str) {
        let record = SelectedMessageRecord {
            message: message.to_string(),
            version: version.to_string(),
            session_id: self.get_session_id(),
        };

        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(e) = self.storage.set(GUEST_SELECTED_MESSAGE_KEY, &json) {
                    log::error!("❌ Error guardando selección: {}", e);
                } else {
                    log::info!("💾 Selección guardada: {}", record.version);
                }
            }
            Err(e) => {
                log::error!("❌ Error serializando selección: {}", e);
            }
        }
    }

    /// Limpia id y selección (conversión a cuenta completa)
    pub fn clear_session(&self) {
        self.identity.clear();
        log::info!("🗑️ Sesión de invitado limpiada");
    }

    /// Agregado de id + selección sobreviviente (lo único que
    /// se reconstruye de storage al cargar la página)
    pub fn get_session_data(&self) -> GuestSessionData {
        let mut data = GuestSessionData::new(self.get_session_id());

        if let Some(record) = self.get_selected_message() {
            data.selected_message = Some(record.message);
            data.selected_version = Some(record.version);
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    /// Backend cuyo set falla siempre: simula localStorage bloqueado
    struct BlockedStorage;

    impl KeyValueStorage for BlockedStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("storage bloqueado".to_string())
        }
        fn remove(&self, _key: &str) -> Result<(), String> {
            Err("storage bloqueado".to_string())
        }
    }

    fn service_with_memory() -> (GuestSessionService, Rc<MemoryStorage>) {
        let storage = Rc::new(MemoryStorage::new());
        let service = GuestSessionService::new(storage.clone());
        (service, storage)
    }

    #[test]
    fn session_id_is_idempotent() {
        let (service, _storage) = service_with_memory();

        let first = service.get_session_id();
        let second = service.get_session_id();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn session_id_survives_new_service_over_same_storage() {
        let storage = Rc::new(MemoryStorage::new());

        let first = GuestSessionService::new(storage.clone()).get_session_id();
        // Nueva instancia = nuevo page load sobre el mismo storage
        let second = GuestSessionService::new(storage.clone()).get_session_id();

        assert_eq!(first, second);
    }

    #[test]
    fn clear_then_recreate_yields_new_id() {
        let (service, _storage) = service_with_memory();

        let before = service.get_session_id();
        service.clear_session();
        let after = service.get_session_id();

        assert_ne!(before, after);
    }

    #[test]
    fn selection_roundtrip_within_session() {
        let (service, _storage) = service_with_memory();
        service.set_selected_message("Hi there", "Version 2");

        let record = service.get_selected_message().unwrap();
        assert_eq!(record.message, "Hi there");
        assert_eq!(record.version, "Version 2");
        assert_eq!(record.session_id, service.get_session_id());
    }

    #[test]
    fn selection_overwrites_previous_record() {
        let (service, _storage) = service_with_memory();
        service.set_selected_message("primero", "Version 1");
        service.set_selected_message("segundo", "Version 3");

        let record = service.get_selected_message().unwrap();
        assert_eq!(record.message, "segundo");
        assert_eq!(record.version, "Version 3");
    }

    #[test]
    fn stale_session_selection_is_discarded() {
        let storage = Rc::new(MemoryStorage::new());

        // Sesión A guarda una selección
        let service_a = GuestSessionService::new(storage.clone());
        service_a.set_selected_message("de la sesión A", "Version 1");
        service_a.clear_session();

        // clear_session() borró también la selección
        let service_b = GuestSessionService::new(storage.clone());
        assert!(service_b.get_selected_message().is_none());

        // Aún si quedara un registro huérfano de A, el guard lo descarta
        let orphan = SelectedMessageRecord {
            message: "huérfano".to_string(),
            version: "Version 2".to_string(),
            session_id: "otra-sesion".to_string(),
        };
        storage
            .set(
                GUEST_SELECTED_MESSAGE_KEY,
                &serde_json::to_string(&orphan).unwrap(),
            )
            .unwrap();

        assert!(service_b.get_selected_message().is_none());
    }

    #[test]
    fn malformed_selection_record_reads_as_none() {
        let (service, storage) = service_with_memory();
        storage
            .set(GUEST_SELECTED_MESSAGE_KEY, "esto no es json {{{")
            .unwrap();

        assert!(service.get_selected_message().is_none());
    }

    #[test]
    fn missing_selection_reads_as_none() {
        let (service, _storage) = service_with_memory();
        assert!(service.get_selected_message().is_none());
    }

    #[test]
    fn session_data_aggregates_id_and_selection() {
        let (service, _storage) = service_with_memory();
        service.set_selected_message("Hola", "Version 2");

        let data = service.get_session_data();
        assert_eq!(data.session_id, service.get_session_id());
        assert_eq!(data.selected_message.as_deref(), Some("Hola"));
        assert_eq!(data.selected_version.as_deref(), Some("Version 2"));
        // Nada más sobrevive al reload
        assert!(data.user_profile.is_none());
        assert!(data.guest_contact.is_none());
        assert!(data.generated_messages.is_none());
    }

    #[test]
    fn blocked_storage_still_yields_stable_in_memory_id() {
        let service = GuestSessionService::new(Rc::new(BlockedStorage));

        // Modo degradado: el id existe igual y es estable dentro del proceso
        let first = service.get_session_id();
        let second = service.get_session_id();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn blocked_storage_clear_does_not_panic() {
        let service = GuestSessionService::new(Rc::new(BlockedStorage));
        let before = service.get_session_id();

        service.clear_session();
        let after = service.get_session_id();

        // El clear descarta el cache aunque el remove falle
        assert_ne!(before, after);
    }

    #[test]
    fn local_selection_is_kept_regardless_of_remote_outcome() {
        // El commit local es previo e independiente del espejo remoto:
        // la selección queda persistida aunque el sync luego falle.
        let (service, _storage) = service_with_memory();
        service.set_selected_message("X", "Version 3");

        let record = service.get_selected_message().unwrap();
        assert_eq!(record.message, "X");
        assert_eq!(record.version, "Version 3");
    }
}
