use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// MODELO DE SESIÓN DE INVITADO
// ============================================================================
// Solo session_id y la selección sobreviven al reload (persistidos por
// GuestSessionService); perfil, contacto y mensajes viven en memoria.
// ============================================================================

/// Etiquetas de versión de los mensajes generados
pub const VERSION_1: &str = "Version 1";
pub const VERSION_2: &str = "Version 2";
pub const VERSION_3: &str = "Version 3";

/// Las tres variantes de mensaje generadas por la función de IA.
/// Se escriben siempre como un solo objeto: o están las tres o ninguna.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedMessages {
    pub version1: String,
    pub version2: String,
    pub version3: String,
}

impl GeneratedMessages {
    /// Buscar el texto de una variante por su etiqueta
    pub fn by_label(&self, label: &str) -> Option<&str> {
        match label {
            VERSION_1 => Some(&self.version1),
            VERSION_2 => Some(&self.version2),
            VERSION_3 => Some(&self.version3),
            _ => None,
        }
    }
}

/// Registro persistido de selección, etiquetado con la sesión dueña
/// para descartar selecciones de una sesión anterior al leer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedMessageRecord {
    pub message: String,
    pub version: String,
    pub session_id: String,
}

/// Vista agregada del progreso del invitado durante la página actual
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuestSessionData {
    pub session_id: String,
    /// Payloads opacos del builder de perfil: importa su presencia, no su forma
    pub user_profile: Option<Value>,
    pub user_summary: Option<Value>,
    pub guest_contact: Option<Value>,
    pub generated_messages: Option<GeneratedMessages>,
    pub selected_message: Option<String>,
    pub selected_version: Option<String>,
}

impl GuestSessionData {
    pub fn new(session_id: String) -> Self {
        Self {
            session_id,
            ..Default::default()
        }
    }

    /// ¿Perfil completo? (perfil + resumen presentes)
    pub fn is_profile_complete(&self) -> bool {
        self.user_profile.is_some() && self.user_summary.is_some()
    }

    /// ¿Contacto completo?
    pub fn is_contact_complete(&self) -> bool {
        self.guest_contact.is_some()
    }

    /// ¿Se puede generar mensajes? (perfil + contacto completos)
    pub fn is_message_generation_unlocked(&self) -> bool {
        self.is_profile_complete() && self.is_contact_complete()
    }

    /// Fijar las tres variantes y auto-seleccionar version1 en el mismo
    /// update: nunca existe un estado con mensajes generados sin selección.
    pub fn set_generated_messages(&mut self, messages: GeneratedMessages) {
        self.selected_message = Some(messages.version1.clone());
        self.selected_version = Some(VERSION_1.to_string());
        self.generated_messages = Some(messages);
    }

    /// Fijar la selección actual (mensaje + etiqueta siempre juntos)
    pub fn set_selection(&mut self, message: String, version: String) {
        self.selected_message = Some(message);
        self.selected_version = Some(version);
    }

    /// Extraer el id del contacto de invitado, si el payload trae uno
    pub fn guest_contact_id(&self) -> Option<String> {
        self.guest_contact
            .as_ref()?
            .get("id")?
            .as_str()
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn readiness_flags_derivation() {
        let mut data = GuestSessionData::new("sess-1".to_string());
        assert!(!data.is_profile_complete());
        assert!(!data.is_message_generation_unlocked());

        data.user_profile = Some(json!({ "name": "Ana" }));
        data.user_summary = Some(json!({ "text": "Backend dev" }));
        assert!(data.is_profile_complete());
        // Sin contacto todavía no se desbloquea la generación
        assert!(!data.is_message_generation_unlocked());

        data.guest_contact = Some(json!({ "name": "Luc", "company": "Acme" }));
        assert!(data.is_contact_complete());
        assert!(data.is_message_generation_unlocked());
    }

    #[test]
    fn set_generated_messages_auto_selects_version1() {
        let mut data = GuestSessionData::new("sess-1".to_string());
        data.set_generated_messages(GeneratedMessages {
            version1: "A".to_string(),
            version2: "B".to_string(),
            version3: "C".to_string(),
        });

        assert_eq!(data.selected_message.as_deref(), Some("A"));
        assert_eq!(data.selected_version.as_deref(), Some(VERSION_1));
        assert!(data.generated_messages.is_some());
    }

    #[test]
    fn selection_fields_always_set_together() {
        let mut data = GuestSessionData::new("sess-1".to_string());
        data.set_selection("Hola".to_string(), VERSION_2.to_string());

        assert_eq!(data.selected_message.as_deref(), Some("Hola"));
        assert_eq!(data.selected_version.as_deref(), Some(VERSION_2));
    }

    #[test]
    fn by_label_resolves_known_versions() {
        let messages = GeneratedMessages {
            version1: "uno".to_string(),
            version2: "dos".to_string(),
            version3: "tres".to_string(),
        };

        assert_eq!(messages.by_label(VERSION_2), Some("dos"));
        assert_eq!(messages.by_label("Version 4"), None);
    }

    #[test]
    fn guest_contact_id_extraction() {
        let mut data = GuestSessionData::new("sess-1".to_string());
        assert_eq!(data.guest_contact_id(), None);

        data.guest_contact = Some(json!({ "name": "Luc" }));
        assert_eq!(data.guest_contact_id(), None);

        data.guest_contact = Some(json!({ "id": "contact-7", "name": "Luc" }));
        assert_eq!(data.guest_contact_id(), Some("contact-7".to_string()));
    }

    #[test]
    fn selected_record_persists_as_camel_case() {
        let record = SelectedMessageRecord {
            message: "Hola".to_string(),
            version: VERSION_1.to_string(),
            session_id: "sess-1".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"sessionId\":\"sess-1\""));

        let parsed: SelectedMessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
