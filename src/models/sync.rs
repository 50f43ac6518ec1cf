use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::guest_session::GeneratedMessages;

// ============================================================================
// TIPOS DE WIRE - Funciones serverless
// ============================================================================

/// Request a save-message-selection: registra en remoto qué variante
/// eligió el invitado. El backend desmarca las filas previas de la sesión
/// y marca exactamente una (la más reciente que matchee).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveSelectionRequest {
    pub session_id: String,
    pub selected_message: String,
    pub selected_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_contact_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SaveSelectionResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request a generate-messages: los payloads van opacos, la función
/// arma el prompt del lado del servidor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessagesRequest {
    pub session_id: String,
    pub user_profile: Value,
    pub user_summary: Value,
    pub guest_contact: Value,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GenerateMessagesResponse {
    pub success: bool,
    #[serde(default)]
    pub messages: Option<GeneratedMessages>,
    #[serde(default)]
    pub error: Option<String>,
}
