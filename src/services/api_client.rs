// ============================================================================
// API CLIENT - Funciones serverless (generación y selección)
// ============================================================================

use gloo_net::http::Request;

use crate::models::guest_session::GeneratedMessages;
use crate::models::sync::{
    GenerateMessagesRequest, GenerateMessagesResponse, SaveSelectionRequest,
    SaveSelectionResponse,
};
use crate::utils::constants::FUNCTIONS_URL;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: FUNCTIONS_URL.to_string(),
        }
    }

    /// Registra en remoto la variante elegida. Best-effort: el caller no
    /// revierte estado local si esto falla, y no hay reintentos.
    pub async fn save_message_selection(
        &self,
        request: &SaveSelectionRequest,
    ) -> Result<(), String> {
        let url = format!("{}/save-message-selection", self.base_url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP {}: {}", status, error_text));
        }

        let body = response
            .json::<SaveSelectionResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if body.success {
            Ok(())
        } else {
            Err(body
                .error
                .unwrap_or_else(|| "Error guardando selección".to_string()))
        }
    }

    /// Genera las tres variantes de mensaje para el contacto actual
    pub async fn generate_messages(
        &self,
        request: &GenerateMessagesRequest,
    ) -> Result<GeneratedMessages, String> {
        let url = format!("{}/generate-messages", self.base_url);

        log::info!("✨ Generando mensajes para la sesión {}", request.session_id);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP {}: {}", status, error_text));
        }

        let body = response
            .json::<GenerateMessagesResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if !body.success {
            return Err(body
                .error
                .unwrap_or_else(|| "Error generando mensajes".to_string()));
        }

        body.messages
            .ok_or_else(|| "No se recibieron mensajes en la respuesta".to_string())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
