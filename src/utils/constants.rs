/// URL base de las funciones serverless
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:54321/functions/v1 (por defecto)
/// - Producción: via FUNCTIONS_URL en .env (ver build.rs)
pub const FUNCTIONS_URL: &str = match option_env!("FUNCTIONS_URL") {
    Some(url) => url,
    None => "http://localhost:54321/functions/v1",
};

/// Clave de localStorage del id de sesión de invitado
pub const GUEST_SESSION_ID_KEY: &str = "opener_guest_session_id";

/// Clave de localStorage de la selección de mensaje del invitado
/// Valor: JSON { message, version, sessionId }
pub const GUEST_SELECTED_MESSAGE_KEY: &str = "opener_guest_selected_message";
