// ============================================================================
// PROFILE STATUS - Indicador de progreso del invitado
// ============================================================================

use yew::prelude::*;

use crate::hooks::UseGuestSessionHandle;

/// Muestra los flags de completitud derivados del estado en memoria
#[function_component(ProfileStatus)]
pub fn profile_status() -> Html {
    let session = match use_context::<UseGuestSessionHandle>() {
        Some(session) => session,
        None => return html! {},
    };
    let data = (*session.state).clone();

    let step = |done: bool, label: &str| -> Html {
        let icon = if done { "✅" } else { "⏳" };
        let class = if done { "status-step done" } else { "status-step" };
        html! {
            <div class={class}>
                <span class="status-icon">{icon}</span>
                <span class="status-text">{label.to_string()}</span>
            </div>
        }
    };

    let (unlock_icon, unlock_text, unlock_class) = if data.is_message_generation_unlocked() {
        ("🔓", "Generación de mensajes desbloqueada", "status-unlock unlocked")
    } else {
        ("🔒", "Completa perfil y contacto para generar", "status-unlock locked")
    };

    html! {
        <div class="profile-status">
            { step(data.is_profile_complete(), "Perfil profesional") }
            { step(data.is_contact_complete(), "Contacto objetivo") }
            <div class={unlock_class}>
                <span class="status-icon">{unlock_icon}</span>
                <span class="status-text">{unlock_text}</span>
            </div>
        </div>
    }
}
