// ============================================================================
// APP - Shell de Opener Studio
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{MessageSelector, OnboardingForm, ProfileStatus, Toast};
use crate::hooks::{GuestSessionProvider, UseGuestSessionHandle};
use crate::models::sync::GenerateMessagesRequest;
use crate::services::ApiClient;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <GuestSessionProvider>
            <StudioShell />
        </GuestSessionProvider>
    }
}

#[function_component(StudioShell)]
fn studio_shell() -> Html {
    let session = match use_context::<UseGuestSessionHandle>() {
        Some(session) => session,
        None => return html! {},
    };
    let data = (*session.state).clone();
    let generating = use_state(|| false);

    // Generar las tres variantes (habilitado solo con perfil + contacto)
    let on_generate = {
        let session = session.clone();
        let generating = generating.clone();
        Callback::from(move |_| {
            let data = (*session.state).clone();
            if !data.is_message_generation_unlocked() {
                log::warn!("⚠️ Generación bloqueada: falta perfil o contacto");
                return;
            }

            let (profile, summary, contact) = match (
                data.user_profile.clone(),
                data.user_summary.clone(),
                data.guest_contact.clone(),
            ) {
                (Some(profile), Some(summary), Some(contact)) => (profile, summary, contact),
                _ => return,
            };

            let request = GenerateMessagesRequest {
                session_id: data.session_id.clone(),
                user_profile: profile,
                user_summary: summary,
                guest_contact: contact,
            };

            let update_generated_messages = session.update_generated_messages.clone();
            let generating = generating.clone();
            generating.set(true);

            spawn_local(async move {
                match ApiClient::new().generate_messages(&request).await {
                    Ok(messages) => {
                        log::info!("✅ Mensajes generados");
                        update_generated_messages.emit(messages);
                    }
                    Err(e) => {
                        log::error!("❌ Error generando mensajes: {}", e);
                    }
                }
                generating.set(false);
            });
        })
    };

    // Limpiar sesión de invitado (camino de conversión a cuenta)
    let on_clear = {
        let clear_session = session.clear_session.clone();
        Callback::from(move |_| {
            clear_session.emit(());
        })
    };

    let on_dismiss_toast = {
        let sync_error = session.sync_error.clone();
        Callback::from(move |_| {
            sync_error.set(None);
        })
    };

    let generate_label = if *generating {
        "Generando..."
    } else {
        "Generar mensajes"
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"✉️ Opener Studio"}</h1>
                <button class="clear-session" onclick={on_clear}>
                    {"Empezar de nuevo"}
                </button>
            </header>

            <main class="app-main">
                <ProfileStatus />
                <OnboardingForm />

                <div class="generate-section">
                    <button
                        class="generate-button"
                        onclick={on_generate}
                        disabled={!data.is_message_generation_unlocked() || *generating}
                    >
                        {generate_label}
                    </button>
                </div>

                <MessageSelector />
            </main>

            <Toast message={(*session.sync_error).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
