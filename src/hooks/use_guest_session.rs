// ============================================================================
// USE GUEST SESSION HOOK - Fachada reactiva sobre GuestSessionService
// ============================================================================
// Dueño de la copia en memoria de GuestSessionData durante la vida de la
// página. Política de selección: commit local optimista (storage síncrono
// antes de retornar), espejo remoto best-effort después, sin rollback.
// ============================================================================

use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::guest_session::{GeneratedMessages, GuestSessionData, VERSION_1};
use crate::models::sync::SaveSelectionRequest;
use crate::services::{ApiClient, GuestSessionService};
use crate::utils::constants::{GUEST_SELECTED_MESSAGE_KEY, GUEST_SESSION_ID_KEY};
use crate::utils::storage::{KeyValueStorage, LocalStorageBackend};

#[derive(Clone, PartialEq)]
pub struct UseGuestSessionHandle {
    pub state: UseStateHandle<GuestSessionData>,
    /// Error transitorio del espejo remoto (para el toast no bloqueante)
    pub sync_error: UseStateHandle<Option<String>>,
    pub update_user_profile: Callback<(Value, Value)>,
    pub update_guest_contact: Callback<Value>,
    pub update_generated_messages: Callback<GeneratedMessages>,
    pub select_message: Callback<(String, String)>,
    pub clear_session: Callback<()>,
}

#[hook]
pub fn use_guest_session() -> UseGuestSessionHandle {
    // Una sola instancia de servicio por árbol de provider, inyectada
    // con el backend real de localStorage en este borde de la app
    let service = use_memo((), |_| {
        GuestSessionService::new(Rc::new(LocalStorageBackend) as Rc<dyn KeyValueStorage>)
    });
    let api_client = use_memo((), |_| ApiClient::new());

    let state = {
        let service = service.clone();
        use_state(move || service.get_session_data())
    };
    let sync_error = use_state(|| None::<String>);

    // Actualizar perfil + resumen (solo memoria, pisa valores previos)
    let update_user_profile = {
        let state = state.clone();
        Callback::from(move |(profile, summary): (Value, Value)| {
            let mut new_state = (*state).clone();
            new_state.user_profile = Some(profile);
            new_state.user_summary = Some(summary);
            state.set(new_state);
        })
    };

    // Actualizar contacto de invitado (solo memoria)
    let update_guest_contact = {
        let state = state.clone();
        Callback::from(move |contact: Value| {
            let mut new_state = (*state).clone();
            new_state.guest_contact = Some(contact);
            state.set(new_state);
        })
    };

    // Recibir las tres variantes generadas. La selección por defecto
    // (version1) se persiste ANTES de tocar memoria: un reload inmediato
    // ya refleja "Version 1".
    let update_generated_messages = {
        let state = state.clone();
        let service = service.clone();
        Callback::from(move |messages: GeneratedMessages| {
            service.set_selected_message(&messages.version1, VERSION_1);

            let mut new_state = (*state).clone();
            new_state.set_generated_messages(messages);
            state.set(new_state);
        })
    };

    // Seleccionar variante: storage primero, memoria después, y recién
    // entonces el espejo remoto. Si el remoto falla no hay rollback:
    // se loguea y se muestra el toast.
    let select_message = {
        let state = state.clone();
        let service = service.clone();
        let api_client = api_client.clone();
        let sync_error = sync_error.clone();
        Callback::from(move |(message, version): (String, String)| {
            service.set_selected_message(&message, &version);

            let mut new_state = (*state).clone();
            new_state.set_selection(message.clone(), version.clone());

            let request = SaveSelectionRequest {
                session_id: new_state.session_id.clone(),
                selected_message: message,
                selected_version: version,
                guest_contact_id: new_state.guest_contact_id(),
            };
            state.set(new_state);

            let api_client = api_client.clone();
            let sync_error = sync_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client.save_message_selection(&request).await {
                    Ok(()) => {
                        log::info!("✅ Selección sincronizada: {}", request.selected_version);
                    }
                    Err(e) => {
                        log::error!("❌ Error sincronizando selección: {}", e);
                        sync_error.set(Some(
                            "No se pudo guardar la selección del mensaje".to_string(),
                        ));
                    }
                }
            });
        })
    };

    // Limpiar sesión (conversión a cuenta completa). Se re-lee el servicio
    // de inmediato, que acuña un id nuevo: nunca queda un session_id vacío.
    let clear_session = {
        let state = state.clone();
        let service = service.clone();
        let sync_error = sync_error.clone();
        Callback::from(move |_| {
            service.clear_session();
            state.set(service.get_session_data());
            sync_error.set(None);
        })
    };

    // Reactividad cross-tab: si otra pestaña toca las claves de invitado,
    // re-leer id + selección. Perfil/contacto/mensajes nunca se persisten,
    // así que se conservan tal cual.
    {
        let state = state.clone();
        let service = service.clone();
        use_effect_with((), move |_| {
            let callback = Closure::wrap(Box::new(move |event: web_sys::StorageEvent| {
                let key = match event.key() {
                    Some(key) => key,
                    None => return,
                };
                if key != GUEST_SESSION_ID_KEY && key != GUEST_SELECTED_MESSAGE_KEY {
                    return;
                }

                let fresh = service.get_session_data();
                let mut new_state = (*state).clone();
                new_state.session_id = fresh.session_id;
                new_state.selected_message = fresh.selected_message;
                new_state.selected_version = fresh.selected_version;
                state.set(new_state);
            }) as Box<dyn FnMut(web_sys::StorageEvent)>);

            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    "storage",
                    callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                callback.forget();
            }
        });
    }

    UseGuestSessionHandle {
        state,
        sync_error,
        update_user_profile,
        update_guest_contact,
        update_generated_messages,
        select_message,
        clear_session,
    }
}
