// ============================================================================
// TOAST - Notificación transitoria no bloqueante
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

/// Toast de error transitorio (p. ej. fallo del espejo remoto de selección).
/// Se auto-cierra; no bloquea ni ofrece retry.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |message| {
            let timeout = message
                .as_ref()
                .map(|_| Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(())));

            move || {
                if let Some(timeout) = timeout {
                    timeout.cancel();
                }
            }
        });
    }

    match &props.message {
        Some(text) => html! {
            <div class="toast toast-error">
                <span class="toast-icon">{"⚠️"}</span>
                <span class="toast-text">{text}</span>
            </div>
        },
        None => html! {},
    }
}
