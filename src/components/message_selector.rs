// ============================================================================
// MESSAGE SELECTOR - Las tres variantes generadas
// ============================================================================

use yew::prelude::*;

use crate::hooks::UseGuestSessionHandle;
use crate::models::guest_session::{VERSION_1, VERSION_2, VERSION_3};

#[function_component(MessageSelector)]
pub fn message_selector() -> Html {
    let session = match use_context::<UseGuestSessionHandle>() {
        Some(session) => session,
        None => return html! {},
    };
    let data = (*session.state).clone();

    let messages = match data.generated_messages.clone() {
        Some(messages) => messages,
        None => {
            return html! {
                <div class="message-selector empty">
                    {"Aún no hay mensajes generados"}
                </div>
            }
        }
    };

    let variants = [
        (VERSION_1, messages.version1.clone()),
        (VERSION_2, messages.version2.clone()),
        (VERSION_3, messages.version3.clone()),
    ];

    html! {
        <div class="message-selector">
            { for variants.into_iter().map(|(label, text)| {
                let is_selected = data.selected_version.as_deref() == Some(label);
                let class = if is_selected {
                    "message-card selected"
                } else {
                    "message-card"
                };

                let onclick = {
                    let select_message = session.select_message.clone();
                    let text = text.clone();
                    Callback::from(move |_| {
                        select_message.emit((text.clone(), label.to_string()));
                    })
                };

                html! {
                    <div class={class} onclick={onclick}>
                        <div class="message-card-header">
                            <span class="message-version">{label}</span>
                            if is_selected {
                                <span class="message-selected-badge">{"✅"}</span>
                            }
                        </div>
                        <p class="message-text">{text}</p>
                    </div>
                }
            }) }
        </div>
    }
}
