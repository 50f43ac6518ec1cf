// ============================================================================
// ONBOARDING FORM - Perfil profesional + contacto objetivo
// ============================================================================
// Los payloads viajan como JSON opaco hacia el estado de sesión:
// al core solo le importa su presencia, no su forma.
// ============================================================================

use serde_json::json;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::UseGuestSessionHandle;

#[function_component(OnboardingForm)]
pub fn onboarding_form() -> Html {
    let session = match use_context::<UseGuestSessionHandle>() {
        Some(session) => session,
        None => return html! {},
    };

    let name_ref = use_node_ref();
    let role_ref = use_node_ref();
    let summary_ref = use_node_ref();
    let contact_name_ref = use_node_ref();
    let contact_company_ref = use_node_ref();

    let on_save_profile = {
        let name_ref = name_ref.clone();
        let role_ref = role_ref.clone();
        let summary_ref = summary_ref.clone();
        let update_user_profile = session.update_user_profile.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name_input), Some(role_input), Some(summary_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                role_ref.cast::<HtmlInputElement>(),
                summary_ref.cast::<HtmlTextAreaElement>(),
            ) {
                let name = name_input.value();
                let role = role_input.value();
                let summary = summary_input.value();

                if name.is_empty() || role.is_empty() || summary.is_empty() {
                    log::warn!("⚠️ Perfil incompleto, faltan campos");
                    return;
                }

                let profile = json!({ "name": name, "role": role });
                let summary = json!({ "text": summary });
                update_user_profile.emit((profile, summary));
                log::info!("📝 Perfil de invitado actualizado");
            }
        })
    };

    let on_save_contact = {
        let contact_name_ref = contact_name_ref.clone();
        let contact_company_ref = contact_company_ref.clone();
        let update_guest_contact = session.update_guest_contact.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name_input), Some(company_input)) = (
                contact_name_ref.cast::<HtmlInputElement>(),
                contact_company_ref.cast::<HtmlInputElement>(),
            ) {
                let name = name_input.value();
                let company = company_input.value();

                if name.is_empty() || company.is_empty() {
                    log::warn!("⚠️ Contacto incompleto, faltan campos");
                    return;
                }

                update_guest_contact.emit(json!({ "name": name, "company": company }));
                log::info!("👤 Contacto objetivo actualizado");
            }
        })
    };

    html! {
        <div class="onboarding-form">
            <form class="profile-form" onsubmit={on_save_profile}>
                <h2>{"Tu perfil"}</h2>
                <input ref={name_ref} type="text" placeholder="Nombre" />
                <input ref={role_ref} type="text" placeholder="Rol actual" />
                <textarea ref={summary_ref} placeholder="Resumen profesional"></textarea>
                <button type="submit">{"Guardar perfil"}</button>
            </form>

            <form class="contact-form" onsubmit={on_save_contact}>
                <h2>{"Contacto objetivo"}</h2>
                <input ref={contact_name_ref} type="text" placeholder="Nombre del contacto" />
                <input ref={contact_company_ref} type="text" placeholder="Empresa" />
                <button type="submit">{"Guardar contacto"}</button>
            </form>
        </div>
    }
}
