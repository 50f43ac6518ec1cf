// ============================================================================
// GUEST SESSION CONTEXT - Compartir la sesión de invitado entre componentes
// ============================================================================
// Usa Context API de Yew: el provider envuelve la app y los componentes
// leen el handle con use_context::<UseGuestSessionHandle>().
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_guest_session::{use_guest_session, UseGuestSessionHandle};

/// Provider que crea el estado de sesión una sola vez y lo comparte
#[function_component(GuestSessionProvider)]
pub fn guest_session_provider(props: &GuestSessionProviderProps) -> Html {
    let session_handle = use_guest_session();

    html! {
        <ContextProvider<UseGuestSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseGuestSessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct GuestSessionProviderProps {
    pub children: Children,
}
