// ============================================================================
// OPENER STUDIO - FRONTEND YEW (RUST PURO)
// ============================================================================
// - Models: estructuras compartidas con las funciones serverless
// - Services: persistencia local del invitado + clientes HTTP
// - Hooks: estado reactivo de sesión (Context API de Yew)
// - Components: shell, formularios y selector de mensajes
// ============================================================================

mod components;
mod hooks;
mod models;
mod services;
mod utils;

use components::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    log::info!("🚀 Opener Studio starting...");

    yew::Renderer::<App>::new().render();
}
