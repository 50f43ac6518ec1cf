pub mod api_client;
pub mod guest_session_service;

pub use api_client::ApiClient;
pub use guest_session_service::GuestSessionService;
