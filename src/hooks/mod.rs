pub mod guest_session_context;
pub mod use_guest_session;

pub use guest_session_context::GuestSessionProvider;
pub use use_guest_session::{use_guest_session, UseGuestSessionHandle};
