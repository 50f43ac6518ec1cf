pub mod guest_session;
pub mod sync;

pub use guest_session::{GeneratedMessages, GuestSessionData, SelectedMessageRecord};
pub use sync::{GenerateMessagesRequest, GenerateMessagesResponse, SaveSelectionRequest, SaveSelectionResponse};
