mod app;
mod message_selector;
mod onboarding_form;
mod profile_status;
mod toast;

pub use app::App;
pub use message_selector::MessageSelector;
pub use onboarding_form::OnboardingForm;
pub use profile_status::ProfileStatus;
pub use toast::Toast;
