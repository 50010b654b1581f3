mod auth_modal;
mod log_in_form;
mod password_warning;
mod sign_up_form;

pub use auth_modal::AuthModal;
pub use log_in_form::LogInForm;
pub use password_warning::PasswordWarning;
pub use sign_up_form::{sign_up_submit, submit_sign_up, HintLatch, SignUpForm, SubmitOutcome};
