mod input;
mod modal;
mod selector;

pub use input::Input;
pub use modal::Modal;
pub use selector::Selector;
