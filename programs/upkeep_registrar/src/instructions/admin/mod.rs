mod initialize;
mod ownership;
mod set_auto_approve_allowed_sender;
mod set_registration_config;

pub use initialize::*;
pub use ownership::*;
pub use set_auto_approve_allowed_sender::*;
pub use set_registration_config::*;
