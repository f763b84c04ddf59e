mod auto_approve_allowlist;
mod config;
mod pending_request;
mod registration;

pub use auto_approve_allowlist::*;
pub use config::*;
pub use pending_request::*;
pub use registration::*;
