mod admin;
mod approve;
mod cancel;
mod register;
pub mod registry_accounts;
mod views;

pub use admin::*;
pub use approve::*;
pub use cancel::*;
pub use register::*;
pub use registry_accounts::*;
pub use views::*;
