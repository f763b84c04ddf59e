mod intake;
mod on_token_transfer;
mod register_upkeep;

pub use intake::*;
pub use on_token_transfer::*;
pub use register_upkeep::*;
