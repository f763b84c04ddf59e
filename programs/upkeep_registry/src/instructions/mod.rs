mod get_active_upkeep_count;
mod initialize;
mod register_upkeep;

pub use get_active_upkeep_count::*;
pub use initialize::*;
pub use register_upkeep::*;
