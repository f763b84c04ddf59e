use anchor_lang::prelude::*;

declare_id!("ExM9ra9RXfQpvyQpq4WxEw31po1xM5bQ4JyMFk3z2Bd8");

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
pub use state::RegisteredUpkeep;

/// Minimal upkeep registry. Only the configured registrar may admit upkeeps.
#[program]
pub mod upkeep_registry {

    use super::*;

    pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        instructions::initialize(ctx, args)
    }

    /// Admit a fully specified upkeep and return its id plus forwarder address
    pub fn register_upkeep(
        ctx: Context<RegisterUpkeep>,
        args: RegisterUpkeepArgs,
    ) -> Result<RegisteredUpkeep> {
        instructions::register_upkeep(ctx, args)
    }

    pub fn get_active_upkeep_count(ctx: Context<GetActiveUpkeepCount>) -> Result<u64> {
        instructions::get_active_upkeep_count(ctx)
    }
}
