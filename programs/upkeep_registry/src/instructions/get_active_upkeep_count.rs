use anchor_lang::prelude::*;

use crate::state::RegistryState;

pub fn get_active_upkeep_count(ctx: Context<GetActiveUpkeepCount>) -> Result<u64> {
    Ok(ctx.accounts.registry_state.num_upkeeps)
}

#[derive(Accounts)]
pub struct GetActiveUpkeepCount<'info> {
    #[account(seeds = [RegistryState::PREFIX_SEED], bump = registry_state.bump)]
    pub registry_state: Account<'info, RegistryState>,
}
