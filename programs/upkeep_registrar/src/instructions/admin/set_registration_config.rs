use anchor_lang::prelude::*;

use crate::{
    events::ConfigChanged,
    state::{Config, RegistrationConfigArgs},
};

/// Overwrite the registration settings. `approved_count` carries over, so a
/// new ceiling applies to admissions already granted.
pub fn set_registration_config(
    ctx: Context<SetRegistrationConfig>,
    args: RegistrationConfigArgs,
) -> Result<()> {
    ctx.accounts.config.apply(&args);

    ConfigChanged::emit_event(
        args.auto_approve_mode,
        args.auto_approve_max_allowed,
        args.registry,
        args.min_funding_amount,
    )
}

#[derive(Accounts)]
pub struct SetRegistrationConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::PREFIX_SEED],
        bump = config.bump,
        has_one = authority
    )]
    pub config: Box<Account<'info, Config>>,
}
