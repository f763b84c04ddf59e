use anchor_lang::prelude::*;

use crate::{
    events::AutoApproveAllowedSenderSet,
    state::{AutoApproveAllowlist, Config},
};

pub fn set_auto_approve_allowed_sender(
    ctx: Context<SetAutoApproveAllowedSender>,
    sender: Pubkey,
    allowed: bool,
) -> Result<()> {
    ctx.accounts.allowlist.set(sender, allowed)?;

    emit!(AutoApproveAllowedSenderSet {
        sender,
        allowed,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAutoApproveAllowedSender<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::PREFIX_SEED],
        bump = config.bump,
        has_one = authority
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [AutoApproveAllowlist::PREFIX_SEED],
        bump,
    )]
    pub allowlist: Box<Account<'info, AutoApproveAllowlist>>,
}
