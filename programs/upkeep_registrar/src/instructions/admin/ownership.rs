use anchor_lang::prelude::*;

use crate::{
    events::{OwnershipTransferRequested, OwnershipTransferred},
    state::Config,
};

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_authority: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.propose_authority(new_authority)?;

    emit!(OwnershipTransferRequested {
        from: config.authority,
        to: new_authority,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
    let new_authority = ctx.accounts.pending_authority.key();
    let previous = ctx.accounts.config.accept_authority(new_authority)?;

    msg!("Registrar ownership moved from {} to {}", previous, new_authority);
    emit!(OwnershipTransferred {
        from: previous,
        to: new_authority,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::PREFIX_SEED],
        bump = config.bump,
        has_one = authority
    )]
    pub config: Box<Account<'info, Config>>,
}

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    /// Must match `config.pending_authority`, checked in the handler
    pub pending_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::PREFIX_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,
}
