use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::VAULT_SEED,
    error::RegistrarError,
    escrow::Escrow,
    events::RegistrationRejected,
    pending_store::PendingRequestStore,
    state::{Config, PendingRequest},
};

/// Withdraw a queued request and refund its whole balance to the admin.
pub fn cancel(ctx: Context<Cancel>, hash: [u8; 32]) -> Result<()> {
    // 1. Only the operator or the request admin may withdraw it
    let store = PendingRequestStore::open(&ctx.accounts.pending_request, hash)?;
    let pending = authorize_cancel(
        store.load(),
        ctx.accounts.caller.key(),
        ctx.accounts.config.authority,
    )?;
    require_keys_eq!(
        ctx.accounts.refund_token_account.owner,
        pending.admin,
        RegistrarError::InvalidRefundAccount
    );

    // 2. Refund, then drop the entry
    let escrow = Escrow::new(
        &ctx.accounts.vault,
        &ctx.accounts.funding_mint,
        &ctx.accounts.config,
        &ctx.accounts.token_program,
    );
    escrow.release(
        ctx.accounts.refund_token_account.to_account_info(),
        pending.balance,
    )?;
    store.remove(&pending, &ctx.accounts.rent_refund_to)?;

    msg!("Registration cancelled, refunded {}", pending.balance);
    emit!(RegistrationRejected {
        hash,
        refunded_amount: pending.balance,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

/// Authorization comes first: without an entry only the operator learns that
/// nothing is pending.
fn authorize_cancel(
    pending: Option<PendingRequest>,
    caller: Pubkey,
    operator: Pubkey,
) -> Result<PendingRequest> {
    let is_admin = pending.as_ref().is_some_and(|p| p.admin == caller);
    require!(
        caller == operator || is_admin,
        RegistrarError::OnlyAdminOrOwner
    );
    pending.ok_or_else(|| error!(RegistrarError::RequestNotFound))
}

#[derive(Accounts)]
pub struct Cancel<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [Config::PREFIX_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(address = config.funding_mint @ RegistrarError::InvalidFundingMint)]
    pub funding_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = config.vault_bump,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Admin's token account receiving the refund
    #[account(
        mut,
        token::mint = funding_mint,
        token::token_program = token_program,
    )]
    pub refund_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: PDA of the request commitment, validated in the handler
    #[account(mut)]
    pub pending_request: UncheckedAccount<'info>,

    /// CHECK: must be the account that paid the request's rent
    #[account(mut)]
    pub rent_refund_to: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}
