use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::VAULT_SEED,
    error::RegistrarError,
    escrow::Escrow,
    events::RegistrationApproved,
    pending_store::PendingRequestStore,
    security::validation,
    state::{ApprovalParams, Config},
};
// Nested accounts need their generated client modules in scope
use crate::instructions::registry_accounts::*;

/// Operator approval of a queued request. The request is admitted with its
/// whole escrowed balance and the `offchain_config` supplied here.
pub fn approve(ctx: Context<Approve>, params: ApprovalParams, hash: [u8; 32]) -> Result<()> {
    // 1. The revealed payload must be the one that was committed to
    require!(params.commitment() == hash, RegistrarError::HashMismatch);

    // 2. Look up the queued request
    let store = PendingRequestStore::open(&ctx.accounts.pending_request, hash)?;
    let pending = store.get()?;
    validation::validate_approval(&params)?;

    // 3. Admit
    let escrow = Escrow::new(
        &ctx.accounts.vault,
        &ctx.accounts.funding_mint,
        &ctx.accounts.config,
        &ctx.accounts.token_program,
    );
    let registry = ctx.accounts.registry.adapter(
        &ctx.accounts.config,
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    )?;
    let name = params.name.clone();
    let registered = registry.admit(&escrow, params, pending.balance)?;

    // 4. The request is consumed
    store.remove(&pending, &ctx.accounts.rent_refund_to)?;

    msg!(
        "Upkeep {} approved with balance {}",
        registered.upkeep_id,
        pending.balance
    );
    RegistrationApproved::emit_event(hash, name, registered.upkeep_id, registered.forwarder)
}

#[derive(Accounts)]
pub struct Approve<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::PREFIX_SEED],
        bump = config.bump,
        has_one = authority
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

    /// CHECK: PDA of the request commitment, validated in the handler
    #[account(mut)]
    pub pending_request: UncheckedAccount<'info>,

    /// CHECK: must be the account that paid the request's rent
    #[account(mut)]
    pub rent_refund_to: UncheckedAccount<'info>,

    pub registry: RegistryAccounts<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}
