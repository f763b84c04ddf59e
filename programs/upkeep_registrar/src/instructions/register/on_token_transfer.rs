use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
// Nested accounts need their generated client modules in scope
use crate::instructions::registry_accounts::*;

use super::intake::{process_registration, Intake, IntakePlan};
use crate::{
    constants::VAULT_SEED,
    error::RegistrarError,
    escrow::{inspect_funding_transfer, Escrow},
    state::{AutoApproveAllowlist, Config, TransferCallbackPayload},
};

/// Push path: the funding arrived through a `TransferChecked` into the vault
/// placed immediately before this instruction. `data` is the selector of
/// `register` followed by the encoded `TransferCallbackPayload`.
pub fn on_token_transfer(ctx: Context<OnTokenTransfer>, data: Vec<u8>) -> Result<()> {
    // 0. Find the transfer that funded this call
    let transfer = inspect_funding_transfer(
        &ctx.accounts.ix_sysvar,
        &ctx.accounts.token_program.key(),
        &ctx.accounts.funding_mint.key(),
        &ctx.accounts.vault.key(),
    )?;

    // 1. Decode the payload and bind it to that transfer
    let payload = TransferCallbackPayload::decode(&data)?;
    transfer.verify_against(&payload)?;

    // 2. Screen the request
    let plan = IntakePlan::new(
        &ctx.accounts.config,
        &ctx.accounts.allowlist,
        &payload.params,
        &payload.sender,
    )?;

    let escrow = Escrow::new(
        &ctx.accounts.vault,
        &ctx.accounts.funding_mint,
        &ctx.accounts.config,
        &ctx.accounts.token_program,
    );
    let registry = ctx.accounts.registry.adapter(
        &ctx.accounts.config,
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    )?;

    process_registration(
        Intake {
            config: &mut ctx.accounts.config,
            pending_request: &ctx.accounts.pending_request,
            escrow,
            registry,
            payer: ctx.accounts.payer.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
        },
        plan,
        payload.params,
        payload.sender,
    )?;
    Ok(())
}

#[derive(Accounts)]
pub struct OnTokenTransfer<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::PREFIX_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        seeds = [AutoApproveAllowlist::PREFIX_SEED],
        bump,
    )]
    pub allowlist: Box<Account<'info, AutoApproveAllowlist>>,

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

    pub registry: RegistryAccounts<'info>,

    /// CHECK: instructions sysvar
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub ix_sysvar: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}
