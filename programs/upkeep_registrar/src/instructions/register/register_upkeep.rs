use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use upkeep_registry::RegisteredUpkeep;

use super::intake::{process_registration, Intake, IntakePlan};
use crate::{
    constants::VAULT_SEED,
    error::RegistrarError,
    escrow::Escrow,
    state::{AutoApproveAllowlist, Config, RegistrationParams},
};
// Nested accounts need their generated client modules in scope
use crate::instructions::registry_accounts::*;

/// Pull path: the signer's tokens are moved into escrow by this instruction.
pub fn register_upkeep(
    ctx: Context<RegisterUpkeep>,
    params: RegistrationParams,
) -> Result<RegisteredUpkeep> {
    let sender = ctx.accounts.sender.key();

    // 0. Screen the request before any funds move
    let plan = IntakePlan::new(
        &ctx.accounts.config,
        &ctx.accounts.allowlist,
        &params,
        &sender,
    )?;

    // 1. Escrow the funding
    let escrow = Escrow::new(
        &ctx.accounts.vault,
        &ctx.accounts.funding_mint,
        &ctx.accounts.config,
        &ctx.accounts.token_program,
    );
    escrow.pull(
        ctx.accounts.sender_token_account.to_account_info(),
        ctx.accounts.sender.to_account_info(),
        params.amount,
    )?;

    let registry = ctx.accounts.registry.adapter(
        &ctx.accounts.config,
        ctx.accounts.sender.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    )?;

    process_registration(
        Intake {
            config: &mut ctx.accounts.config,
            pending_request: &ctx.accounts.pending_request,
            escrow,
            registry,
            payer: ctx.accounts.sender.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
        },
        plan,
        params,
        sender,
    )
}

#[derive(Accounts)]
pub struct RegisterUpkeep<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(
        mut,
        token::mint = funding_mint,
        token::authority = sender,
        token::token_program = token_program,
    )]
    pub sender_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

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

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}
