use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{error::RegistryError, state::RegistryState};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializeArgs {
    /// Signer allowed to admit upkeeps
    pub registrar: Pubkey,
    pub min_gas_limit: u32,
    pub max_gas_limit: u32,
}

pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
    require!(
        args.min_gas_limit <= args.max_gas_limit,
        RegistryError::InvalidGasBounds
    );

    ctx.accounts.registry_state.set_inner(RegistryState {
        authority: ctx.accounts.authority.key(),
        registrar: args.registrar,
        funding_mint: ctx.accounts.funding_mint.key(),
        num_upkeeps: 0,
        next_upkeep_id: 1,
        min_gas_limit: args.min_gas_limit,
        max_gas_limit: args.max_gas_limit,
        bump: ctx.bumps.registry_state,
    });

    msg!("Registry initialized for registrar {}", args.registrar);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + RegistryState::INIT_SPACE,
        seeds = [RegistryState::PREFIX_SEED],
        bump
    )]
    pub registry_state: Box<Account<'info, RegistryState>>,

    pub funding_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Holds the balances of every registered upkeep
    #[account(
        init,
        payer = authority,
        seeds = [RegistryState::VAULT_SEED],
        bump,
        token::mint = funding_mint,
        token::authority = registry_state,
        token::token_program = token_program,
    )]
    pub registry_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}
