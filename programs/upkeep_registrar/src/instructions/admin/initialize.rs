use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::VAULT_SEED,
    events::ConfigChanged,
    security::validation,
    state::{AutoApproveAllowlist, Config, RegistrationConfigArgs},
};

pub fn initialize(ctx: Context<Initialize>, args: RegistrationConfigArgs) -> Result<()> {
    // Escrow balances are credited with the requested amount, so the mint
    // must deliver exactly that
    validation::validate_funding_mint(&ctx.accounts.funding_mint.to_account_info())?;

    let mut config = Config {
        authority: ctx.accounts.authority.key(),
        pending_authority: None,
        approved_count: 0,
        funding_mint: ctx.accounts.funding_mint.key(),
        bump: ctx.bumps.config,
        vault_bump: ctx.bumps.vault,
        ..Default::default()
    };
    config.apply(&args);
    ctx.accounts.config.set_inner(config);

    ctx.accounts
        .allowlist
        .set_inner(AutoApproveAllowlist { senders: vec![] });

    msg!(
        "Registrar initialized, operator {} funding mint {}",
        ctx.accounts.authority.key(),
        ctx.accounts.funding_mint.key()
    );
    ConfigChanged::emit_event(
        args.auto_approve_mode,
        args.auto_approve_max_allowed,
        args.registry,
        args.min_funding_amount,
    )
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::PREFIX_SEED],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = authority,
        space = 8 + AutoApproveAllowlist::INIT_SPACE,
        seeds = [AutoApproveAllowlist::PREFIX_SEED],
        bump
    )]
    pub allowlist: Box<Account<'info, AutoApproveAllowlist>>,

    pub funding_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Escrow for every pending and in-flight registration
    #[account(
        init,
        payer = authority,
        seeds = [VAULT_SEED],
        bump,
        token::mint = funding_mint,
        token::authority = config,
        token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}
