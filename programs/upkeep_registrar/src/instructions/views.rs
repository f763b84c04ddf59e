use anchor_lang::prelude::*;

use crate::{
    constants::TYPE_AND_VERSION,
    pending_store::PendingRequestStore,
    state::{AutoApproveAllowlist, AutoApproveMode, Config, PendingRequest},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistrationConfigView {
    pub auto_approve_mode: AutoApproveMode,
    pub auto_approve_max_allowed: u32,
    pub approved_count: u32,
    pub registry: Pubkey,
    pub min_funding_amount: u64,
}

impl From<&Config> for RegistrationConfigView {
    fn from(config: &Config) -> Self {
        Self {
            auto_approve_mode: config.auto_approve_mode,
            auto_approve_max_allowed: config.auto_approve_max_allowed,
            approved_count: config.approved_count,
            registry: config.registry,
            min_funding_amount: config.min_funding_amount,
        }
    }
}

/// Zeroed when no request is pending under the hash
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingRequestView {
    pub admin: Pubkey,
    pub balance: u64,
}

impl From<Option<PendingRequest>> for PendingRequestView {
    fn from(pending: Option<PendingRequest>) -> Self {
        pending
            .map(|pending| Self {
                admin: pending.admin,
                balance: pending.balance,
            })
            .unwrap_or_default()
    }
}

pub fn type_and_version(_ctx: Context<TypeAndVersion>) -> Result<String> {
    Ok(TYPE_AND_VERSION.to_string())
}

pub fn get_registration_config(
    ctx: Context<GetRegistrationConfig>,
) -> Result<RegistrationConfigView> {
    Ok(RegistrationConfigView::from(&**ctx.accounts.config))
}

pub fn get_pending_request(
    ctx: Context<GetPendingRequest>,
    hash: [u8; 32],
) -> Result<PendingRequestView> {
    let store = PendingRequestStore::open(&ctx.accounts.pending_request, hash)?;
    Ok(PendingRequestView::from(store.load()))
}

pub fn get_auto_approve_allowed_sender(
    ctx: Context<GetAutoApproveAllowedSender>,
    sender: Pubkey,
) -> Result<bool> {
    Ok(ctx.accounts.allowlist.is_allowed(&sender))
}

#[derive(Accounts)]
pub struct TypeAndVersion {}

#[derive(Accounts)]
pub struct GetRegistrationConfig<'info> {
    #[account(seeds = [Config::PREFIX_SEED], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,
}

#[derive(Accounts)]
pub struct GetPendingRequest<'info> {
    /// CHECK: PDA of the request commitment, may not exist
    pub pending_request: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct GetAutoApproveAllowedSender<'info> {
    #[account(seeds = [AutoApproveAllowlist::PREFIX_SEED], bump)]
    pub allowlist: Box<Account<'info, AutoApproveAllowlist>>,
}
