use anchor_lang::prelude::*;

pub mod commitment;
pub mod constants;
pub mod error;
pub mod escrow;
pub mod events;
pub mod instructions;
pub mod pending_store;
pub mod registry_adapter;
pub mod security;
pub mod state;
pub mod utils;

use instructions::*;
use state::{ApprovalParams, RegistrationConfigArgs, RegistrationParams};
use upkeep_registry::RegisteredUpkeep;

declare_id!("G8nb9vPXYZeSXWqCAixxix7bwkH7uAnBTuVbYMWZRYsK");

/// Registration intake for the upkeep registry. Funded requests are either
/// admitted right away under the auto-approval policy or held in escrow until
/// the operator approves them or they are cancelled.
#[program]
pub mod upkeep_registrar {
    use super::*;

    /// Create the config, the sender allowlist and the escrow vault
    pub fn initialize(ctx: Context<Initialize>, args: RegistrationConfigArgs) -> Result<()> {
        instructions::initialize(ctx, args)
    }

    pub fn set_registration_config(
        ctx: Context<SetRegistrationConfig>,
        args: RegistrationConfigArgs,
    ) -> Result<()> {
        instructions::set_registration_config(ctx, args)
    }

    pub fn set_auto_approve_allowed_sender(
        ctx: Context<SetAutoApproveAllowedSender>,
        sender: Pubkey,
        allowed: bool,
    ) -> Result<()> {
        instructions::set_auto_approve_allowed_sender(ctx, sender, allowed)
    }

    /// Propose a new operator; takes effect once accepted
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_authority: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_authority)
    }

    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        instructions::accept_ownership(ctx)
    }

    /// Register by pulling funding from the signer's token account
    pub fn register_upkeep(
        ctx: Context<RegisterUpkeep>,
        params: RegistrationParams,
    ) -> Result<RegisteredUpkeep> {
        instructions::register_upkeep(ctx, params)
    }

    /// Register with funding transferred in the preceding instruction
    pub fn on_token_transfer(ctx: Context<OnTokenTransfer>, data: Vec<u8>) -> Result<()> {
        instructions::on_token_transfer(ctx, data)
    }

    pub fn approve(ctx: Context<Approve>, params: ApprovalParams, hash: [u8; 32]) -> Result<()> {
        instructions::approve(ctx, params, hash)
    }

    pub fn cancel(ctx: Context<Cancel>, hash: [u8; 32]) -> Result<()> {
        instructions::cancel(ctx, hash)
    }

    pub fn type_and_version(ctx: Context<TypeAndVersion>) -> Result<String> {
        instructions::type_and_version(ctx)
    }

    pub fn get_registration_config(
        ctx: Context<GetRegistrationConfig>,
    ) -> Result<RegistrationConfigView> {
        instructions::get_registration_config(ctx)
    }

    pub fn get_pending_request(
        ctx: Context<GetPendingRequest>,
        hash: [u8; 32],
    ) -> Result<PendingRequestView> {
        instructions::get_pending_request(ctx, hash)
    }

    pub fn get_auto_approve_allowed_sender(
        ctx: Context<GetAutoApproveAllowedSender>,
        sender: Pubkey,
    ) -> Result<bool> {
        instructions::get_auto_approve_allowed_sender(ctx, sender)
    }
}
