use anchor_lang::prelude::*;
use upkeep_registry::state::RegistryState;

use crate::{error::RegistrarError, registry_adapter::RegistryAdapter, state::Config};

/// Registry accounts touched when an upkeep is admitted. Required on every
/// path that may admit, even when the request ends up queued.
#[derive(Accounts)]
pub struct RegistryAccounts<'info> {
    /// CHECK: compared against `config.registry` before use
    #[account(executable)]
    pub registry_program: UncheckedAccount<'info>,

    /// CHECK: PDA of the registry program, deserialized by the registry
    #[account(
        mut,
        seeds = [RegistryState::PREFIX_SEED],
        bump,
        seeds::program = registry_program.key(),
    )]
    pub registry_state: UncheckedAccount<'info>,

    /// CHECK: token vault PDA of the registry program
    #[account(
        mut,
        seeds = [RegistryState::VAULT_SEED],
        bump,
        seeds::program = registry_program.key(),
    )]
    pub registry_vault: UncheckedAccount<'info>,

    /// CHECK: created by the registry under the next upkeep id
    #[account(mut)]
    pub upkeep: UncheckedAccount<'info>,
}

impl<'info> RegistryAccounts<'info> {
    pub fn adapter(
        &self,
        config: &Config,
        payer: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
    ) -> Result<RegistryAdapter<'info>> {
        require_keys_eq!(
            self.registry_program.key(),
            config.registry,
            RegistrarError::InvalidRegistry
        );
        Ok(RegistryAdapter {
            registry_program: self.registry_program.to_account_info(),
            registry_state: self.registry_state.to_account_info(),
            registry_vault: self.registry_vault.to_account_info(),
            upkeep: self.upkeep.to_account_info(),
            payer,
            system_program,
        })
    }
}
