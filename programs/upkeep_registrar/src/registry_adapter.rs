use anchor_lang::prelude::*;
use upkeep_registry::{
    cpi::accounts::RegisterUpkeep, instructions::RegisterUpkeepArgs, RegisteredUpkeep,
};

use crate::{
    error::RegistrarError,
    escrow::Escrow,
    state::{ApprovalParams, Config},
};

/// Accounts the registry needs to admit one upkeep.
pub struct RegistryAdapter<'info> {
    pub registry_program: AccountInfo<'info>,
    pub registry_state: AccountInfo<'info>,
    pub registry_vault: AccountInfo<'info>,
    pub upkeep: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

impl<'info> RegistryAdapter<'info> {
    /// Move `funding` from escrow into the registry vault and register the
    /// upkeep, signed by the config PDA.
    pub fn admit(
        &self,
        escrow: &Escrow<'info>,
        upkeep: ApprovalParams,
        funding: u64,
    ) -> Result<RegisteredUpkeep> {
        escrow.release(self.registry_vault.clone(), funding)?;

        let bump = [escrow.authority_bump];
        let seeds: &[&[u8]] = &[Config::PREFIX_SEED, &bump];
        let registered = upkeep_registry::cpi::register_upkeep(
            CpiContext::new_with_signer(
                self.registry_program.clone(),
                RegisterUpkeep {
                    registrar: escrow.authority.clone(),
                    payer: self.payer.clone(),
                    registry_state: self.registry_state.clone(),
                    upkeep: self.upkeep.clone(),
                    system_program: self.system_program.clone(),
                },
                &[seeds],
            ),
            RegisterUpkeepArgs {
                name: upkeep.name,
                target: upkeep.target,
                gas_limit: upkeep.gas_limit,
                admin: upkeep.admin,
                check_data: upkeep.check_data,
                offchain_config: upkeep.offchain_config,
                funding,
            },
        )?
        .get();

        require!(
            registered.is_registered(),
            RegistrarError::RegistrationRequestFailed
        );
        Ok(registered)
    }
}
