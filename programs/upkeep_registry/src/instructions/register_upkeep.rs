use anchor_lang::prelude::*;

use crate::{
    error::RegistryError,
    events::UpkeepRegistered,
    state::{
        RegisteredUpkeep, RegistryState, Upkeep, MAX_CHECK_DATA_SIZE, MAX_NAME_LENGTH,
        MAX_OFFCHAIN_CONFIG_SIZE,
    },
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct RegisterUpkeepArgs {
    pub name: String,
    pub target: Pubkey,
    pub gas_limit: u32,
    pub admin: Pubkey,
    pub check_data: Vec<u8>,
    pub offchain_config: Vec<u8>,
    /// Amount already moved into the registry vault for this upkeep
    pub funding: u64,
}

impl RegisterUpkeepArgs {
    pub fn validate(&self, state: &RegistryState) -> Result<()> {
        state.check_gas_limit(self.gas_limit)?;
        require!(
            self.name.len() <= MAX_NAME_LENGTH,
            RegistryError::NameTooLong
        );
        require!(
            self.check_data.len() <= MAX_CHECK_DATA_SIZE,
            RegistryError::CheckDataTooLarge
        );
        require!(
            self.offchain_config.len() <= MAX_OFFCHAIN_CONFIG_SIZE,
            RegistryError::OffchainConfigTooLarge
        );
        Ok(())
    }
}

pub fn register_upkeep(
    ctx: Context<RegisterUpkeep>,
    args: RegisterUpkeepArgs,
) -> Result<RegisteredUpkeep> {
    args.validate(&ctx.accounts.registry_state)?;

    let upkeep_id = ctx.accounts.registry_state.allocate_upkeep_id()?;
    let forwarder = Upkeep::forwarder_address(upkeep_id);

    ctx.accounts.upkeep.set_inner(Upkeep {
        id: upkeep_id,
        target: args.target,
        admin: args.admin,
        forwarder,
        gas_limit: args.gas_limit,
        balance: args.funding,
        name: args.name,
        check_data: args.check_data,
        offchain_config: args.offchain_config,
        bump: ctx.bumps.upkeep,
    });

    emit!(UpkeepRegistered {
        upkeep_id,
        forwarder,
        admin: args.admin,
        gas_limit: args.gas_limit,
        balance: args.funding,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(RegisteredUpkeep {
        upkeep_id,
        forwarder,
    })
}

#[derive(Accounts)]
pub struct RegisterUpkeep<'info> {
    #[account(
        constraint = registrar.key() == registry_state.registrar @ RegistryError::OnlyRegistrar
    )]
    pub registrar: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryState::PREFIX_SEED],
        bump = registry_state.bump,
    )]
    pub registry_state: Box<Account<'info, RegistryState>>,

    #[account(
        init,
        payer = payer,
        space = 8 + Upkeep::INIT_SPACE,
        seeds = [Upkeep::PREFIX_SEED, registry_state.next_upkeep_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub upkeep: Box<Account<'info, Upkeep>>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_state() -> RegistryState {
        RegistryState {
            authority: Pubkey::new_unique(),
            registrar: Pubkey::new_unique(),
            funding_mint: Pubkey::new_unique(),
            num_upkeeps: 0,
            next_upkeep_id: 1,
            min_gas_limit: 2_300,
            max_gas_limit: 5_000_000,
            bump: 254,
        }
    }

    fn args() -> RegisterUpkeepArgs {
        RegisterUpkeepArgs {
            name: "SampleUpkeep".to_string(),
            target: Pubkey::new_unique(),
            gas_limit: 100_000,
            admin: Pubkey::new_unique(),
            check_data: vec![0x00],
            offchain_config: vec![0x01, 0x23, 0x45, 0x67],
            funding: 5_000_000_000,
        }
    }

    #[test]
    fn accepts_well_formed_args() {
        assert!(args().validate(&registry_state()).is_ok());
    }

    #[test]
    fn rejects_gas_limit_below_minimum() {
        let mut args = args();
        args.gas_limit = 10;
        assert_eq!(
            args.validate(&registry_state()).unwrap_err(),
            RegistryError::GasLimitOutOfBounds.into()
        );
    }

    #[test]
    fn rejects_oversized_fields() {
        let state = registry_state();

        let mut long_name = args();
        long_name.name = "n".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            long_name.validate(&state).unwrap_err(),
            RegistryError::NameTooLong.into()
        );

        let mut big_check_data = args();
        big_check_data.check_data = vec![7; MAX_CHECK_DATA_SIZE + 1];
        assert_eq!(
            big_check_data.validate(&state).unwrap_err(),
            RegistryError::CheckDataTooLarge.into()
        );

        let mut big_offchain_config = args();
        big_offchain_config.offchain_config = vec![7; MAX_OFFCHAIN_CONFIG_SIZE + 1];
        assert_eq!(
            big_offchain_config.validate(&state).unwrap_err(),
            RegistryError::OffchainConfigTooLarge.into()
        );
    }
}
