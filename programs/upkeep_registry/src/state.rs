use anchor_lang::prelude::*;

use crate::{error::RegistryError, ID};

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_CHECK_DATA_SIZE: usize = 256;
pub const MAX_OFFCHAIN_CONFIG_SIZE: usize = 256;

#[account]
#[derive(Debug, InitSpace)]
pub struct RegistryState {
    pub authority: Pubkey,
    /// Signer allowed to call `register_upkeep` (the registrar's config PDA)
    pub registrar: Pubkey,
    pub funding_mint: Pubkey,
    pub num_upkeeps: u64,
    /// Id handed to the next registered upkeep; ids start at 1
    pub next_upkeep_id: u64,
    pub min_gas_limit: u32,
    pub max_gas_limit: u32,
    pub bump: u8,
}

impl RegistryState {
    pub const PREFIX_SEED: &'static [u8] = b"registry_state";
    pub const VAULT_SEED: &'static [u8] = b"registry_vault";

    pub fn check_gas_limit(&self, gas_limit: u32) -> Result<()> {
        require!(
            gas_limit >= self.min_gas_limit && gas_limit <= self.max_gas_limit,
            RegistryError::GasLimitOutOfBounds
        );
        Ok(())
    }

    /// Hand out the next upkeep id and count it as active.
    pub fn allocate_upkeep_id(&mut self) -> Result<u64> {
        let id = self.next_upkeep_id;
        self.next_upkeep_id = id.checked_add(1).ok_or(RegistryError::UpkeepIdOverflow)?;
        self.num_upkeeps = self
            .num_upkeeps
            .checked_add(1)
            .ok_or(RegistryError::UpkeepIdOverflow)?;
        Ok(id)
    }
}

#[account]
#[derive(Debug, InitSpace)]
pub struct Upkeep {
    pub id: u64,
    pub target: Pubkey,
    pub admin: Pubkey,
    /// Executor handle that performs the upkeep on behalf of the registry
    pub forwarder: Pubkey,
    pub gas_limit: u32,
    pub balance: u64,
    #[max_len(MAX_NAME_LENGTH)]
    pub name: String,
    #[max_len(MAX_CHECK_DATA_SIZE)]
    pub check_data: Vec<u8>,
    #[max_len(MAX_OFFCHAIN_CONFIG_SIZE)]
    pub offchain_config: Vec<u8>,
    pub bump: u8,
}

impl Upkeep {
    pub const PREFIX_SEED: &'static [u8] = b"upkeep";
    pub const FORWARDER_SEED: &'static [u8] = b"forwarder";

    pub fn forwarder_address(id: u64) -> Pubkey {
        Pubkey::find_program_address(&[Self::FORWARDER_SEED, id.to_le_bytes().as_ref()], &ID).0
    }
}

/// Return value of `register_upkeep`. A zero id means nothing was registered.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisteredUpkeep {
    pub upkeep_id: u64,
    pub forwarder: Pubkey,
}

impl RegisteredUpkeep {
    pub fn is_registered(&self) -> bool {
        self.upkeep_id != 0 && self.forwarder != Pubkey::default()
    }
}
