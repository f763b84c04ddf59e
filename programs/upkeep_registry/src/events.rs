use anchor_lang::prelude::*;

/// Event emitted when the registrar admits a new upkeep
#[event]
pub struct UpkeepRegistered {
    pub upkeep_id: u64,
    pub forwarder: Pubkey,
    pub admin: Pubkey,
    pub gas_limit: u32,
    pub balance: u64,
    pub timestamp: i64,
}
