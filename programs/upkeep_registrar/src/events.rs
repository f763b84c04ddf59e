use anchor_lang::prelude::*;

use crate::state::{AutoApproveMode, RegistrationParams};

/// Event emitted for every accepted intake, before any admission
#[event]
pub struct RegistrationRequested {
    pub hash: [u8; 32],
    pub name: String,
    pub encrypted_email: Vec<u8>,
    pub target: Pubkey,
    pub gas_limit: u32,
    pub admin: Pubkey,
    pub check_data: Vec<u8>,
    pub amount: u64,
    pub sender: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when the registry admits an upkeep
#[event]
pub struct RegistrationApproved {
    pub hash: [u8; 32],
    pub name: String,
    pub upkeep_id: u64,
    pub forwarder: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a pending request is cancelled and refunded
#[event]
pub struct RegistrationRejected {
    pub hash: [u8; 32],
    pub refunded_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct AutoApproveAllowedSenderSet {
    pub sender: Pubkey,
    pub allowed: bool,
    pub timestamp: i64,
}

/// Event emitted when registration settings are written
#[event]
pub struct ConfigChanged {
    pub auto_approve_mode: AutoApproveMode,
    pub auto_approve_max_allowed: u32,
    pub registry: Pubkey,
    pub min_funding_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferRequested {
    pub from: Pubkey,
    pub to: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub timestamp: i64,
}

// Helper functions for emitting events

impl RegistrationRequested {
    pub fn emit_event(hash: [u8; 32], params: &RegistrationParams, sender: Pubkey) -> Result<()> {
        emit!(Self {
            hash,
            name: params.name.clone(),
            encrypted_email: params.encrypted_email.clone(),
            target: params.target,
            gas_limit: params.gas_limit,
            admin: params.admin,
            check_data: params.check_data.clone(),
            amount: params.amount,
            sender,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}

impl RegistrationApproved {
    pub fn emit_event(hash: [u8; 32], name: String, upkeep_id: u64, forwarder: Pubkey) -> Result<()> {
        emit!(Self {
            hash,
            name,
            upkeep_id,
            forwarder,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}

impl ConfigChanged {
    pub fn emit_event(
        auto_approve_mode: AutoApproveMode,
        auto_approve_max_allowed: u32,
        registry: Pubkey,
        min_funding_amount: u64,
    ) -> Result<()> {
        emit!(Self {
            auto_approve_mode,
            auto_approve_max_allowed,
            registry,
            min_funding_amount,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}
