//! Commitment over the immutable part of a registration request.
//!
//! The digest is SHA-256 over
//!
//! ```text
//! target          32 bytes
//! gas_limit        4 bytes  u32, big-endian
//! admin           32 bytes
//! check_data_len   4 bytes  u32, big-endian
//! check_data       check_data_len bytes
//! ```
//!
//! Funding amount, sender, name, offchain config and encrypted email are not
//! committed, so repeat submissions accumulate under one key and the offchain
//! config can be refreshed at approval time.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::Hasher;

pub const COMMITMENT_SIZE: usize = 32;

pub type Commitment = [u8; COMMITMENT_SIZE];

pub fn compute_commitment(
    target: &Pubkey,
    gas_limit: u32,
    admin: &Pubkey,
    check_data: &[u8],
) -> Commitment {
    let mut hasher = Hasher::default();
    hasher.hash(target.as_ref());
    hasher.hash(&gas_limit.to_be_bytes());
    hasher.hash(admin.as_ref());
    // check_data arrives in instruction data, far shorter than u32::MAX
    hasher.hash(&(check_data.len() as u32).to_be_bytes());
    hasher.hash(check_data);
    hasher.result().to_bytes()
}
