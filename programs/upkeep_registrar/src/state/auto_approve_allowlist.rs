use anchor_lang::prelude::*;

use crate::{constants::MAX_ALLOWED_SENDERS, error::RegistrarError};

/// Senders whose requests may be auto-approved under
/// `AutoApproveMode::EnabledSenderAllowlist`.
#[account]
#[derive(Debug, InitSpace)]
pub struct AutoApproveAllowlist {
    #[max_len(MAX_ALLOWED_SENDERS)]
    pub senders: Vec<Pubkey>,
}

impl AutoApproveAllowlist {
    pub const PREFIX_SEED: &'static [u8] = b"auto_approve_allowlist";

    pub fn is_allowed(&self, sender: &Pubkey) -> bool {
        self.senders.contains(sender)
    }

    /// Insert or remove `sender`. Both directions are idempotent.
    pub fn set(&mut self, sender: Pubkey, allowed: bool) -> Result<()> {
        let position = self.senders.iter().position(|s| s == &sender);
        match (allowed, position) {
            (true, None) => {
                require!(
                    self.senders.len() < MAX_ALLOWED_SENDERS,
                    RegistrarError::AllowlistFull
                );
                self.senders.push(sender);
            }
            (false, Some(index)) => {
                self.senders.swap_remove(index);
            }
            _ => {}
        }
        Ok(())
    }
}
