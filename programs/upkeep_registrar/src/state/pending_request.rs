use anchor_lang::prelude::*;

use crate::error::RegistrarError;

/// Registration request held in escrow until the owner approves or someone
/// authorized cancels it. Keyed by the request commitment.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    /// Admin of the upkeep once registered, and refund recipient on cancel
    pub admin: Pubkey,
    /// Funding accumulated over every submission with this commitment
    pub balance: u64,
    /// Where to refund rent when the request is closed
    pub rent_refund_to: Pubkey,
    pub bump: u8,
}

impl PendingRequest {
    pub const PREFIX_SEED: &'static [u8] = b"pending_request";

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(RegistrarError::BalanceOverflow)?;
        Ok(())
    }

    /// Decode a stored request. Empty, zeroed or foreign data is "no request".
    pub fn decode(data: &[u8]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        Self::try_deserialize(&mut &data[..]).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(balance: u64) -> PendingRequest {
        PendingRequest {
            admin: Pubkey::new_unique(),
            balance,
            rent_refund_to: Pubkey::new_unique(),
            bump: 253,
        }
    }

    fn encode(request: &PendingRequest) -> Vec<u8> {
        let mut data = Vec::new();
        request.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn credit_accumulates() {
        let mut pending = request(5_000_000_000_000_000_000);
        pending.credit(5_000_000_000_000_000_000).unwrap();
        assert_eq!(pending.balance, 10_000_000_000_000_000_000);
    }

    #[test]
    fn credit_overflow_leaves_balance_untouched() {
        let mut pending = request(u64::MAX - 1);
        assert_eq!(
            pending.credit(2).unwrap_err(),
            RegistrarError::BalanceOverflow.into()
        );
        assert_eq!(pending.balance, u64::MAX - 1);
    }

    #[test]
    fn decodes_stored_request() {
        let pending = request(42);
        assert_eq!(PendingRequest::decode(&encode(&pending)), Some(pending));
    }

    #[test]
    fn closed_or_missing_accounts_decode_to_none() {
        assert_eq!(PendingRequest::decode(&[]), None);

        let zeroed = vec![0u8; 8 + PendingRequest::INIT_SPACE];
        assert_eq!(PendingRequest::decode(&zeroed), None);
    }
}
