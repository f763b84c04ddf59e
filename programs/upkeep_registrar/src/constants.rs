pub const TYPE_AND_VERSION: &str = "UpkeepRegistrar 1.0.0";

pub const VAULT_SEED: &[u8] = b"vault";

/// SPL token / token-2022 `TransferChecked` instruction tag
pub const TRANSFER_CHECKED_DISCRIMINATOR: u8 = 12;

/// Offsets of the `TransferChecked` account metas
pub const TRANSFER_MINT_INDEX: usize = 1;
pub const TRANSFER_DESTINATION_INDEX: usize = 2;
pub const TRANSFER_AUTHORITY_INDEX: usize = 3;

/// Capacity of the auto-approval sender allowlist
pub const MAX_ALLOWED_SENDERS: usize = 64;
