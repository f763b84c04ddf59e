use anchor_lang::error_code;

#[error_code]
pub enum RegistrarError {
    #[msg("Admin address must not be the zero address")]
    InvalidAdminAddress,

    #[msg("No pending registration request for this hash")]
    RequestNotFound,

    #[msg("Payload does not hash to the supplied commitment")]
    HashMismatch,

    #[msg("Only the request admin or the registrar owner can cancel")]
    OnlyAdminOrOwner,

    #[msg("Funding amount is below the configured minimum")]
    InsufficientPayment,

    #[msg("The registry did not register the upkeep")]
    RegistrationRequestFailed,

    #[msg("Registration must directly follow a funding token transfer into the vault")]
    OnlyFundingToken,

    #[msg("Transferred amount does not match the amount in the payload")]
    AmountMismatch,

    #[msg("Transfer authority does not match the sender in the payload")]
    SenderMismatch,

    #[msg("Payload does not target the register function")]
    FunctionNotPermitted,

    InvalidDataLength,

    InvalidPendingRequestAccount,

    InvalidRentRefundAccount,

    #[msg("Refund token account is not owned by the request admin")]
    InvalidRefundAccount,

    #[msg("Registry program does not match the configured registry")]
    InvalidRegistry,

    InvalidFundingMint,

    NameTooLong,

    EncryptedEmailTooLarge,

    CheckDataTooLarge,

    OffchainConfigTooLarge,

    BalanceOverflow,

    ApprovedCountOverflow,

    #[msg("Auto-approval allowlist is full")]
    AllowlistFull,

    CannotTransferToSelf,

    #[msg("Only the proposed owner can accept ownership")]
    MustBeProposedOwner,

    #[msg("Funding mint carries a transfer fee, transfer hook or permanent delegate")]
    UnsupportedFundingMint,
}
