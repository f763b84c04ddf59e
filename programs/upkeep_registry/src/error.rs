use anchor_lang::error_code;

#[error_code]
pub enum RegistryError {
    #[msg("Only the configured registrar can register upkeeps")]
    OnlyRegistrar,

    #[msg("Gas limit is outside the configured bounds")]
    GasLimitOutOfBounds,

    #[msg("Minimum gas limit exceeds maximum gas limit")]
    InvalidGasBounds,

    CheckDataTooLarge,

    OffchainConfigTooLarge,

    NameTooLong,

    UpkeepIdOverflow,
}
