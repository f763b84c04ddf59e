use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::extension::ExtensionType;

// Security constants and validation utilities

/// Maximum allowed size for the upkeep display name
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum allowed size for the encrypted contact email
pub const MAX_ENCRYPTED_EMAIL_SIZE: usize = 256;

/// Maximum allowed size for check data
pub const MAX_CHECK_DATA_SIZE: usize = 256;

/// Maximum allowed size for offchain config
pub const MAX_OFFCHAIN_CONFIG_SIZE: usize = 256;

/// Mint extensions under which the vault would not end up holding exactly the
/// amount a request claims, or could be moved without the config PDA
pub const UNSUPPORTED_MINT_EXTENSIONS: [ExtensionType; 3] = [
    ExtensionType::TransferFeeConfig,
    ExtensionType::TransferHook,
    ExtensionType::PermanentDelegate,
];

/// Security validation functions
pub mod validation {
    use super::*;
    use crate::error::RegistrarError;
    use crate::state::{ApprovalParams, RegistrationParams};
    use anchor_spl::token_2022::spl_token_2022::{
        extension::{BaseStateWithExtensions, StateWithExtensions},
        state::Mint as MintState,
    };

    /// Validate a registration request before any funds are routed.
    /// Admin and funding floor are checked first, then size bounds.
    pub fn validate_registration(params: &RegistrationParams, min_funding_amount: u64) -> Result<()> {
        require!(
            params.admin != Pubkey::default(),
            RegistrarError::InvalidAdminAddress
        );
        require!(
            params.amount >= min_funding_amount,
            RegistrarError::InsufficientPayment
        );
        validate_name(&params.name)?;
        require!(
            params.encrypted_email.len() <= MAX_ENCRYPTED_EMAIL_SIZE,
            RegistrarError::EncryptedEmailTooLarge
        );
        validate_check_data(&params.check_data)?;
        validate_offchain_config(&params.offchain_config)
    }

    pub fn validate_approval(params: &ApprovalParams) -> Result<()> {
        validate_name(&params.name)?;
        validate_check_data(&params.check_data)?;
        validate_offchain_config(&params.offchain_config)
    }

    pub fn validate_name(name: &str) -> Result<()> {
        require!(name.len() <= MAX_NAME_LENGTH, RegistrarError::NameTooLong);
        Ok(())
    }

    pub fn validate_check_data(check_data: &[u8]) -> Result<()> {
        require!(
            check_data.len() <= MAX_CHECK_DATA_SIZE,
            RegistrarError::CheckDataTooLarge
        );
        Ok(())
    }

    pub fn validate_offchain_config(offchain_config: &[u8]) -> Result<()> {
        require!(
            offchain_config.len() <= MAX_OFFCHAIN_CONFIG_SIZE,
            RegistrarError::OffchainConfigTooLarge
        );
        Ok(())
    }

    /// The funding mint must move exact amounts. Legacy SPL mints always do;
    /// token-2022 mints are checked for fee, hook and delegate extensions.
    pub fn validate_funding_mint(mint: &AccountInfo) -> Result<()> {
        if *mint.owner != anchor_spl::token_2022::ID {
            return Ok(());
        }
        let data = mint.try_borrow_data()?;
        let state = StateWithExtensions::<MintState>::unpack(&data)?;
        validate_mint_extensions(&state.get_extension_types()?)
    }

    pub fn validate_mint_extensions(extensions: &[ExtensionType]) -> Result<()> {
        require!(
            !extensions
                .iter()
                .any(|extension| UNSUPPORTED_MINT_EXTENSIONS.contains(extension)),
            RegistrarError::UnsupportedFundingMint
        );
        Ok(())
    }

    /// Canonical bump of `account` when it is the PDA of `seeds`
    pub fn pda_bump(account: &Pubkey, seeds: &[&[u8]], program_id: &Pubkey) -> Option<u8> {
        let (expected_key, bump) = Pubkey::find_program_address(seeds, program_id);
        (*account == expected_key).then_some(bump)
    }
}
