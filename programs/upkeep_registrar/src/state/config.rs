use anchor_lang::prelude::*;

use crate::error::RegistrarError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum AutoApproveMode {
    #[default]
    Disabled,
    EnabledSenderAllowlist,
    EnabledAll,
}

/// Registrar-wide configuration and auto-approval counter.
/// The account is also the authority of the escrow vault and the signer the
/// registry expects on admissions.
#[account]
#[derive(Default, InitSpace, Debug)]
pub struct Config {
    pub authority: Pubkey,
    pub pending_authority: Option<Pubkey>,
    pub auto_approve_mode: AutoApproveMode,
    pub auto_approve_max_allowed: u32,
    /// Admissions granted through auto-approval; never decremented
    pub approved_count: u32,
    /// Registry program admitting upkeeps
    pub registry: Pubkey,
    pub min_funding_amount: u64,
    pub funding_mint: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Config {
    pub const PREFIX_SEED: &'static [u8] = b"config";

    pub fn should_auto_approve(&self, sender_allowlisted: bool) -> bool {
        match self.auto_approve_mode {
            AutoApproveMode::Disabled => false,
            AutoApproveMode::EnabledSenderAllowlist => {
                sender_allowlisted && self.below_auto_approve_ceiling()
            }
            AutoApproveMode::EnabledAll => self.below_auto_approve_ceiling(),
        }
    }

    fn below_auto_approve_ceiling(&self) -> bool {
        self.approved_count < self.auto_approve_max_allowed
    }

    pub fn record_auto_approval(&mut self) -> Result<()> {
        self.approved_count = self
            .approved_count
            .checked_add(1)
            .ok_or(RegistrarError::ApprovedCountOverflow)?;
        Ok(())
    }

    /// Replace the registration settings. The approval counter is kept.
    pub fn apply(&mut self, settings: &RegistrationConfigArgs) {
        self.auto_approve_mode = settings.auto_approve_mode;
        self.auto_approve_max_allowed = settings.auto_approve_max_allowed;
        self.registry = settings.registry;
        self.min_funding_amount = settings.min_funding_amount;
    }

    pub fn propose_authority(&mut self, new_authority: Pubkey) -> Result<()> {
        require_keys_neq!(
            new_authority,
            self.authority,
            RegistrarError::CannotTransferToSelf
        );
        self.pending_authority = Some(new_authority);
        Ok(())
    }

    /// Complete a two-step ownership transfer, returning the previous authority.
    pub fn accept_authority(&mut self, signer: Pubkey) -> Result<Pubkey> {
        require!(
            self.pending_authority == Some(signer),
            RegistrarError::MustBeProposedOwner
        );
        let previous = self.authority;
        self.authority = signer;
        self.pending_authority = None;
        Ok(previous)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistrationConfigArgs {
    pub auto_approve_mode: AutoApproveMode,
    pub auto_approve_max_allowed: u32,
    pub registry: Pubkey,
    pub min_funding_amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_FUNDING: u64 = 1_000_000_000_000_000_000;

    fn config(mode: AutoApproveMode, max_allowed: u32) -> Config {
        Config {
            authority: Pubkey::new_unique(),
            auto_approve_mode: mode,
            auto_approve_max_allowed: max_allowed,
            registry: Pubkey::new_unique(),
            min_funding_amount: MIN_FUNDING,
            funding_mint: Pubkey::new_unique(),
            ..Default::default()
        }
    }

    #[test]
    fn disabled_never_auto_approves() {
        let config = config(AutoApproveMode::Disabled, u32::MAX);
        assert!(!config.should_auto_approve(true));
        assert!(!config.should_auto_approve(false));
    }

    #[test]
    fn enabled_all_ignores_the_allowlist() {
        let config = config(AutoApproveMode::EnabledAll, 5);
        assert!(config.should_auto_approve(true));
        assert!(config.should_auto_approve(false));
    }

    #[test]
    fn sender_allowlist_requires_membership() {
        let config = config(AutoApproveMode::EnabledSenderAllowlist, 5);
        assert!(config.should_auto_approve(true));
        assert!(!config.should_auto_approve(false));
    }

    #[test]
    fn ceiling_is_a_hard_limit_for_every_sender() {
        let mut config = config(AutoApproveMode::EnabledAll, 3);
        for _ in 0..3 {
            assert!(config.should_auto_approve(false));
            config.record_auto_approval().unwrap();
        }
        assert!(!config.should_auto_approve(false));
        assert!(!config.should_auto_approve(true));

        config.auto_approve_mode = AutoApproveMode::EnabledSenderAllowlist;
        assert!(!config.should_auto_approve(true));
    }

    #[test]
    fn raising_the_ceiling_keeps_the_counter() {
        let mut config = config(AutoApproveMode::EnabledAll, 1);
        config.record_auto_approval().unwrap();
        assert!(!config.should_auto_approve(false));

        let registry = config.registry;
        config.apply(&RegistrationConfigArgs {
            auto_approve_mode: AutoApproveMode::EnabledAll,
            auto_approve_max_allowed: 2,
            registry,
            min_funding_amount: MIN_FUNDING,
        });
        assert_eq!(config.approved_count, 1);
        assert!(config.should_auto_approve(false));

        config.record_auto_approval().unwrap();
        assert!(!config.should_auto_approve(false));
    }

    #[test]
    fn lowering_the_ceiling_below_the_counter_blocks_auto_approval() {
        let mut config = config(AutoApproveMode::EnabledAll, 4);
        config.record_auto_approval().unwrap();
        config.record_auto_approval().unwrap();

        let registry = config.registry;
        config.apply(&RegistrationConfigArgs {
            auto_approve_mode: AutoApproveMode::EnabledAll,
            auto_approve_max_allowed: 1,
            registry,
            min_funding_amount: MIN_FUNDING,
        });
        assert_eq!(config.approved_count, 2);
        assert!(!config.should_auto_approve(false));
    }

    #[test]
    fn counter_overflow_is_an_error() {
        let mut config = config(AutoApproveMode::EnabledAll, u32::MAX);
        config.approved_count = u32::MAX;
        assert_eq!(
            config.record_auto_approval().unwrap_err(),
            RegistrarError::ApprovedCountOverflow.into()
        );
    }

    #[test]
    fn two_step_ownership_transfer() {
        let mut config = config(AutoApproveMode::Disabled, 0);
        let original = config.authority;
        let proposed = Pubkey::new_unique();

        assert_eq!(
            config.propose_authority(original).unwrap_err(),
            RegistrarError::CannotTransferToSelf.into()
        );

        config.propose_authority(proposed).unwrap();
        assert_eq!(
            config.accept_authority(Pubkey::new_unique()).unwrap_err(),
            RegistrarError::MustBeProposedOwner.into()
        );
        assert_eq!(config.authority, original);

        assert_eq!(config.accept_authority(proposed).unwrap(), original);
        assert_eq!(config.authority, proposed);
        assert_eq!(config.pending_authority, None);
    }
}
