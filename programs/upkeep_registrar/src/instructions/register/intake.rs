use anchor_lang::prelude::*;
use upkeep_registry::RegisteredUpkeep;

use crate::{
    commitment::Commitment,
    escrow::Escrow,
    events::{RegistrationApproved, RegistrationRequested},
    pending_store::PendingRequestStore,
    registry_adapter::RegistryAdapter,
    security::validation,
    state::{ApprovalParams, AutoApproveAllowlist, Config, RegistrationParams},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeRoute {
    Admit,
    Queue,
}

/// Outcome of screening a request. Built before any funds move, so caller
/// errors never leave escrow behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakePlan {
    pub hash: Commitment,
    pub route: IntakeRoute,
}

impl IntakePlan {
    pub fn new(
        config: &Config,
        allowlist: &AutoApproveAllowlist,
        params: &RegistrationParams,
        sender: &Pubkey,
    ) -> Result<Self> {
        validation::validate_registration(params, config.min_funding_amount)?;

        let route = if config.should_auto_approve(allowlist.is_allowed(sender)) {
            IntakeRoute::Admit
        } else {
            IntakeRoute::Queue
        };
        Ok(Self {
            hash: params.commitment(),
            route,
        })
    }
}

/// Everything an intake needs once funding sits in escrow.
pub struct Intake<'a, 'info> {
    pub config: &'a mut Config,
    pub pending_request: &'a AccountInfo<'info>,
    pub escrow: Escrow<'info>,
    pub registry: RegistryAdapter<'info>,
    pub payer: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

/// Shared tail of both intake paths. Admits the upkeep right away when the
/// plan says so, otherwise queues the escrowed funding under the request
/// commitment. Returns the default (unregistered) value when queued.
pub fn process_registration(
    intake: Intake<'_, '_>,
    plan: IntakePlan,
    params: RegistrationParams,
    sender: Pubkey,
) -> Result<RegisteredUpkeep> {
    // 1. Bind the pending slot for this commitment
    let store = PendingRequestStore::open(intake.pending_request, plan.hash)?;

    RegistrationRequested::emit_event(plan.hash, &params, sender)?;

    // 2. Queue
    if plan.route == IntakeRoute::Queue {
        let balance = store.deposit(
            params.admin,
            params.amount,
            &intake.payer,
            &intake.system_program,
        )?;
        msg!("Registration queued, escrowed balance {}", balance);
        return Ok(RegisteredUpkeep::default());
    }

    // 3. Admit with the funding that came with this request
    let registered = intake
        .registry
        .admit(&intake.escrow, ApprovalParams::from(&params), params.amount)?;
    intake.config.record_auto_approval()?;

    msg!(
        "Upkeep {} auto-approved ({} of {})",
        registered.upkeep_id,
        intake.config.approved_count,
        intake.config.auto_approve_max_allowed
    );
    RegistrationApproved::emit_event(
        plan.hash,
        params.name,
        registered.upkeep_id,
        registered.forwarder,
    )?;
    Ok(registered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RegistrarError, state::AutoApproveMode};

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

    fn params(amount: u64) -> RegistrationParams {
        RegistrationParams {
            name: "SampleUpkeep".to_string(),
            encrypted_email: vec![],
            target: Pubkey::new_unique(),
            gas_limit: 100_000,
            admin: Pubkey::new_unique(),
            check_data: vec![0x00],
            offchain_config: vec![0x01, 0x23, 0x45, 0x67],
            amount,
        }
    }

    fn empty_allowlist() -> AutoApproveAllowlist {
        AutoApproveAllowlist { senders: vec![] }
    }

    #[test]
    fn underfunded_request_is_rejected_before_routing() {
        let config = config(AutoApproveMode::EnabledAll, 10);
        let sender = Pubkey::new_unique();
        assert_eq!(
            IntakePlan::new(&config, &empty_allowlist(), &params(100_000_000_000_000_000), &sender)
                .unwrap_err(),
            RegistrarError::InsufficientPayment.into()
        );
    }

    #[test]
    fn zero_admin_is_rejected_before_routing() {
        let config = config(AutoApproveMode::EnabledAll, 10);
        let mut params = params(MIN_FUNDING);
        params.admin = Pubkey::default();
        assert_eq!(
            IntakePlan::new(&config, &empty_allowlist(), &params, &Pubkey::new_unique())
                .unwrap_err(),
            RegistrarError::InvalidAdminAddress.into()
        );
    }

    #[test]
    fn plan_carries_the_request_commitment() {
        let config = config(AutoApproveMode::Disabled, 0);
        let params = params(MIN_FUNDING);
        let plan =
            IntakePlan::new(&config, &empty_allowlist(), &params, &Pubkey::new_unique()).unwrap();
        assert_eq!(plan.hash, params.commitment());
        assert_eq!(plan.route, IntakeRoute::Queue);
    }

    #[test]
    fn enabled_all_admits_until_the_ceiling() {
        let mut config = config(AutoApproveMode::EnabledAll, 2);
        let sender = Pubkey::new_unique();

        for _ in 0..2 {
            let plan = IntakePlan::new(&config, &empty_allowlist(), &params(MIN_FUNDING), &sender)
                .unwrap();
            assert_eq!(plan.route, IntakeRoute::Admit);
            config.record_auto_approval().unwrap();
        }
        assert_eq!(config.approved_count, 2);

        let plan =
            IntakePlan::new(&config, &empty_allowlist(), &params(MIN_FUNDING), &sender).unwrap();
        assert_eq!(plan.route, IntakeRoute::Queue);
        // Queueing leaves the counter alone
        assert_eq!(config.approved_count, 2);
    }

    #[test]
    fn allowlisting_a_sender_affects_only_new_intakes() {
        let config = config(AutoApproveMode::EnabledSenderAllowlist, 10);
        let sender = Pubkey::new_unique();
        let mut allowlist = empty_allowlist();

        let first = params(MIN_FUNDING);
        let queued = IntakePlan::new(&config, &allowlist, &first, &sender).unwrap();
        assert_eq!(queued.route, IntakeRoute::Queue);

        allowlist.set(sender, true).unwrap();
        let second = params(MIN_FUNDING);
        let admitted = IntakePlan::new(&config, &allowlist, &second, &sender).unwrap();
        assert_eq!(admitted.route, IntakeRoute::Admit);

        // Distinct requests, so the queued entry keeps its own slot
        assert_ne!(queued.hash, admitted.hash);
    }
}
