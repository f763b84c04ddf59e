use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::{
    commitment::Commitment,
    error::RegistrarError,
    security::validation,
    state::PendingRequest,
    utils::close_account,
    ID,
};

/// Pending requests, one PDA per commitment. The account only exists while
/// the request is pending, so a missing account means "not found".
pub struct PendingRequestStore<'a, 'info> {
    account: &'a AccountInfo<'info>,
    commitment: Commitment,
    bump: u8,
}

impl<'a, 'info> PendingRequestStore<'a, 'info> {
    /// Bind the store to the account derived from `commitment`.
    pub fn open(account: &'a AccountInfo<'info>, commitment: Commitment) -> Result<Self> {
        let bump = validation::pda_bump(
            account.key,
            &[PendingRequest::PREFIX_SEED, &commitment],
            &ID,
        )
        .ok_or(RegistrarError::InvalidPendingRequestAccount)?;
        Ok(Self {
            account,
            commitment,
            bump,
        })
    }

    pub fn load(&self) -> Option<PendingRequest> {
        if self.account.owner != &ID || self.account.lamports() == 0 {
            return None;
        }
        let data = self.account.try_borrow_data().ok()?;
        PendingRequest::decode(&data)
    }

    pub fn get(&self) -> Result<PendingRequest> {
        self.load()
            .ok_or_else(|| error!(RegistrarError::RequestNotFound))
    }

    /// Create the request or add `amount` to an existing one. Returns the
    /// accumulated balance.
    pub fn deposit(
        &self,
        admin: Pubkey,
        amount: u64,
        payer: &AccountInfo<'info>,
        system_program: &AccountInfo<'info>,
    ) -> Result<u64> {
        let pending = match self.load() {
            Some(mut existing) => {
                existing.credit(amount)?;
                existing
            }
            None => {
                self.create(payer, system_program)?;
                PendingRequest {
                    admin,
                    balance: amount,
                    rent_refund_to: payer.key(),
                    bump: self.bump,
                }
            }
        };
        self.store(&pending)?;
        Ok(pending.balance)
    }

    /// Delete the request, returning its rent to the first payer.
    pub fn remove(&self, pending: &PendingRequest, rent_refund_to: &AccountInfo<'info>) -> Result<()> {
        require_keys_eq!(
            rent_refund_to.key(),
            pending.rent_refund_to,
            RegistrarError::InvalidRentRefundAccount
        );
        close_account(self.account, rent_refund_to)
    }

    fn store(&self, pending: &PendingRequest) -> Result<()> {
        let mut data = self.account.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        pending.try_serialize(&mut writer)
    }

    fn create(&self, payer: &AccountInfo<'info>, system_program: &AccountInfo<'info>) -> Result<()> {
        let space = 8 + PendingRequest::INIT_SPACE;
        let rent_exempt = Rent::get()?.minimum_balance(space);
        let bump = [self.bump];
        let seeds: &[&[u8]] = &[PendingRequest::PREFIX_SEED, &self.commitment, &bump];

        let current_lamports = self.account.lamports();
        if current_lamports == 0 {
            return system_program::create_account(
                CpiContext::new_with_signer(
                    system_program.clone(),
                    CreateAccount {
                        from: payer.clone(),
                        to: self.account.clone(),
                    },
                    &[seeds],
                ),
                rent_exempt,
                space as u64,
                &ID,
            );
        }

        // Someone already sent lamports to the address: top up, allocate, assign
        let shortfall = rent_exempt.saturating_sub(current_lamports);
        if shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: payer.clone(),
                        to: self.account.clone(),
                    },
                ),
                shortfall,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: self.account.clone(),
                },
                &[seeds],
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                Assign {
                    account_to_assign: self.account.clone(),
                },
                &[seeds],
            ),
            &ID,
        )
    }
}
