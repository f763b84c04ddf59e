use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::Instruction,
    sysvar::instructions::{load_current_index_checked, load_instruction_at_checked},
};
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{
    constants::{
        TRANSFER_AUTHORITY_INDEX, TRANSFER_CHECKED_DISCRIMINATOR, TRANSFER_DESTINATION_INDEX,
        TRANSFER_MINT_INDEX,
    },
    error::RegistrarError,
    state::{Config, TransferCallbackPayload},
    ID,
};

/// Token vault holding escrowed funding. The config PDA is the vault authority.
pub struct Escrow<'info> {
    pub vault: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub decimals: u8,
    pub authority: AccountInfo<'info>,
    pub authority_bump: u8,
    pub token_program: AccountInfo<'info>,
}

impl<'info> Escrow<'info> {
    pub fn new(
        vault: &InterfaceAccount<'info, TokenAccount>,
        mint: &InterfaceAccount<'info, Mint>,
        config: &Account<'info, Config>,
        token_program: &Interface<'info, TokenInterface>,
    ) -> Self {
        Self {
            vault: vault.to_account_info(),
            mint: mint.to_account_info(),
            decimals: mint.decimals,
            authority: config.to_account_info(),
            authority_bump: config.bump,
            token_program: token_program.to_account_info(),
        }
    }

    /// Pull `amount` from `from` into the vault. `owner` must sign.
    pub fn pull(&self, from: AccountInfo<'info>, owner: AccountInfo<'info>, amount: u64) -> Result<()> {
        transfer_checked(
            CpiContext::new(
                self.token_program.clone(),
                TransferChecked {
                    from,
                    mint: self.mint.clone(),
                    to: self.vault.clone(),
                    authority: owner,
                },
            ),
            amount,
            self.decimals,
        )
    }

    /// Push `amount` out of the vault, signed by the config PDA.
    pub fn release(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        let bump = [self.authority_bump];
        let seeds: &[&[u8]] = &[Config::PREFIX_SEED, &bump];
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                TransferChecked {
                    from: self.vault.clone(),
                    mint: self.mint.clone(),
                    to,
                    authority: self.authority.clone(),
                },
                &[seeds],
            ),
            amount,
            self.decimals,
        )
    }
}

/// A `TransferChecked` of the funding mint into the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingTransfer {
    pub amount: u64,
    pub authority: Pubkey,
}

impl FundingTransfer {
    pub fn parse(
        ix: &Instruction,
        token_program: &Pubkey,
        mint: &Pubkey,
        vault: &Pubkey,
    ) -> Result<Self> {
        require_keys_eq!(
            ix.program_id,
            *token_program,
            RegistrarError::OnlyFundingToken
        );
        require!(
            ix.data.first() == Some(&TRANSFER_CHECKED_DISCRIMINATOR),
            RegistrarError::OnlyFundingToken
        );
        let amount_bytes = ix
            .data
            .get(1..9)
            .ok_or(RegistrarError::OnlyFundingToken)?;
        let amount = u64::from_le_bytes(
            amount_bytes
                .try_into()
                .map_err(|_| RegistrarError::OnlyFundingToken)?,
        );

        let account_at = |index: usize| -> Result<Pubkey> {
            ix.accounts
                .get(index)
                .map(|meta| meta.pubkey)
                .ok_or_else(|| error!(RegistrarError::OnlyFundingToken))
        };
        require_keys_eq!(
            account_at(TRANSFER_MINT_INDEX)?,
            *mint,
            RegistrarError::OnlyFundingToken
        );
        require_keys_eq!(
            account_at(TRANSFER_DESTINATION_INDEX)?,
            *vault,
            RegistrarError::OnlyFundingToken
        );

        Ok(Self {
            amount,
            authority: account_at(TRANSFER_AUTHORITY_INDEX)?,
        })
    }

    /// The payload must describe exactly this transfer.
    pub fn verify_against(&self, payload: &TransferCallbackPayload) -> Result<()> {
        require!(
            self.amount == payload.params.amount,
            RegistrarError::AmountMismatch
        );
        require_keys_eq!(
            self.authority,
            payload.sender,
            RegistrarError::SenderMismatch
        );
        Ok(())
    }
}

/// Locate the funding transfer that must immediately precede the current
/// top-level instruction. Rejects invocation through CPI, since every CPI from
/// one top-level instruction would see the same preceding transfer.
pub fn inspect_funding_transfer(
    ix_sysvar: &AccountInfo,
    token_program: &Pubkey,
    mint: &Pubkey,
    vault: &Pubkey,
) -> Result<FundingTransfer> {
    let current_index = load_current_index_checked(ix_sysvar)? as usize;
    let current = load_instruction_at_checked(current_index, ix_sysvar)?;
    require_keys_eq!(current.program_id, ID, RegistrarError::OnlyFundingToken);

    let previous_index = current_index
        .checked_sub(1)
        .ok_or(RegistrarError::OnlyFundingToken)?;
    let previous = load_instruction_at_checked(previous_index, ix_sysvar)?;
    FundingTransfer::parse(&previous, token_program, mint, vault)
}
