use anchor_lang::prelude::*;

use crate::{
    commitment::{compute_commitment, Commitment},
    error::RegistrarError,
    utils::sighash,
};

/// A registration request as submitted by a caller.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegistrationParams {
    pub name: String,
    /// Optional contact, empty when absent. Emitted but never stored.
    pub encrypted_email: Vec<u8>,
    pub target: Pubkey,
    pub gas_limit: u32,
    pub admin: Pubkey,
    pub check_data: Vec<u8>,
    pub offchain_config: Vec<u8>,
    /// Amount of funding token moved into escrow with this request
    pub amount: u64,
}

impl RegistrationParams {
    pub fn commitment(&self) -> Commitment {
        compute_commitment(&self.target, self.gas_limit, &self.admin, &self.check_data)
    }
}

/// Payload carried alongside a funding transfer. `sender` must be the
/// authority of that transfer.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransferCallbackPayload {
    pub params: RegistrationParams,
    pub sender: Pubkey,
}

impl TransferCallbackPayload {
    /// Selector of the only function a transfer callback may target
    pub fn selector() -> [u8; 8] {
        sighash("global", "register")
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut data = Self::selector().to_vec();
        self.serialize(&mut data)
            .map_err(|_| error!(RegistrarError::InvalidDataLength))?;
        Ok(data)
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        require!(data.len() >= 8, RegistrarError::InvalidDataLength);
        require!(
            data[..8] == Self::selector(),
            RegistrarError::FunctionNotPermitted
        );
        Self::try_from_slice(&data[8..]).map_err(|_| error!(RegistrarError::InvalidDataLength))
    }
}

/// The payload the owner reveals when approving a pending request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApprovalParams {
    pub name: String,
    pub target: Pubkey,
    pub gas_limit: u32,
    pub admin: Pubkey,
    pub check_data: Vec<u8>,
    pub offchain_config: Vec<u8>,
}

impl ApprovalParams {
    pub fn commitment(&self) -> Commitment {
        compute_commitment(&self.target, self.gas_limit, &self.admin, &self.check_data)
    }
}

impl From<&RegistrationParams> for ApprovalParams {
    fn from(params: &RegistrationParams) -> Self {
        Self {
            name: params.name.clone(),
            target: params.target,
            gas_limit: params.gas_limit,
            admin: params.admin,
            check_data: params.check_data.clone(),
            offchain_config: params.offchain_config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RegistrationParams {
        RegistrationParams {
            name: "SampleUpkeep".to_string(),
            encrypted_email: vec![],
            target: Pubkey::new_unique(),
            gas_limit: 100_000,
            admin: Pubkey::new_unique(),
            check_data: vec![0x00],
            offchain_config: vec![0x01, 0x23, 0x45, 0x67],
            amount: 5_000_000_000_000_000_000,
        }
    }

    fn approval_for(params: &RegistrationParams) -> ApprovalParams {
        ApprovalParams::from(params)
    }

    #[test]
    fn callback_payload_decodes_what_it_encodes() {
        let payload = TransferCallbackPayload {
            params: params(),
            sender: Pubkey::new_unique(),
        };
        let data = payload.encode().unwrap();
        assert_eq!(&data[..8], &TransferCallbackPayload::selector()[..]);
        assert_eq!(TransferCallbackPayload::decode(&data).unwrap(), payload);
    }

    #[test]
    fn callback_payload_must_target_register() {
        let payload = TransferCallbackPayload {
            params: params(),
            sender: Pubkey::new_unique(),
        };
        let mut data = payload.encode().unwrap();
        data[..8].copy_from_slice(&sighash("global", "approve"));
        assert_eq!(
            TransferCallbackPayload::decode(&data).unwrap_err(),
            RegistrarError::FunctionNotPermitted.into()
        );
    }

    #[test]
    fn callback_payload_rejects_short_or_trailing_data() {
        assert_eq!(
            TransferCallbackPayload::decode(&[0x01, 0x02]).unwrap_err(),
            RegistrarError::InvalidDataLength.into()
        );

        let selector_only = TransferCallbackPayload::selector().to_vec();
        assert_eq!(
            TransferCallbackPayload::decode(&selector_only).unwrap_err(),
            RegistrarError::InvalidDataLength.into()
        );

        let mut trailing = TransferCallbackPayload {
            params: params(),
            sender: Pubkey::new_unique(),
        }
        .encode()
        .unwrap();
        trailing.push(0xff);
        assert_eq!(
            TransferCallbackPayload::decode(&trailing).unwrap_err(),
            RegistrarError::InvalidDataLength.into()
        );
    }

    #[test]
    fn approval_payload_reconstructs_the_intake_commitment() {
        let params = params();
        assert_eq!(approval_for(&params).commitment(), params.commitment());
    }

    #[test]
    fn uncommitted_fields_do_not_change_the_commitment() {
        let base = params();
        let mut other = base.clone();
        other.amount = 6_000_000_000_000_000_000;
        other.name = "Renamed".to_string();
        other.encrypted_email = vec![0xaa; 16];
        other.offchain_config = vec![];
        assert_eq!(other.commitment(), base.commitment());

        let mut approval = approval_for(&base);
        approval.offchain_config = vec![0xff];
        approval.name = String::new();
        assert_eq!(approval.commitment(), base.commitment());
    }

    #[test]
    fn each_committed_field_changes_the_commitment() {
        let base = params();
        let expected = base.commitment();

        let mut approval = approval_for(&base);
        approval.target = Pubkey::new_unique();
        assert_ne!(approval.commitment(), expected);

        let mut approval = approval_for(&base);
        approval.gas_limit = 10_000;
        assert_ne!(approval.commitment(), expected);

        let mut approval = approval_for(&base);
        approval.admin = Pubkey::new_unique();
        assert_ne!(approval.commitment(), expected);

        let mut approval = approval_for(&base);
        approval.check_data = vec![0x12, 0x34];
        assert_ne!(approval.commitment(), expected);
    }
}
