use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::native_mint;
use ccip_svm_std::{Bytes32, SVMTokenAmount};
use tiny_keccak::{Hasher, Keccak};

use crate::instructions::CcipRouterError;
use crate::state::{CodeVersion, Config, DestChainConfig};

pub const MAX_RECEIVER_LEN: usize = 64;

const SVM_2_ANY_MESSAGE_HASH_PREFIX: &[u8] = b"SVM2AnyMessageHashV1";

/// Outbound message as submitted by the sender.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SVM2AnyMessage {
    /// Receiver address in the destination chain's encoding
    pub receiver: Vec<u8>,
    pub data: Vec<u8>,
    pub token_amounts: Vec<SVMTokenAmount>,
    /// `Pubkey::default()` pays in native SOL
    pub fee_token: Pubkey,
    pub extra_args: Vec<u8>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RampMessageHeader {
    pub message_id: Bytes32,
    pub source_chain_selector: u64,
    pub dest_chain_selector: u64,
    pub sequence_number: u64,
    pub nonce: u64,
}

/// Outbound message stamped with its lane position, as emitted by `ccip_send`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SVM2AnyRampMessage {
    pub header: RampMessageHeader,
    pub sender: Pubkey,
    pub data: Vec<u8>,
    pub receiver: Vec<u8>,
    pub extra_args: Vec<u8>,
    pub fee_token: Pubkey,
    pub token_amounts: Vec<SVMTokenAmount>,
    pub code_version: CodeVersion,
}

impl SVM2AnyMessage {
    /// Mint the fee is paid in, with native SOL resolved to the wrapped-SOL mint.
    pub fn fee_token_mint(&self) -> Pubkey {
        match self.fee_token {
            fee_token if fee_token == Pubkey::default() => native_mint::ID,
            fee_token => fee_token,
        }
    }

    /// Checks everything about the message that does not depend on token
    /// account contents.
    pub fn validate(
        &self,
        config: &Config,
        dest_chain_config: &DestChainConfig,
        sender: &Pubkey,
        fee_token_mint: &Pubkey,
        transfer_all: bool,
    ) -> Result<()> {
        require!(
            dest_chain_config.is_sender_allowed(sender),
            CcipRouterError::SenderNotAllowed
        );
        require!(
            !self.receiver.is_empty() && self.receiver.len() <= MAX_RECEIVER_LEN,
            CcipRouterError::InvalidInputsReceiver
        );

        let fee_mint = self.fee_token_mint();
        require_keys_eq!(fee_mint, *fee_token_mint, CcipRouterError::FeeTokenMismatch);
        require!(
            fee_mint == native_mint::ID || fee_mint == config.link_token_mint,
            CcipRouterError::FeeTokenMismatch
        );

        self.token_amounts
            .iter()
            .try_for_each(|token_amount| match (transfer_all, token_amount.amount) {
                (false, 0) => Err(CcipRouterError::InvalidInputsTokenAmount.into()),
                (true, amount) if amount > 0 => {
                    Err(CcipRouterError::InvalidInputsTransferAllAmount.into())
                }
                _ => Ok(()),
            })
    }

    /// Stamps the message with its header and computes the message id.
    pub fn into_ramp_message(
        self,
        header: RampMessageHeader,
        sender: Pubkey,
        token_amounts: Vec<SVMTokenAmount>,
        code_version: CodeVersion,
    ) -> SVM2AnyRampMessage {
        let mut message = SVM2AnyRampMessage {
            header,
            sender,
            data: self.data,
            receiver: self.receiver,
            extra_args: self.extra_args,
            fee_token: self.fee_token,
            token_amounts,
            code_version,
        };
        message.header.message_id = message.hash();

        message
    }
}

impl SVM2AnyRampMessage {
    /// Keccak-256 over the header fields other than the id, then the body.
    pub fn hash(&self) -> Bytes32 {
        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];

        hasher.update(SVM_2_ANY_MESSAGE_HASH_PREFIX);
        hasher.update(&self.header.source_chain_selector.to_le_bytes());
        hasher.update(&self.header.dest_chain_selector.to_le_bytes());
        hasher.update(&self.header.sequence_number.to_le_bytes());
        hasher.update(&self.header.nonce.to_le_bytes());
        hasher.update(self.sender.as_ref());
        update_with_bytes(&mut hasher, &self.data);
        update_with_bytes(&mut hasher, &self.receiver);
        update_with_bytes(&mut hasher, &self.extra_args);
        hasher.update(self.fee_token.as_ref());
        hasher.update(&(self.token_amounts.len() as u32).to_le_bytes());
        self.token_amounts.iter().for_each(|token_amount| {
            hasher.update(token_amount.token.as_ref());
            hasher.update(&token_amount.amount.to_le_bytes());
        });
        hasher.update(&[self.code_version as u8]);
        hasher.finalize(&mut hash);

        hash.into()
    }
}

fn update_with_bytes(hasher: &mut Keccak, bytes: &[u8]) {
    hasher.update(&(bytes.len() as u32).to_le_bytes());
    hasher.update(bytes);
}
