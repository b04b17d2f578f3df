use anchor_lang::prelude::*;
use ccip_svm_std::message::Any2SVMMessage;
use ccip_svm_std::{Bytes32, SVMTokenAmount};

use crate::instructions::CcipReceiverError;

pub const STATE_SEED: &[u8] = b"state";
pub const MESSAGES_STORAGE_SEED: &[u8] = b"messages_storage";
pub const TOKEN_ADMIN_SEED: &[u8] = b"token_admin";

pub const MAX_MESSAGE_DATA_SIZE: usize = 1024;
pub const MAX_TOKEN_AMOUNTS: usize = 10;
pub const MAX_SENDER_ADDRESS_SIZE: usize = 64;

/// Authority over tokens delivered to this receiver.
pub fn token_admin_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_ADMIN_SEED], &crate::ID)
}

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct BaseState {
    pub owner: Pubkey,
    /// Router whose allowed off-ramps may deliver messages
    pub router: Pubkey,
}

impl BaseState {
    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[STATE_SEED], &crate::ID)
    }
}

#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum MessageType {
    #[default]
    TokenTransfer,
    ArbitraryMessaging,
    ProgrammaticTokenTransfer,
}

impl From<&Any2SVMMessage> for MessageType {
    fn from(message: &Any2SVMMessage) -> Self {
        match (message.has_data(), message.has_tokens()) {
            (true, true) => MessageType::ProgrammaticTokenTransfer,
            (true, false) => MessageType::ArbitraryMessaging,
            (false, _) => MessageType::TokenTransfer,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub message_id: Bytes32,
    pub message_type: MessageType,
    #[max_len(MAX_MESSAGE_DATA_SIZE)]
    pub data: Vec<u8>,
    #[max_len(MAX_TOKEN_AMOUNTS)]
    pub token_amounts: Vec<SVMTokenAmount>,
    pub received_timestamp: i64,
    pub source_chain_selector: u64,
    #[max_len(MAX_SENDER_ADDRESS_SIZE)]
    pub sender: Vec<u8>,
}

impl ReceivedMessage {
    pub fn new(message: Any2SVMMessage, received_timestamp: i64) -> Self {
        Self {
            message_type: MessageType::from(&message),
            message_id: message.message_id,
            data: message.data,
            token_amounts: message.token_amounts,
            received_timestamp,
            source_chain_selector: message.source_chain_selector,
            sender: message.sender,
        }
    }
}

#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct MessagesStorage {
    pub last_updated: i64,
    pub message_count: u64,
    pub latest_message: ReceivedMessage,
}

impl MessagesStorage {
    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[MESSAGES_STORAGE_SEED], &crate::ID)
    }

    pub fn record(&mut self, message: ReceivedMessage) {
        self.last_updated = message.received_timestamp;
        self.message_count = self.message_count.saturating_add(1);
        self.latest_message = message;
    }
}

/// Rejects messages that would not fit in `MessagesStorage`.
pub fn validate_message(message: &Any2SVMMessage) -> Result<()> {
    if message.data.len() > MAX_MESSAGE_DATA_SIZE {
        msg!(
            "Message data size {} exceeds {}",
            message.data.len(),
            MAX_MESSAGE_DATA_SIZE
        );
        return Err(CcipReceiverError::MessageDataTooLarge.into());
    }
    if message.token_amounts.len() > MAX_TOKEN_AMOUNTS {
        msg!(
            "Token amount count {} exceeds {}",
            message.token_amounts.len(),
            MAX_TOKEN_AMOUNTS
        );
        return Err(CcipReceiverError::TooManyTokens.into());
    }
    if message.sender.len() > MAX_SENDER_ADDRESS_SIZE {
        msg!(
            "Sender address size {} exceeds {}",
            message.sender.len(),
            MAX_SENDER_ADDRESS_SIZE
        );
        return Err(CcipReceiverError::SenderAddressTooLarge.into());
    }

    Ok(())
}
