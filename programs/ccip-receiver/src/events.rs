use anchor_lang::prelude::*;
use ccip_svm_std::Bytes32;
use derive_new::new;

#[event]
#[derive(new)]
pub struct ReceiverInitialized {
    owner: Pubkey,
    router: Pubkey,
}

#[event]
#[derive(new)]
pub struct MessageReceived {
    message_id: Bytes32,
    source_chain_selector: u64,
    sender: Vec<u8>,
    data_length: u64,
    token_count: u8,
}

#[event]
#[derive(new)]
pub struct TokenReceived {
    token: Pubkey,
    amount: u64,
    /// Position in the message's token amounts
    index: u8,
}

#[event]
#[derive(new)]
pub struct TokensForwarded {
    token: Pubkey,
    amount: u64,
    recipient: Pubkey,
}
