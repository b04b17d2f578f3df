use anchor_lang::prelude::*;

use crate::{Bytes32, SVMTokenAmount};

/// Message delivered by an off-ramp to a receiver program on this chain.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Any2SVMMessage {
    pub message_id: Bytes32,
    pub source_chain_selector: u64,
    /// Sender address on the source chain, in that chain's encoding
    pub sender: Vec<u8>,
    pub data: Vec<u8>,
    pub token_amounts: Vec<SVMTokenAmount>,
}

impl Any2SVMMessage {
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    pub fn has_tokens(&self) -> bool {
        !self.token_amounts.is_empty()
    }
}
