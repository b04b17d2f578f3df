use anchor_lang::prelude::*;
use ccip_svm_std::Bytes32;
use derive_new::new;

use crate::message::SVM2AnyRampMessage;
use crate::state::{CodeVersion, DestChainConfig};

/// Config field targeted by an address update.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigAddress {
    FeeQuoter,
    RmnRemote,
    LinkTokenMint,
    FeeAggregator,
}

#[event]
#[derive(new)]
pub struct ConfigInitialized {
    owner: Pubkey,
    svm_chain_selector: u64,
    default_code_version: CodeVersion,
}

#[event]
#[derive(new)]
pub struct OwnershipTransferRequested {
    from: Pubkey,
    to: Pubkey,
}

#[event]
#[derive(new)]
pub struct OwnershipTransferred {
    from: Pubkey,
    to: Pubkey,
}

#[event]
#[derive(new)]
pub struct DefaultCodeVersionSet {
    previous: CodeVersion,
    updated: CodeVersion,
}

#[event]
#[derive(new)]
pub struct ConfigAddressUpdated {
    field: ConfigAddress,
    previous: Pubkey,
    updated: Pubkey,
}

#[event]
#[derive(new)]
pub struct DestChainAdded {
    dest_chain_selector: u64,
    dest_chain_config: DestChainConfig,
}

#[event]
#[derive(new)]
pub struct DestChainConfigUpdated {
    dest_chain_selector: u64,
    dest_chain_config: DestChainConfig,
}

#[event]
#[derive(new)]
pub struct CcipVersionForDestChainVersionBumped {
    dest_chain_selector: u64,
    previous_sequence_number: u64,
}

#[event]
#[derive(new)]
pub struct CcipVersionForDestChainVersionRolledBack {
    dest_chain_selector: u64,
    previous_sequence_number: u64,
}

#[event]
#[derive(new)]
pub struct OfframpAdded {
    source_chain_selector: u64,
    offramp: Pubkey,
}

#[event]
#[derive(new)]
pub struct OfframpRemoved {
    source_chain_selector: u64,
    offramp: Pubkey,
}

#[event]
#[derive(new)]
pub struct CcipMessageSent {
    dest_chain_selector: u64,
    sequence_number: u64,
    message_id: Bytes32,
    message: SVM2AnyRampMessage,
}
