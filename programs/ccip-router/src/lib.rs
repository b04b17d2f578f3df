//! # CCIP Router Program
//!
//! On-chain entry point for cross-chain messages leaving this chain.
//!
//! Every destination chain (lane) owns a `DestChain` account holding a
//! monotonic sequence number that orders the messages sent on it, the code
//! version handling the lane, and a one-level restore point that lets the
//! owner undo a version bump.
//!
//! ## Instructions
//!
//! - `initialize`, `transfer_ownership`, `accept_ownership` and the config
//!   setters manage the singleton `Config` account
//! - `add_chain_selector`, `update_dest_chain_config`, `update_allow_list`
//!   manage lanes
//! - `bump_ccip_version_for_dest_chain` and
//!   `rollback_ccip_version_for_dest_chain` drive the lane version state machine
//! - `add_offramp` and `remove_offramp` manage the markers receivers check
//!   before accepting a delivered message
//! - `ccip_send` validates an outbound message, assigns it the next sequence
//!   number and the sender's next nonce, locks its tokens and emits it

use anchor_lang::prelude::*;
use ccip_svm_std::Bytes32;

declare_id!("G91n3QSixsfG1iiGZg6gkkgvXqJzZSW9XpYER5hXSdFu");

pub mod events;
pub mod instructions;
pub mod message;
pub mod rmn;
pub mod state;

use events::ConfigAddress;
use instructions::*;
use message::SVM2AnyMessage;
use state::{CodeVersion, DestChainConfig};

#[program]
pub mod ccip_router {
    use super::*;

    /// Creates the router config with the signer as owner.
    pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        instructions::initialize(ctx, args)
    }

    /// Proposes a new owner, who must call `accept_ownership` to take over.
    pub fn transfer_ownership(ctx: Context<UpdateConfig>, proposed_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, proposed_owner)
    }

    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        instructions::accept_ownership(ctx)
    }

    /// Sets the code version used by lanes that do not pin their own.
    pub fn set_default_code_version(
        ctx: Context<UpdateConfig>,
        code_version: CodeVersion,
    ) -> Result<()> {
        instructions::set_default_code_version(ctx, code_version)
    }

    pub fn update_fee_aggregator(ctx: Context<UpdateConfig>, fee_aggregator: Pubkey) -> Result<()> {
        update_config_address(ctx, ConfigAddress::FeeAggregator, fee_aggregator)
    }

    pub fn update_rmn_remote(ctx: Context<UpdateConfig>, rmn_remote: Pubkey) -> Result<()> {
        update_config_address(ctx, ConfigAddress::RmnRemote, rmn_remote)
    }

    pub fn update_fee_quoter(ctx: Context<UpdateConfig>, fee_quoter: Pubkey) -> Result<()> {
        update_config_address(ctx, ConfigAddress::FeeQuoter, fee_quoter)
    }

    pub fn set_link_token_mint(ctx: Context<UpdateConfig>, link_token_mint: Pubkey) -> Result<()> {
        update_config_address(ctx, ConfigAddress::LinkTokenMint, link_token_mint)
    }

    /// Opens a lane with a zeroed sequence number.
    pub fn add_chain_selector(
        ctx: Context<AddChainSelector>,
        dest_chain_selector: u64,
        dest_chain_config: DestChainConfig,
    ) -> Result<()> {
        instructions::add_chain_selector(ctx, dest_chain_selector, dest_chain_config)
    }

    pub fn update_dest_chain_config(
        ctx: Context<UpdateDestChain>,
        dest_chain_selector: u64,
        dest_chain_config: DestChainConfig,
    ) -> Result<()> {
        instructions::update_dest_chain_config(ctx, dest_chain_selector, dest_chain_config)
    }

    pub fn update_allow_list(
        ctx: Context<UpdateDestChain>,
        dest_chain_selector: u64,
        args: UpdateAllowListArgs,
    ) -> Result<()> {
        instructions::update_allow_list(ctx, dest_chain_selector, args)
    }

    /// Starts a new sequence for the lane, remembering the current one so a
    /// single `rollback_ccip_version_for_dest_chain` can restore it.
    ///
    /// # Events
    /// Emits `CcipVersionForDestChainVersionBumped` with the sequence number
    /// before the bump.
    pub fn bump_ccip_version_for_dest_chain(
        ctx: Context<UpdateDestChain>,
        dest_chain_selector: u64,
    ) -> Result<()> {
        instructions::bump_ccip_version_for_dest_chain(ctx, dest_chain_selector)
    }

    /// Restores the sequence number saved by the last bump. Fails unless the
    /// previous version transition of the lane was a bump.
    pub fn rollback_ccip_version_for_dest_chain(
        ctx: Context<UpdateDestChain>,
        dest_chain_selector: u64,
    ) -> Result<()> {
        instructions::rollback_ccip_version_for_dest_chain(ctx, dest_chain_selector)
    }

    pub fn add_offramp(
        ctx: Context<AddOfframp>,
        source_chain_selector: u64,
        offramp: Pubkey,
    ) -> Result<()> {
        instructions::add_offramp(ctx, source_chain_selector, offramp)
    }

    pub fn remove_offramp(
        ctx: Context<RemoveOfframp>,
        source_chain_selector: u64,
        offramp: Pubkey,
    ) -> Result<()> {
        instructions::remove_offramp(ctx, source_chain_selector, offramp)
    }

    /// Sends `message` to `dest_chain_selector` and returns its message id.
    ///
    /// Remaining accounts are `(from, to, mint)` triples, one per entry of
    /// `message.token_amounts`, where `to` is the token pool signer's
    /// associated token account for `mint`.
    pub fn ccip_send<'info>(
        ctx: Context<'_, '_, '_, 'info, CcipSend<'info>>,
        dest_chain_selector: u64,
        message: SVM2AnyMessage,
        transfer_all: bool,
    ) -> Result<Bytes32> {
        instructions::ccip_send(ctx, dest_chain_selector, message, transfer_all)
    }
}
