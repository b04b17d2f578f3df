//! # CCIP Receiver Program
//!
//! Minimal destination-side application for the CCIP router. An off-ramp that
//! the router allows for the message's source chain delivers messages through
//! `ccip_receive`. The program keeps the latest one, forwards any delivered
//! tokens to the recipients named in the remaining accounts and exposes the
//! stored message through `get_latest_message`.

use anchor_lang::prelude::*;
use ccip_svm_std::message::Any2SVMMessage;

declare_id!("671b2A65jR5QxwYFSuEMBhQ6bWJKkGMheEp3ReWC9WnB");

pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::ReceivedMessage;

#[program]
pub mod ccip_receiver {
    use super::*;

    /// Creates the receiver state with the signer as owner and `router` as
    /// the router trusted to allow off-ramps.
    pub fn initialize(ctx: Context<Initialize>, router: Pubkey) -> Result<()> {
        instructions::initialize(ctx, router)
    }

    /// Accepts a message delivered by an allowed off-ramp.
    ///
    /// Remaining accounts are `(from, to, mint)` triples, one per delivered
    /// token, where `from` is owned by the token admin PDA.
    pub fn ccip_receive<'info>(
        ctx: Context<'_, '_, '_, 'info, CcipReceive<'info>>,
        message: Any2SVMMessage,
    ) -> Result<()> {
        instructions::ccip_receive(ctx, message)
    }

    pub fn get_latest_message(ctx: Context<GetLatestMessage>) -> Result<ReceivedMessage> {
        instructions::get_latest_message(ctx)
    }

    /// Transfers tokens held by the token admin PDA. Owner only.
    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64, decimals: u8) -> Result<()> {
        instructions::withdraw_tokens(ctx, amount, decimals)
    }
}
