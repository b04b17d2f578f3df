use anchor_lang::prelude::*;
use anchor_spl::{associated_token, token, token_2022};
use ccip_svm_std::token::VecTokenTransferAccounts;
use ccip_svm_std::Bytes32;

use crate::events::CcipMessageSent;
use crate::instructions::token_pool::LockTokenContext;
use crate::instructions::CcipRouterError;
use crate::message::{RampMessageHeader, SVM2AnyMessage};
use crate::rmn::Curses;
use crate::state::{
    Config, DestChain, Nonce, CONFIG_SEED, DEST_CHAIN_STATE_SEED, NONCE_SEED,
    TOKEN_POOL_SIGNER_SEED,
};

#[derive(Accounts)]
#[instruction(dest_chain_selector: u64)]
pub struct CcipSend<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump,
        constraint = config.has_valid_version() @ CcipRouterError::InvalidVersion,
    )]
    pub config: Account<'info, Config>,
    #[account(
        mut,
        seeds = [DEST_CHAIN_STATE_SEED, dest_chain_selector.to_le_bytes().as_ref()],
        bump,
        constraint = dest_chain.has_valid_version() @ CcipRouterError::InvalidVersion,
    )]
    pub dest_chain: Account<'info, DestChain>,
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Nonce::INIT_SPACE,
        seeds = [
            NONCE_SEED,
            dest_chain_selector.to_le_bytes().as_ref(),
            authority.key().as_ref(),
        ],
        bump,
    )]
    pub nonce: Account<'info, Nonce>,
    #[account(mut)]
    pub authority: Signer<'info>,
    /// CHECK: compared against the fee token of the message
    pub fee_token_mint: UncheckedAccount<'info>,
    /// CHECK: address is validated, contents are read by `Curses`
    #[account(
        address = Curses::pda(&config.rmn_remote).0 @ CcipRouterError::InvalidRmnRemoteCurses,
    )]
    pub rmn_remote_curses: UncheckedAccount<'info>,
    /// CHECK: owns the token accounts tokens are locked in, never signs
    #[account(seeds = [TOKEN_POOL_SIGNER_SEED], bump)]
    pub token_pool_signer: UncheckedAccount<'info>,
    pub token_program: Program<'info, token::Token>,
    pub token_2022_program: Program<'info, token_2022::Token2022>,
    pub associated_token_program: Program<'info, associated_token::AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn ccip_send<'info>(
    ctx: Context<'_, '_, '_, 'info, CcipSend<'info>>,
    dest_chain_selector: u64,
    message: SVM2AnyMessage,
    transfer_all: bool,
) -> Result<Bytes32> {
    let sender = ctx.accounts.authority.key();
    let config = &ctx.accounts.config;
    let dest_chain = &ctx.accounts.dest_chain;

    require!(
        dest_chain.config.is_enabled,
        CcipRouterError::DestinationChainDisabled
    );
    Curses::try_from_account_info(&ctx.accounts.rmn_remote_curses, &config.rmn_remote)?
        .verify_uncursed(dest_chain_selector)?;
    message.validate(
        config,
        &dest_chain.config,
        &sender,
        ctx.accounts.fee_token_mint.key,
        transfer_all,
    )?;

    let token_accounts: VecTokenTransferAccounts = ctx.remaining_accounts.try_into()?;
    let token_amounts = LockTokenContext::from(&ctx).resolve_token_amounts(
        &token_accounts,
        &message.token_amounts,
        transfer_all,
    )?;
    let code_version = dest_chain.code_version(config);
    let source_chain_selector = config.svm_chain_selector;

    let sequence_number = ctx.accounts.dest_chain.state.next_sequence_number()?;
    let nonce = ctx.accounts.nonce.next()?;

    LockTokenContext::from(&ctx).lock_tokens(token_accounts, &token_amounts)?;

    let header = RampMessageHeader {
        message_id: Bytes32::default(),
        source_chain_selector,
        dest_chain_selector,
        sequence_number,
        nonce,
    };
    let ramp_message = message.into_ramp_message(header, sender, token_amounts, code_version);
    let message_id = ramp_message.header.message_id;

    emit!(CcipMessageSent::new(
        dest_chain_selector,
        sequence_number,
        message_id,
        ramp_message,
    ));

    Ok(message_id)
}
