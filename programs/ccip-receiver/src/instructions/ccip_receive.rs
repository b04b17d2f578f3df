use anchor_lang::prelude::*;
use anchor_spl::{token, token_2022};
use ccip_svm_std::message::Any2SVMMessage;
use ccip_svm_std::token::{TokenTransferAccounts, VecTokenTransferAccounts};
use ccip_svm_std::{allowed_offramp_pda, external_execution_config_pda, SVMTokenAmount};

use crate::events::{MessageReceived, TokenReceived, TokensForwarded};
use crate::instructions::CcipReceiverError;
use crate::state::{
    token_admin_pda, validate_message, BaseState, MessagesStorage, ReceivedMessage,
    MESSAGES_STORAGE_SEED, STATE_SEED, TOKEN_ADMIN_SEED,
};

#[derive(Accounts)]
#[instruction(message: Any2SVMMessage)]
pub struct CcipReceive<'info> {
    /// Off-ramp PDA that signs every delivery to this program
    #[account(
        address = external_execution_config_pda(&crate::ID, offramp_program.key).0
            @ CcipReceiverError::InvalidCaller,
    )]
    pub authority: Signer<'info>,
    /// CHECK: only used to derive the authority and allowed offramp addresses
    pub offramp_program: UncheckedAccount<'info>,
    /// CHECK: router-owned marker, its existence allows the off-ramp
    #[account(
        owner = state.router @ CcipReceiverError::InvalidCaller,
        address = allowed_offramp_pda(
            message.source_chain_selector,
            offramp_program.key,
            &state.router,
        ).0 @ CcipReceiverError::InvalidCaller,
    )]
    pub allowed_offramp: UncheckedAccount<'info>,
    #[account(seeds = [STATE_SEED], bump)]
    pub state: Account<'info, BaseState>,
    #[account(mut, seeds = [MESSAGES_STORAGE_SEED], bump)]
    pub messages_storage: Account<'info, MessagesStorage>,
    /// CHECK: address is validated
    #[account(address = token_admin_pda().0 @ CcipReceiverError::InvalidTokenAdmin)]
    pub token_admin: UncheckedAccount<'info>,
    pub token_program: Program<'info, token::Token>,
    pub token_2022_program: Program<'info, token_2022::Token2022>,
}

pub fn ccip_receive<'info>(
    ctx: Context<'_, '_, '_, 'info, CcipReceive<'info>>,
    message: Any2SVMMessage,
) -> Result<()> {
    validate_message(&message)?;

    emit!(MessageReceived::new(
        message.message_id,
        message.source_chain_selector,
        message.sender.clone(),
        message.data.len() as u64,
        message.token_amounts.len() as u8,
    ));

    if message.has_tokens() {
        let accounts: VecTokenTransferAccounts = ctx
            .remaining_accounts
            .try_into()
            .map_err(|_| CcipReceiverError::InvalidRemainingAccounts)?;
        forward_tokens(&ctx, accounts, &message.token_amounts)?;
    }

    ctx.accounts
        .messages_storage
        .record(ReceivedMessage::new(message, Clock::get()?.unix_timestamp));

    Ok(())
}

/// Moves each delivered token from the token admin's account to the recipient
/// account given in the matching `(from, to, mint)` triple.
fn forward_tokens<'info>(
    ctx: &Context<'_, '_, '_, 'info, CcipReceive<'info>>,
    accounts: VecTokenTransferAccounts<'info>,
    token_amounts: &[SVMTokenAmount],
) -> Result<()> {
    require!(
        accounts.len() == token_amounts.len(),
        CcipReceiverError::InvalidRemainingAccounts
    );

    accounts
        .into_inner()
        .into_iter()
        .zip(token_amounts)
        .enumerate()
        .try_for_each(|(index, (accounts, token_amount))| {
            forward_token(ctx, accounts, token_amount, index as u8)
        })
}

fn forward_token<'info>(
    ctx: &Context<'_, '_, '_, 'info, CcipReceive<'info>>,
    accounts: TokenTransferAccounts<'info>,
    token_amount: &SVMTokenAmount,
    index: u8,
) -> Result<()> {
    require_keys_eq!(
        *accounts.mint.key,
        token_amount.token,
        CcipReceiverError::InvalidRemainingAccounts
    );
    require_keys_eq!(
        accounts.from_data()?.owner,
        ctx.accounts.token_admin.key(),
        CcipReceiverError::InvalidTokenAccountOwner
    );

    emit!(TokenReceived::new(
        token_amount.token,
        token_amount.amount,
        index
    ));

    let token_program =
        accounts.token_program(&ctx.accounts.token_program, &ctx.accounts.token_2022_program)?;
    let bump = token_admin_pda().1;
    let signer_seeds = [TOKEN_ADMIN_SEED, &[bump]];

    accounts.transfer_with_signer(
        &token_program,
        &ctx.accounts.token_admin,
        &[&signer_seeds],
        token_amount.amount,
    )?;

    emit!(TokensForwarded::new(
        token_amount.token,
        token_amount.amount,
        accounts.to.key(),
    ));

    Ok(())
}
