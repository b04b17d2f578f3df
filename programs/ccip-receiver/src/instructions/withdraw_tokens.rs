use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::instructions::CcipReceiverError;
use crate::state::{token_admin_pda, BaseState, STATE_SEED, TOKEN_ADMIN_SEED};

#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    #[account(
        seeds = [STATE_SEED],
        bump,
        has_one = owner @ CcipReceiverError::Unauthorized,
    )]
    pub state: Account<'info, BaseState>,
    #[account(
        mut,
        token::mint = mint,
        token::authority = token_admin,
        token::token_program = token_program,
    )]
    pub program_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
    )]
    pub to_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,
    /// CHECK: address is validated
    #[account(address = token_admin_pda().0 @ CcipReceiverError::InvalidTokenAdmin)]
    pub token_admin: UncheckedAccount<'info>,
    pub owner: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64, decimals: u8) -> Result<()> {
    let bump = token_admin_pda().1;
    let signer_seeds = [TOKEN_ADMIN_SEED, &[bump]];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.program_token_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.to_token_account.to_account_info(),
                authority: ctx.accounts.token_admin.to_account_info(),
            },
            &[&signer_seeds],
        ),
        amount,
        decimals,
    )?;

    msg!(
        "Withdrew {} tokens to {}",
        amount,
        ctx.accounts.to_token_account.key()
    );

    Ok(())
}
