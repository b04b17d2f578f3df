//! Stand-in off-ramp that delivers messages to `ccip_receiver` signed by its
//! external execution config PDA.

use anchor_lang::prelude::*;
use anchor_spl::{token, token_2022};
use ccip_svm_std::message::Any2SVMMessage;
use ccip_svm_std::EXTERNAL_EXECUTION_CONFIG_SEED;

declare_id!("EXRMQXrDcYrTPH3Zmh8yRE641ofD635jzPaPgZhFfFZm");

#[program]
pub mod mock_offramp {
    use super::*;

    pub fn execute<'info>(
        ctx: Context<'_, '_, '_, 'info, Execute<'info>>,
        message: Any2SVMMessage,
    ) -> Result<()> {
        let bump = ctx.bumps.authority;
        let receiver = ccip_receiver::ID;
        let signer_seeds: &[&[u8]] = &[EXTERNAL_EXECUTION_CONFIG_SEED, receiver.as_ref(), &[bump]];

        let cpi_accounts = ccip_receiver::cpi::accounts::CcipReceive {
            authority: ctx.accounts.authority.to_account_info(),
            offramp_program: ctx.accounts.offramp_program.to_account_info(),
            allowed_offramp: ctx.accounts.allowed_offramp.to_account_info(),
            state: ctx.accounts.state.to_account_info(),
            messages_storage: ctx.accounts.messages_storage.to_account_info(),
            token_admin: ctx.accounts.token_admin.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
            token_2022_program: ctx.accounts.token_2022_program.to_account_info(),
        };
        let signer_seeds_binding = [signer_seeds];
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.receiver_program.to_account_info(),
            cpi_accounts,
            &signer_seeds_binding,
        )
        .with_remaining_accounts(ctx.remaining_accounts.to_vec());

        ccip_receiver::cpi::ccip_receive(cpi_ctx, message)
    }
}

#[derive(Accounts)]
pub struct Execute<'info> {
    /// CHECK: signs the delivery
    #[account(seeds = [EXTERNAL_EXECUTION_CONFIG_SEED, ccip_receiver::ID.as_ref()], bump)]
    pub authority: UncheckedAccount<'info>,
    /// CHECK: this program
    #[account(address = crate::ID)]
    pub offramp_program: UncheckedAccount<'info>,
    /// CHECK: checked by the receiver
    pub allowed_offramp: UncheckedAccount<'info>,
    /// CHECK: checked by the receiver
    pub state: UncheckedAccount<'info>,
    /// CHECK: checked by the receiver
    #[account(mut)]
    pub messages_storage: UncheckedAccount<'info>,
    /// CHECK: checked by the receiver
    pub token_admin: UncheckedAccount<'info>,
    pub token_program: Program<'info, token::Token>,
    pub token_2022_program: Program<'info, token_2022::Token2022>,
    /// CHECK: address is validated
    #[account(address = ccip_receiver::ID)]
    pub receiver_program: UncheckedAccount<'info>,
}
