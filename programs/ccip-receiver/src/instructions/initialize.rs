use anchor_lang::prelude::*;

use crate::events::ReceiverInitialized;
use crate::state::{BaseState, MessagesStorage, MESSAGES_STORAGE_SEED, STATE_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + BaseState::INIT_SPACE,
        seeds = [STATE_SEED],
        bump,
    )]
    pub state: Account<'info, BaseState>,
    #[account(
        init,
        payer = authority,
        space = 8 + MessagesStorage::INIT_SPACE,
        seeds = [MESSAGES_STORAGE_SEED],
        bump,
    )]
    pub messages_storage: Account<'info, MessagesStorage>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, router: Pubkey) -> Result<()> {
    let owner = ctx.accounts.authority.key();

    ctx.accounts.state.set_inner(BaseState { owner, router });
    ctx.accounts.messages_storage.set_inner(MessagesStorage {
        last_updated: Clock::get()?.unix_timestamp,
        ..Default::default()
    });

    emit!(ReceiverInitialized::new(owner, router));

    Ok(())
}
