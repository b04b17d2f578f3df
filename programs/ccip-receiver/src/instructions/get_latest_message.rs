use anchor_lang::prelude::*;

use crate::state::{MessagesStorage, ReceivedMessage, MESSAGES_STORAGE_SEED};

#[derive(Accounts)]
pub struct GetLatestMessage<'info> {
    #[account(seeds = [MESSAGES_STORAGE_SEED], bump)]
    pub messages_storage: Account<'info, MessagesStorage>,
}

pub fn get_latest_message(ctx: Context<GetLatestMessage>) -> Result<ReceivedMessage> {
    Ok(ctx.accounts.messages_storage.latest_message.clone())
}
