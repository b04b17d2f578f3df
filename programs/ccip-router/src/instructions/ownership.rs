use anchor_lang::prelude::*;

use crate::events::{OwnershipTransferRequested, OwnershipTransferred};
use crate::instructions::{CcipRouterError, UpdateConfig};
use crate::state::{Config, CONFIG_SEED};

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump,
        constraint = config.has_valid_version() @ CcipRouterError::InvalidVersion,
    )]
    pub config: Account<'info, Config>,
    pub authority: Signer<'info>,
}

pub fn transfer_ownership(ctx: Context<UpdateConfig>, proposed_owner: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.propose_owner(proposed_owner)?;

    emit!(OwnershipTransferRequested::new(config.owner, proposed_owner));

    Ok(())
}

pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous_owner = config.accept_ownership(ctx.accounts.authority.key())?;

    emit!(OwnershipTransferred::new(previous_owner, config.owner));

    Ok(())
}
