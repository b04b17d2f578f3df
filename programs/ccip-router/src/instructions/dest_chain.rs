use anchor_lang::prelude::*;

use crate::events::{DestChainAdded, DestChainConfigUpdated};
use crate::instructions::CcipRouterError;
use crate::state::{Config, DestChain, DestChainConfig, CONFIG_SEED, DEST_CHAIN_STATE_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateAllowListArgs {
    pub add: Vec<Pubkey>,
    pub remove: Vec<Pubkey>,
}

#[derive(Accounts)]
#[instruction(dest_chain_selector: u64)]
pub struct AddChainSelector<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump,
        constraint = config.has_valid_version() @ CcipRouterError::InvalidVersion,
    )]
    pub config: Account<'info, Config>,
    #[account(
        init,
        payer = authority,
        space = 8 + DestChain::INIT_SPACE,
        seeds = [DEST_CHAIN_STATE_SEED, dest_chain_selector.to_le_bytes().as_ref()],
        bump,
    )]
    pub dest_chain: Account<'info, DestChain>,
    #[account(mut, address = config.owner @ CcipRouterError::Unauthorized)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Owner-only access to an existing lane.
#[derive(Accounts)]
#[instruction(dest_chain_selector: u64)]
pub struct UpdateDestChain<'info> {
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
    #[account(address = config.owner @ CcipRouterError::Unauthorized)]
    pub authority: Signer<'info>,
}

pub fn add_chain_selector(
    ctx: Context<AddChainSelector>,
    dest_chain_selector: u64,
    dest_chain_config: DestChainConfig,
) -> Result<()> {
    ctx.accounts
        .dest_chain
        .set_inner(DestChain::new(dest_chain_selector, dest_chain_config.clone())?);

    emit!(DestChainAdded::new(dest_chain_selector, dest_chain_config));

    Ok(())
}

pub fn update_dest_chain_config(
    ctx: Context<UpdateDestChain>,
    dest_chain_selector: u64,
    dest_chain_config: DestChainConfig,
) -> Result<()> {
    dest_chain_config.validate()?;
    ctx.accounts.dest_chain.config = dest_chain_config.clone();

    emit!(DestChainConfigUpdated::new(
        dest_chain_selector,
        dest_chain_config
    ));

    Ok(())
}

pub fn update_allow_list(
    ctx: Context<UpdateDestChain>,
    dest_chain_selector: u64,
    args: UpdateAllowListArgs,
) -> Result<()> {
    let dest_chain = &mut ctx.accounts.dest_chain;
    dest_chain.config.update_allow_list(&args.add, &args.remove)?;

    emit!(DestChainConfigUpdated::new(
        dest_chain_selector,
        dest_chain.config.clone()
    ));

    Ok(())
}
