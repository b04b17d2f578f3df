use anchor_lang::prelude::*;
use ccip_svm_std::ALLOWED_OFFRAMP_SEED;

use crate::events::{OfframpAdded, OfframpRemoved};
use crate::instructions::CcipRouterError;
use crate::state::{AllowedOfframp, Config, CONFIG_SEED};

#[derive(Accounts)]
#[instruction(source_chain_selector: u64, offramp: Pubkey)]
pub struct AddOfframp<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump,
        constraint = config.has_valid_version() @ CcipRouterError::InvalidVersion,
    )]
    pub config: Account<'info, Config>,
    #[account(
        init,
        payer = authority,
        space = 8 + AllowedOfframp::INIT_SPACE,
        seeds = [
            ALLOWED_OFFRAMP_SEED,
            source_chain_selector.to_le_bytes().as_ref(),
            offramp.as_ref(),
        ],
        bump,
    )]
    pub allowed_offramp: Account<'info, AllowedOfframp>,
    #[account(mut, address = config.owner @ CcipRouterError::Unauthorized)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(source_chain_selector: u64, offramp: Pubkey)]
pub struct RemoveOfframp<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump,
        constraint = config.has_valid_version() @ CcipRouterError::InvalidVersion,
    )]
    pub config: Account<'info, Config>,
    #[account(
        mut,
        close = authority,
        seeds = [
            ALLOWED_OFFRAMP_SEED,
            source_chain_selector.to_le_bytes().as_ref(),
            offramp.as_ref(),
        ],
        bump,
    )]
    pub allowed_offramp: Account<'info, AllowedOfframp>,
    #[account(mut, address = config.owner @ CcipRouterError::Unauthorized)]
    pub authority: Signer<'info>,
}

pub fn add_offramp(
    _ctx: Context<AddOfframp>,
    source_chain_selector: u64,
    offramp: Pubkey,
) -> Result<()> {
    emit!(OfframpAdded::new(source_chain_selector, offramp));

    Ok(())
}

pub fn remove_offramp(
    _ctx: Context<RemoveOfframp>,
    source_chain_selector: u64,
    offramp: Pubkey,
) -> Result<()> {
    emit!(OfframpRemoved::new(source_chain_selector, offramp));

    Ok(())
}
