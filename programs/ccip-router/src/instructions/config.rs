use anchor_lang::prelude::*;

use crate::events::{ConfigAddress, ConfigAddressUpdated, DefaultCodeVersionSet};
use crate::instructions::CcipRouterError;
use crate::state::{CodeVersion, Config, CONFIG_SEED};

/// Owner-only access to the router config.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump,
        constraint = config.has_valid_version() @ CcipRouterError::InvalidVersion,
    )]
    pub config: Account<'info, Config>,
    #[account(address = config.owner @ CcipRouterError::Unauthorized)]
    pub authority: Signer<'info>,
}

pub fn set_default_code_version(
    ctx: Context<UpdateConfig>,
    code_version: CodeVersion,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous = config.default_code_version;
    config.set_default_code_version(code_version)?;

    emit!(DefaultCodeVersionSet::new(previous, code_version));

    Ok(())
}

pub fn update_config_address(
    ctx: Context<UpdateConfig>,
    field: ConfigAddress,
    address: Pubkey,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let slot = match field {
        ConfigAddress::FeeQuoter => &mut config.fee_quoter,
        ConfigAddress::RmnRemote => &mut config.rmn_remote,
        ConfigAddress::LinkTokenMint => &mut config.link_token_mint,
        ConfigAddress::FeeAggregator => &mut config.fee_aggregator,
    };
    let previous = std::mem::replace(slot, address);

    emit!(ConfigAddressUpdated::new(field, previous, address));

    Ok(())
}
