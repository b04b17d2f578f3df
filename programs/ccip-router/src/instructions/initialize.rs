use anchor_lang::prelude::*;

use crate::events::ConfigInitialized;
use crate::state::{CodeVersion, Config, CONFIG_SEED};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeArgs {
    pub default_code_version: CodeVersion,
    pub fee_quoter: Pubkey,
    pub rmn_remote: Pubkey,
    pub link_token_mint: Pubkey,
    pub fee_aggregator: Pubkey,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, Config>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
    let owner = ctx.accounts.authority.key();

    ctx.accounts.config.set_inner(Config::new(
        owner,
        ccip_svm_std::CHAIN_SELECTOR,
        args.default_code_version,
        args.fee_quoter,
        args.rmn_remote,
        args.link_token_mint,
        args.fee_aggregator,
    )?);

    emit!(ConfigInitialized::new(
        owner,
        ccip_svm_std::CHAIN_SELECTOR,
        args.default_code_version,
    ));

    Ok(())
}
