use anchor_lang::prelude::*;

use crate::events::{CcipVersionForDestChainVersionBumped, CcipVersionForDestChainVersionRolledBack};
use crate::instructions::UpdateDestChain;

pub fn bump_ccip_version_for_dest_chain(
    ctx: Context<UpdateDestChain>,
    dest_chain_selector: u64,
) -> Result<()> {
    let state = &mut ctx.accounts.dest_chain.state;
    let previous_sequence_number = state.sequence_number;
    state.bump_version()?;

    emit!(CcipVersionForDestChainVersionBumped::new(
        dest_chain_selector,
        previous_sequence_number,
    ));

    Ok(())
}

pub fn rollback_ccip_version_for_dest_chain(
    ctx: Context<UpdateDestChain>,
    dest_chain_selector: u64,
) -> Result<()> {
    let state = &mut ctx.accounts.dest_chain.state;
    let previous_sequence_number = state.sequence_number;
    state.rollback_version()?;

    emit!(CcipVersionForDestChainVersionRolledBack::new(
        dest_chain_selector,
        previous_sequence_number,
    ));

    Ok(())
}
