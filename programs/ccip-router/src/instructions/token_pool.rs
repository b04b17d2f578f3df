use anchor_lang::prelude::*;
use anchor_spl::associated_token::{self, get_associated_token_address_with_program_id};
use anchor_spl::{token, token_2022};
use ccip_svm_std::token::{TokenTransferAccounts, VecTokenTransferAccounts};
use ccip_svm_std::SVMTokenAmount;
use itertools::Itertools;

use crate::instructions::{CcipRouterError, CcipSend};

/// Moves the tokens of an outbound message from the sender into the token
/// pool signer's associated token accounts.
pub struct LockTokenContext<'a, 'info> {
    pub sender: &'a Signer<'info>,
    pub pool_signer: AccountInfo<'info>,
    pub token_program: &'a Program<'info, token::Token>,
    pub token_2022_program: &'a Program<'info, token_2022::Token2022>,
    pub associated_token_program: &'a Program<'info, associated_token::AssociatedToken>,
    pub system_program: &'a Program<'info, System>,
}

impl<'a, 'info> From<&'a Context<'_, '_, '_, 'info, CcipSend<'info>>>
    for LockTokenContext<'a, 'info>
{
    fn from(ctx: &'a Context<'_, '_, '_, 'info, CcipSend<'info>>) -> Self {
        Self {
            sender: &ctx.accounts.authority,
            pool_signer: ctx.accounts.token_pool_signer.to_account_info(),
            token_program: &ctx.accounts.token_program,
            token_2022_program: &ctx.accounts.token_2022_program,
            associated_token_program: &ctx.accounts.associated_token_program,
            system_program: &ctx.accounts.system_program,
        }
    }
}

impl<'info> LockTokenContext<'_, 'info> {
    /// Resolves the amount locked per token. With `transfer_all` every amount
    /// becomes the sender's whole balance.
    pub fn resolve_token_amounts(
        &self,
        accounts: &VecTokenTransferAccounts<'info>,
        token_amounts: &[SVMTokenAmount],
        transfer_all: bool,
    ) -> Result<Vec<SVMTokenAmount>> {
        require!(
            accounts.len() == token_amounts.len(),
            CcipRouterError::InvalidInputsTokenAccounts
        );
        require!(
            token_amounts
                .iter()
                .map(|token_amount| token_amount.token)
                .all_unique(),
            CcipRouterError::DuplicateTokens
        );

        accounts
            .iter()
            .zip(token_amounts)
            .map(|(accounts, token_amount)| {
                self.resolve_token_amount(accounts, token_amount, transfer_all)
            })
            .collect()
    }

    fn resolve_token_amount(
        &self,
        accounts: &TokenTransferAccounts<'info>,
        token_amount: &SVMTokenAmount,
        transfer_all: bool,
    ) -> Result<SVMTokenAmount> {
        require_keys_eq!(
            *accounts.mint.key,
            token_amount.token,
            CcipRouterError::InvalidInputsTokenAccounts
        );

        let from_data = accounts.from_data()?;
        require!(
            from_data.owner == self.sender.key() && from_data.mint == token_amount.token,
            CcipRouterError::InvalidInputsTokenAccounts
        );

        let pool_ata = get_associated_token_address_with_program_id(
            self.pool_signer.key,
            accounts.mint.key,
            accounts.token_program_id(),
        );
        require_keys_eq!(
            pool_ata,
            *accounts.to.key,
            CcipRouterError::InvalidInputsTokenAccounts
        );

        let amount = match transfer_all {
            true => from_data.amount,
            false => token_amount.amount,
        };
        require!(amount > 0, CcipRouterError::InvalidInputsTokenAmount);

        Ok(SVMTokenAmount::new(token_amount.token, amount))
    }

    pub fn lock_tokens(
        &self,
        accounts: VecTokenTransferAccounts<'info>,
        token_amounts: &[SVMTokenAmount],
    ) -> Result<()> {
        accounts
            .into_inner()
            .into_iter()
            .zip(token_amounts)
            .try_for_each(|(accounts, token_amount)| self.lock_token(accounts, token_amount.amount))
    }

    fn lock_token(&self, accounts: TokenTransferAccounts<'info>, amount: u64) -> Result<()> {
        let token_program = accounts.token_program(self.token_program, self.token_2022_program)?;
        self.ensure_pool_ata_initialized(&accounts, &token_program)?;

        accounts.transfer(&token_program, self.sender, amount)
    }

    fn ensure_pool_ata_initialized(
        &self,
        accounts: &TokenTransferAccounts<'info>,
        token_program: &AccountInfo<'info>,
    ) -> Result<()> {
        if !accounts.to.data_is_empty() {
            return Ok(());
        }

        let cpi_accounts = associated_token::Create {
            payer: self.sender.to_account_info(),
            associated_token: accounts.to.to_account_info(),
            authority: self.pool_signer.to_account_info(),
            mint: accounts.mint.to_account_info(),
            system_program: self.system_program.to_account_info(),
            token_program: token_program.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(
            self.associated_token_program.to_account_info(),
            cpi_accounts,
        );

        associated_token::create(cpi_ctx)
    }
}
