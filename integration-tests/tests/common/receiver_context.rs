use anchor_lang::prelude::AccountMeta;
use anchor_lang::{InstructionData, ToAccountMetas};
use ccip_receiver::state::{token_admin_pda, BaseState, MessagesStorage};
use ccip_svm_std::{allowed_offramp_pda, external_execution_config_pda};
use ccip_svm_std::message::Any2SVMMessage;
use derive_more::{Deref, DerefMut};
use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

use crate::common::{Context, TransactionResult, COMPUTE_UNIT_LIMIT};

#[derive(Deref, DerefMut)]
pub struct CcipReceiver<'a>(&'a mut Context);

impl Context {
    pub fn receiver(&mut self) -> CcipReceiver {
        CcipReceiver(self)
    }
}

impl CcipReceiver<'_> {
    pub fn initialize(&mut self, router: Pubkey) -> TransactionResult {
        let instruction = ccip_receiver::instruction::Initialize { router };
        let accounts = ccip_receiver::accounts::Initialize {
            state: BaseState::pda().0,
            messages_storage: MessagesStorage::pda().0,
            authority: self.owner.pubkey(),
            system_program: anchor_lang::system_program::ID,
        };
        let owner = self.owner.insecure_clone();

        self.send(instruction.data(), accounts.to_account_metas(None), &owner)
    }

    pub fn get_latest_message(&mut self) -> TransactionResult {
        let instruction = ccip_receiver::instruction::GetLatestMessage {};
        let accounts = ccip_receiver::accounts::GetLatestMessage {
            messages_storage: MessagesStorage::pda().0,
        };
        let sender = self.sender.insecure_clone();

        self.send(instruction.data(), accounts.to_account_metas(None), &sender)
    }

    /// Delivers `message` as if `authority` were the off-ramp's signer.
    pub fn ccip_receive(
        &mut self,
        authority: &Keypair,
        offramp_program: Pubkey,
        message: Any2SVMMessage,
        token_transfer_accounts: impl IntoIterator<Item = AccountMeta>,
    ) -> TransactionResult {
        let allowed_offramp = allowed_offramp_pda(
            message.source_chain_selector,
            &offramp_program,
            &ccip_router::ID,
        )
        .0;
        let instruction = ccip_receiver::instruction::CcipReceive { message };
        let accounts: Vec<_> = ccip_receiver::accounts::CcipReceive {
            authority: authority.pubkey(),
            offramp_program,
            allowed_offramp,
            state: BaseState::pda().0,
            messages_storage: MessagesStorage::pda().0,
            token_admin: token_admin_pda().0,
            token_program: anchor_spl::token::ID,
            token_2022_program: anchor_spl::token_2022::ID,
        }
        .to_account_metas(None)
        .into_iter()
        .chain(token_transfer_accounts)
        .collect();

        self.send(instruction.data(), accounts, authority)
    }

    /// Delivers `message` through the mock off-ramp, which signs with its
    /// external execution config PDA.
    pub fn execute(
        &mut self,
        message: Any2SVMMessage,
        token_transfer_accounts: impl IntoIterator<Item = AccountMeta>,
    ) -> TransactionResult {
        let allowed_offramp = allowed_offramp_pda(
            message.source_chain_selector,
            &mock_offramp::ID,
            &ccip_router::ID,
        )
        .0;
        let instruction = mock_offramp::instruction::Execute { message };
        let accounts: Vec<_> = mock_offramp::accounts::Execute {
            authority: external_execution_config_pda(&ccip_receiver::ID, &mock_offramp::ID).0,
            offramp_program: mock_offramp::ID,
            allowed_offramp,
            state: BaseState::pda().0,
            messages_storage: MessagesStorage::pda().0,
            token_admin: token_admin_pda().0,
            token_program: anchor_spl::token::ID,
            token_2022_program: anchor_spl::token_2022::ID,
            receiver_program: ccip_receiver::ID,
        }
        .to_account_metas(None)
        .into_iter()
        .chain(token_transfer_accounts)
        .collect();
        let payer = self.sender.insecure_clone();

        let instruction = Instruction {
            program_id: mock_offramp::ID,
            accounts,
            data: instruction.data(),
        };
        let transaction = Transaction::new(
            &[&payer],
            Message::new(
                &[
                    ComputeBudgetInstruction::set_compute_unit_limit(COMPUTE_UNIT_LIMIT),
                    instruction,
                ],
                Some(&payer.pubkey()),
            ),
            self.latest_blockhash(),
        );

        self.send_transaction(transaction)
    }

    /// `(from, to, mint)` accounts forwarding `mint` from the token admin to
    /// `recipient`.
    pub fn token_transfer_accounts(&self, recipient: &Pubkey, mint: &Pubkey) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.token_ata(mint, &token_admin_pda().0), false),
            AccountMeta::new(self.token_ata(mint, recipient), false),
            AccountMeta::new_readonly(*mint, false),
        ]
    }

    pub fn withdraw_tokens(
        &mut self,
        owner: &Keypair,
        mint: Pubkey,
        to_token_account: Pubkey,
        amount: u64,
        decimals: u8,
    ) -> TransactionResult {
        let instruction = ccip_receiver::instruction::WithdrawTokens { amount, decimals };
        let accounts = ccip_receiver::accounts::WithdrawTokens {
            state: BaseState::pda().0,
            program_token_account: self.token_ata(&mint, &token_admin_pda().0),
            to_token_account,
            mint,
            token_admin: token_admin_pda().0,
            owner: owner.pubkey(),
            token_program: self.token_program,
        };

        self.send(instruction.data(), accounts.to_account_metas(None), owner)
    }

    fn send(
        &mut self,
        data: Vec<u8>,
        accounts: Vec<AccountMeta>,
        payer: &Keypair,
    ) -> TransactionResult {
        let instruction = Instruction {
            program_id: ccip_receiver::ID,
            accounts,
            data,
        };

        let transaction = Transaction::new(
            &[payer],
            Message::new(&[instruction], Some(&payer.pubkey())),
            self.latest_blockhash(),
        );

        self.send_transaction(transaction)
    }
}
