use std::ops::Deref;

use anchor_lang::{AccountSerialize, AnchorSerialize, Event};
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use anchor_spl::associated_token::spl_associated_token_account::instruction::create_associated_token_account;
use anchor_spl::token::{self, spl_token};
use anchor_spl::token_2022::{self, spl_token_2022};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ccip_router::rmn::{CurseSubject, Curses};
use ccip_router::state::DestChain;
use derive_more::{Deref, DerefMut};
use litesvm::types::{FailedTransactionMetadata, TransactionMetadata};
use litesvm::LiteSVM;
use solana_sdk::clock::Clock;
use solana_sdk::instruction::InstructionError;
use solana_sdk::message::Message;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::rent::Rent;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::{Transaction, TransactionError};

mod receiver_context;

const COMPUTE_UNIT_LIMIT: u32 = 400_000;
const ROUTER_BIN: &[u8] = include_bytes!("../../../target/deploy/ccip_router.so");
const RECEIVER_BIN: &[u8] = include_bytes!("../../../target/deploy/ccip_receiver.so");
const MOCK_OFFRAMP_BIN: &[u8] = include_bytes!("../../../target/deploy/mock_offramp.so");

pub type TransactionResult = Result<TransactionMetadata, Box<FailedTransactionMetadata>>;

#[derive(Deref, DerefMut)]
pub struct Context {
    #[deref]
    #[deref_mut]
    svm: LiteSVM,
    mint_authority: Keypair,
    pub token_program: Pubkey,
    pub owner: Keypair,
    pub sender: Keypair,
    pub rmn_remote: Pubkey,
    pub link_token_mint: Pubkey,
}

impl Default for Context {
    fn default() -> Self {
        let mut svm = LiteSVM::new();

        svm.add_program(ccip_router::ID, ROUTER_BIN);
        svm.add_program(ccip_receiver::ID, RECEIVER_BIN);
        svm.add_program(mock_offramp::ID, MOCK_OFFRAMP_BIN);

        let mint_authority = Keypair::new();
        let owner = Keypair::new();
        let sender = Keypair::new();

        svm.airdrop(&mint_authority.pubkey(), sol_amount(100.0))
            .unwrap();
        svm.airdrop(&owner.pubkey(), sol_amount(10.0)).unwrap();
        svm.airdrop(&sender.pubkey(), sol_amount(10.0)).unwrap();

        Self {
            svm,
            mint_authority,
            token_program: token::ID,
            owner,
            sender,
            rmn_remote: Pubkey::new_unique(),
            link_token_mint: Pubkey::new_unique(),
        }
    }
}

impl Context {
    pub fn new_with_token_2022() -> Self {
        Self {
            token_program: token_2022::ID,
            ..Default::default()
        }
    }

    pub fn now(&self) -> i64 {
        self.svm.get_sysvar::<Clock>().unix_timestamp
    }

    pub fn set_mint_account(&mut self, mint: &Pubkey) {
        let mint_account = if self.token_program == token::ID {
            let mut mint_data = [0u8; spl_token::state::Mint::LEN];
            spl_token::state::Mint::pack(
                spl_token::state::Mint {
                    decimals: 6,
                    is_initialized: true,
                    mint_authority: Some(self.mint_authority.pubkey()).into(),
                    supply: 0,
                    freeze_authority: None.into(),
                },
                &mut mint_data,
            )
            .unwrap();

            solana_sdk::account::Account {
                lamports: self
                    .get_sysvar::<Rent>()
                    .minimum_balance(spl_token::state::Mint::LEN),
                data: mint_data.to_vec(),
                owner: self.token_program,
                executable: false,
                rent_epoch: 0,
            }
        } else {
            let mut mint_data = [0u8; spl_token_2022::state::Mint::LEN];
            spl_token_2022::state::Mint::pack(
                spl_token_2022::state::Mint {
                    decimals: 6,
                    is_initialized: true,
                    mint_authority: Some(self.mint_authority.pubkey()).into(),
                    supply: 0,
                    freeze_authority: None.into(),
                },
                &mut mint_data,
            )
            .unwrap();

            solana_sdk::account::Account {
                lamports: self
                    .get_sysvar::<Rent>()
                    .minimum_balance(spl_token_2022::state::Mint::LEN),
                data: mint_data.to_vec(),
                owner: self.token_program,
                executable: false,
                rent_epoch: 0,
            }
        };

        self.set_account(*mint, mint_account).unwrap();
    }

    pub fn airdrop_token_ata(&mut self, mint: &Pubkey, recipient: &Pubkey, amount: u64) {
        let recipient_token =
            get_associated_token_address_with_program_id(recipient, mint, &self.token_program);

        let mut instructions = if self.get_account(&recipient_token).is_none() {
            vec![create_associated_token_account(
                &self.mint_authority.pubkey(),
                recipient,
                mint,
                &self.token_program,
            )]
        } else {
            vec![]
        };

        match self.token_program {
            token::ID => {
                instructions.push(
                    spl_token::instruction::mint_to(
                        &self.token_program,
                        mint,
                        &recipient_token,
                        &self.mint_authority.pubkey(),
                        &[],
                        amount,
                    )
                    .unwrap(),
                );
            }
            token_2022::ID => {
                instructions.push(
                    spl_token_2022::instruction::mint_to(
                        &self.token_program,
                        mint,
                        &recipient_token,
                        &self.mint_authority.pubkey(),
                        &[],
                        amount,
                    )
                    .unwrap(),
                );
            }
            _ => panic!("unsupported token program"),
        }

        let transaction = Transaction::new(
            &[&self.mint_authority],
            Message::new(&instructions, Some(&self.mint_authority.pubkey())),
            self.latest_blockhash(),
        );

        self.send_transaction(transaction).unwrap();
    }

    pub fn token_ata(&self, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
        get_associated_token_address_with_program_id(owner, mint, &self.token_program)
    }

    pub fn token_balance(&self, pubkey: &Pubkey) -> u64 {
        self.get_account(pubkey)
            .and_then(|account| {
                if self.token_program == token::ID {
                    spl_token::state::Account::unpack(&account.data)
                        .ok()
                        .map(|acc| acc.amount)
                } else if self.token_program == token_2022::ID {
                    spl_token_2022::extension::StateWithExtensions::<spl_token_2022::state::Account>::unpack(&account.data)
                        .ok()
                        .map(|state| state.base.amount)
                } else {
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn token_balance_ata(&self, mint: &Pubkey, pubkey: &Pubkey) -> u64 {
        self.token_balance(&self.token_ata(mint, pubkey))
    }

    pub fn account<T: anchor_lang::AccountDeserialize>(&self, pubkey: &Pubkey) -> Option<T> {
        self.svm
            .get_account(pubkey)
            .and_then(|account| T::try_deserialize(&mut account.data.as_slice()).ok())
    }

    /// Overwrites a lane, e.g. to put it in a state unreachable through
    /// instructions.
    pub fn set_dest_chain(&mut self, dest_chain: &DestChain) {
        let mut data = Vec::new();
        dest_chain.try_serialize(&mut data).unwrap();

        let account = solana_sdk::account::Account {
            lamports: self.get_sysvar::<Rent>().minimum_balance(data.len()),
            data,
            owner: ccip_router::ID,
            executable: false,
            rent_epoch: 0,
        };

        self.set_account(DestChain::pda(dest_chain.chain_selector).0, account)
            .unwrap();
    }

    /// Writes the RMN remote's curse list for the configured `rmn_remote`.
    pub fn set_curses(&mut self, cursed_subjects: Vec<CurseSubject>) {
        let mut data = vec![0u8; 8];
        Curses {
            version: 1,
            cursed_subjects,
        }
        .serialize(&mut data)
        .unwrap();

        let account = solana_sdk::account::Account {
            lamports: self.get_sysvar::<Rent>().minimum_balance(data.len()),
            data,
            owner: self.rmn_remote,
            executable: false,
            rent_epoch: 0,
        };

        let curses = Curses::pda(&self.rmn_remote).0;
        self.set_account(curses, account).unwrap();
    }

    fn send_transaction(&mut self, transaction: Transaction) -> TransactionResult {
        let result = self.svm.send_transaction(transaction);
        self.expire_blockhash();
        let slot = self.svm.get_sysvar::<Clock>().slot;
        self.svm.warp_to_slot(slot + 1);

        result.map_err(Box::new)
    }
}

pub fn sol_amount(amount: f64) -> u64 {
    (amount * 1_000_000_000.0) as u64
}

pub fn contains_event<E>(expected: E) -> impl Fn(TransactionMetadata) -> bool
where
    E: Event,
{
    let expected = STANDARD.encode(expected.data());

    move |actual: TransactionMetadata| {
        actual
            .logs
            .iter()
            .any(|log| log.contains(format!("Program data: {}", expected).as_str()))
    }
}

pub fn returns_data<T>(expected: T) -> impl Fn(TransactionMetadata) -> bool
where
    T: AnchorSerialize,
{
    let expected = expected.try_to_vec().unwrap();

    move |actual: TransactionMetadata| actual.return_data.data == expected
}

pub fn is_error<T, Err>(expected: Err) -> impl Fn(T) -> bool
where
    T: Deref<Target = FailedTransactionMetadata>,
    Err: Into<u32>,
{
    let expected = expected.into();

    move |actual: T| match actual.err {
        TransactionError::InstructionError(_, InstructionError::Custom(error_code)) => {
            error_code == expected
        }
        _ => false,
    }
}
