use anchor_lang::prelude::*;

use crate::instructions::CcipRouterError;

pub const CONFIG_SEED: &[u8] = b"config";
pub const DEST_CHAIN_STATE_SEED: &[u8] = b"dest_chain_state";
pub const NONCE_SEED: &[u8] = b"nonce";
pub const TOKEN_POOL_SIGNER_SEED: &[u8] = b"token_pool_signer";

pub const MAX_CONFIG_V: u8 = 1;
pub const MAX_DEST_CHAIN_V: u8 = 1;
pub const MAX_NONCE_V: u8 = 1;
pub const MAX_ALLOWED_SENDERS: usize = 20;

/// Owner of the associated token accounts holding tokens locked by `ccip_send`.
pub fn token_pool_signer_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_POOL_SIGNER_SEED], &crate::ID)
}

/// Selects which on-chain logic path handles a lane.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum CodeVersion {
    /// Defer to `Config::default_code_version`
    #[default]
    Default,
    V1,
}

impl CodeVersion {
    pub fn resolve(self, default: CodeVersion) -> CodeVersion {
        match self {
            CodeVersion::Default => default,
            pinned => pinned,
        }
    }
}

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Config {
    pub version: u8,
    pub default_code_version: CodeVersion,
    pub svm_chain_selector: u64,
    pub owner: Pubkey,
    /// `Pubkey::default()` when no transfer is pending
    pub proposed_owner: Pubkey,
    pub fee_quoter: Pubkey,
    pub rmn_remote: Pubkey,
    pub link_token_mint: Pubkey,
    pub fee_aggregator: Pubkey,
}

impl Config {
    pub fn new(
        owner: Pubkey,
        svm_chain_selector: u64,
        default_code_version: CodeVersion,
        fee_quoter: Pubkey,
        rmn_remote: Pubkey,
        link_token_mint: Pubkey,
        fee_aggregator: Pubkey,
    ) -> Result<Self> {
        let mut config = Self {
            version: MAX_CONFIG_V,
            default_code_version: CodeVersion::V1,
            svm_chain_selector,
            owner,
            proposed_owner: Pubkey::default(),
            fee_quoter,
            rmn_remote,
            link_token_mint,
            fee_aggregator,
        };
        config.set_default_code_version(default_code_version)?;

        Ok(config)
    }

    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID)
    }

    pub fn has_valid_version(&self) -> bool {
        self.version == MAX_CONFIG_V
    }

    pub fn set_default_code_version(&mut self, code_version: CodeVersion) -> Result<()> {
        require!(
            code_version != CodeVersion::Default,
            CcipRouterError::InvalidCodeVersion
        );
        self.default_code_version = code_version;

        Ok(())
    }

    pub fn propose_owner(&mut self, proposed_owner: Pubkey) -> Result<()> {
        require_keys_neq!(
            proposed_owner,
            self.owner,
            CcipRouterError::RedundantOwnerProposal
        );
        self.proposed_owner = proposed_owner;

        Ok(())
    }

    /// Completes a pending transfer and returns the previous owner.
    pub fn accept_ownership(&mut self, signer: Pubkey) -> Result<Pubkey> {
        require!(
            self.proposed_owner != Pubkey::default() && signer == self.proposed_owner,
            CcipRouterError::Unauthorized
        );
        let previous_owner = std::mem::replace(&mut self.owner, self.proposed_owner);
        self.proposed_owner = Pubkey::default();

        Ok(previous_owner)
    }
}

/// Which transition produced the current restore point.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum RestoreOnAction {
    #[default]
    None,
    Upgrade,
    Rollback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionAction {
    Bump,
    Rollback,
}

impl RestoreOnAction {
    /// A bump is always accepted and overwrites any restore point. A rollback
    /// only consumes the restore point left by an immediately preceding bump.
    pub fn transition(self, action: VersionAction) -> Result<Self> {
        match (self, action) {
            (_, VersionAction::Bump) => Ok(RestoreOnAction::Upgrade),
            (RestoreOnAction::Upgrade, VersionAction::Rollback) => Ok(RestoreOnAction::Rollback),
            (RestoreOnAction::None | RestoreOnAction::Rollback, VersionAction::Rollback) => {
                Err(CcipRouterError::InvalidCcipVersionRollback.into())
            }
        }
    }
}

#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub struct DestChainState {
    /// Last sequence number handed out on this lane
    pub sequence_number: u64,
    pub sequence_number_to_restore: u64,
    pub restore_on_action: RestoreOnAction,
}

impl DestChainState {
    pub fn bump_version(&mut self) -> Result<()> {
        self.restore_on_action = self.restore_on_action.transition(VersionAction::Bump)?;
        self.sequence_number_to_restore = self.sequence_number;
        self.sequence_number = 0;

        Ok(())
    }

    pub fn rollback_version(&mut self) -> Result<()> {
        self.restore_on_action = self
            .restore_on_action
            .transition(VersionAction::Rollback)?;
        self.sequence_number = self.sequence_number_to_restore;

        Ok(())
    }

    pub fn next_sequence_number(&mut self) -> Result<u64> {
        self.sequence_number = self
            .sequence_number
            .checked_add(1)
            .ok_or(CcipRouterError::ReachedMaxSequenceNumber)?;

        Ok(self.sequence_number)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct DestChainConfig {
    pub lane_code_version: CodeVersion,
    #[max_len(MAX_ALLOWED_SENDERS)]
    pub allowed_senders: Vec<Pubkey>,
    pub allow_list_enabled: bool,
    pub is_enabled: bool,
}

impl DestChainConfig {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.allowed_senders.len() <= MAX_ALLOWED_SENDERS,
            CcipRouterError::TooManyAllowedSenders
        );

        Ok(())
    }

    pub fn is_sender_allowed(&self, sender: &Pubkey) -> bool {
        !self.allow_list_enabled || self.allowed_senders.contains(sender)
    }

    pub fn update_allow_list(&mut self, add: &[Pubkey], remove: &[Pubkey]) -> Result<()> {
        self.allowed_senders.retain(|sender| !remove.contains(sender));
        for sender in add {
            if !self.allowed_senders.contains(sender) {
                self.allowed_senders.push(*sender);
            }
        }

        self.validate()
    }
}

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct DestChain {
    pub version: u8,
    pub chain_selector: u64,
    pub state: DestChainState,
    pub config: DestChainConfig,
}

impl DestChain {
    pub fn new(chain_selector: u64, config: DestChainConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            version: MAX_DEST_CHAIN_V,
            chain_selector,
            state: DestChainState::default(),
            config,
        })
    }

    pub fn pda(chain_selector: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[DEST_CHAIN_STATE_SEED, chain_selector.to_le_bytes().as_ref()],
            &crate::ID,
        )
    }

    pub fn has_valid_version(&self) -> bool {
        self.version == MAX_DEST_CHAIN_V
    }

    pub fn code_version(&self, config: &Config) -> CodeVersion {
        self.config
            .lane_code_version
            .resolve(config.default_code_version)
    }
}

/// Per-sender, per-lane message counter, created on the sender's first send.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Nonce {
    pub version: u8,
    pub counter: u64,
}

impl Nonce {
    pub fn pda(dest_chain_selector: u64, sender: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                NONCE_SEED,
                dest_chain_selector.to_le_bytes().as_ref(),
                sender.as_ref(),
            ],
            &crate::ID,
        )
    }

    pub fn next(&mut self) -> Result<u64> {
        match self.version {
            0 => self.version = MAX_NONCE_V,
            MAX_NONCE_V => {}
            _ => return Err(CcipRouterError::InvalidVersion.into()),
        }
        self.counter = self
            .counter
            .checked_add(1)
            .ok_or(CcipRouterError::ReachedMaxNonce)?;

        Ok(self.counter)
    }
}

#[account]
#[derive(InitSpace, Debug, Default)]
pub struct AllowedOfframp {}

impl AllowedOfframp {
    pub fn pda(source_chain_selector: u64, offramp: &Pubkey) -> (Pubkey, u8) {
        ccip_svm_std::allowed_offramp_pda(source_chain_selector, offramp, &crate::ID)
    }
}
