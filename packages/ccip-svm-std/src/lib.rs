use anchor_lang::prelude::*;
use derive_more::Deref;
use derive_new::new;

pub mod message;
pub mod token;

/// Chain selector of the SVM chain this workspace is deployed on.
#[cfg(feature = "mainnet")]
pub const CHAIN_SELECTOR: u64 = 124615329519749607;
#[cfg(not(feature = "mainnet"))]
pub const CHAIN_SELECTOR: u64 = 16423721717087811551;

/// Seed of the router-owned marker that allows an off-ramp for a source chain.
pub const ALLOWED_OFFRAMP_SEED: &[u8] = b"allowed_offramp";
/// Seed of the off-ramp PDA that signs when delivering messages to receivers.
pub const EXTERNAL_EXECUTION_CONFIG_SEED: &[u8] = b"external_execution_config";

#[derive(
    AnchorSerialize,
    AnchorDeserialize,
    InitSpace,
    Deref,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
pub struct Bytes32([u8; 32]);

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Bytes32(bytes)
    }
}

impl From<Bytes32> for [u8; 32] {
    fn from(bytes: Bytes32) -> Self {
        bytes.0
    }
}

impl PartialEq<Pubkey> for Bytes32 {
    fn eq(&self, pubkey: &Pubkey) -> bool {
        self.0 == pubkey.to_bytes()
    }
}

/// Token and amount pair carried by messages in both directions.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct SVMTokenAmount {
    /// Mint of the token on this chain
    pub token: Pubkey,
    /// Amount in the mint's base units
    pub amount: u64,
}

/// Marker PDA derived under the router that lists `offramp` as an allowed
/// deliverer of messages coming from `source_chain_selector`.
pub fn allowed_offramp_pda(
    source_chain_selector: u64,
    offramp: &Pubkey,
    router: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            ALLOWED_OFFRAMP_SEED,
            source_chain_selector.to_le_bytes().as_ref(),
            offramp.as_ref(),
        ],
        router,
    )
}

/// Signer PDA an off-ramp uses when invoking `receiver`.
pub fn external_execution_config_pda(receiver: &Pubkey, offramp: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[EXTERNAL_EXECUTION_CONFIG_SEED, receiver.as_ref()],
        offramp,
    )
}
