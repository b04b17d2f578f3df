use anchor_lang::prelude::*;

pub mod ccip_send;
pub mod config;
pub mod dest_chain;
pub mod initialize;
pub mod offramp;
pub mod ownership;
mod token_pool;
pub mod version;

pub use ccip_send::*;
pub use config::*;
pub use dest_chain::*;
pub use initialize::*;
pub use offramp::*;
pub use ownership::*;
pub use version::*;

#[error_code]
pub enum CcipRouterError {
    Unauthorized,
    InvalidVersion,
    InvalidCodeVersion,
    InvalidCcipVersionRollback,
    ReachedMaxSequenceNumber,
    ReachedMaxNonce,
    RedundantOwnerProposal,
    TooManyAllowedSenders,
    DestinationChainDisabled,
    SubjectCursed,
    InvalidRmnRemoteCurses,
    SenderNotAllowed,
    FeeTokenMismatch,
    InvalidInputsReceiver,
    InvalidInputsTransferAllAmount,
    InvalidInputsTokenAmount,
    InvalidInputsTokenAccounts,
    DuplicateTokens,
}
