use anchor_lang::prelude::*;

pub mod ccip_receive;
pub mod get_latest_message;
pub mod initialize;
pub mod withdraw_tokens;

pub use ccip_receive::*;
pub use get_latest_message::*;
pub use initialize::*;
pub use withdraw_tokens::*;

#[error_code]
pub enum CcipReceiverError {
    InvalidCaller,
    Unauthorized,
    InvalidRemainingAccounts,
    InvalidTokenAccountOwner,
    InvalidTokenAdmin,
    MessageDataTooLarge,
    TooManyTokens,
    SenderAddressTooLarge,
}
