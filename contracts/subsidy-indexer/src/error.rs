use cosmwasm_std::{OverflowError, StdError};
use mars_owner::OwnerError;
pub use ubi_utils::error::ValidationError;
use thiserror::Error;

pub type ContractResult<T> = Result<T, ContractError>;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Owner(#[from] OwnerError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Event emitted by {emitter}, expected {expected}")]
    UnexpectedEmitter {
        emitter: String,
        expected: String,
    },

    #[error(
        "Event at block {block_number} log {log_index} is not after the last applied event at block {cursor_block_number} log {cursor_log_index}"
    )]
    OutOfOrder {
        block_number: u64,
        log_index: u32,
        cursor_block_number: u64,
        cursor_log_index: u32,
    },
}
