use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid param: {param_name} is {invalid_value}, but it should be {predicate}")]
    InvalidParam {
        param_name: String,
        invalid_value: String,
        predicate: String,
    },

    #[error("Invalid address {address}: {reason}")]
    InvalidAddress {
        address: String,
        reason: String,
    },
}

impl From<ValidationError> for StdError {
    fn from(source: ValidationError) -> Self {
        StdError::generic_err(source.to_string())
    }
}
