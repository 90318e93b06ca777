use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint256;

/// Block and transaction metadata the host runtime attaches to every log.
#[cw_serde]
pub struct EventMeta {
    /// Address of the contract that emitted the log
    pub contract: String,
    pub block_number: u64,
    /// Block timestamp in UTC epoch seconds
    pub block_timestamp: u64,
    pub transaction_hash: String,
    /// Position of the log within its block
    pub log_index: u32,
}

/// A decoded subsidy program log together with its metadata.
#[cw_serde]
pub struct IndexedEvent {
    pub meta: EventMeta,
    pub event: SubsidyEvent,
}

/// Balance of a non-base token reported alongside a funds movement.
#[cw_serde]
pub struct TokenSnapshot {
    pub token_address: String,
    pub token_balance: Uint256,
}

/// Decoded subsidy program events.
///
/// Addresses are carried exactly as decoded and are validated when the event is applied.
#[cw_serde]
pub enum SubsidyEvent {
    BeneficiaryAdded {
        beneficiary_address: String,
    },
    BeneficiaryRemoved {
        beneficiary_address: String,
    },
    SubsidyClaimed {
        beneficiary_address: String,
        amount: Uint256,
        contract_balance: Uint256,
    },
    /// `token` is only present on multi-token deployments.
    FundsAdded {
        amount: Uint256,
        contract_balance: Uint256,
        token: Option<TokenSnapshot>,
    },
    /// `token` is only present on multi-token deployments. Base-token deployments emit no
    /// balance snapshot for withdrawals.
    FundsWithdrawn {
        amount_withdrawn: Uint256,
        token: Option<TokenSnapshot>,
    },
    TokenAdded {
        token_address: String,
    },
    TokenSwapped {
        token_address: String,
        amount_in: Uint256,
        amount_out: Uint256,
    },
    ClaimIntervalSet {
        interval: Uint256,
    },
    ClaimableAmountSet {
        amount: Uint256,
    },
    TokenAddressSet {
        token_address: String,
    },
    OwnershipTransferred {
        previous_owner: String,
        new_owner: String,
    },
}

impl SubsidyEvent {
    /// Stable snake_case name, used for response attributes and event logs
    pub fn kind(&self) -> &'static str {
        match self {
            SubsidyEvent::BeneficiaryAdded {
                ..
            } => "beneficiary_added",
            SubsidyEvent::BeneficiaryRemoved {
                ..
            } => "beneficiary_removed",
            SubsidyEvent::SubsidyClaimed {
                ..
            } => "subsidy_claimed",
            SubsidyEvent::FundsAdded {
                ..
            } => "funds_added",
            SubsidyEvent::FundsWithdrawn {
                ..
            } => "funds_withdrawn",
            SubsidyEvent::TokenAdded {
                ..
            } => "token_added",
            SubsidyEvent::TokenSwapped {
                ..
            } => "token_swapped",
            SubsidyEvent::ClaimIntervalSet {
                ..
            } => "claim_interval_set",
            SubsidyEvent::ClaimableAmountSet {
                ..
            } => "claimable_amount_set",
            SubsidyEvent::TokenAddressSet {
                ..
            } => "token_address_set",
            SubsidyEvent::OwnershipTransferred {
                ..
            } => "ownership_transferred",
        }
    }
}
