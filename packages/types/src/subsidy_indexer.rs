use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Order, Uint256};
use mars_owner::OwnerUpdate;

use crate::{
    address::EvmAddress,
    event::{IndexedEvent, SubsidyEvent},
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Account allowed to submit events and update the config
    pub owner: String,
    /// The subsidy program contract whose logs are indexed
    pub program: String,
    /// Token the program pays subsidies in. Funds movements of any other token are tracked in
    /// `TokenBalance` records.
    pub base_token: Option<String>,
    /// What happens when an address that already has a `Beneficiary` record is added again
    pub readd_policy: Option<ReaddPolicy>,
}

/// Fixed at instantiation, so replaying the same logs always yields the same records
#[cw_serde]
pub struct Config {
    pub program: EvmAddress,
    pub base_token: Option<EvmAddress>,
    pub readd_policy: ReaddPolicy,
}

impl Config {
    /// True if a movement of `token` counts against the program's own `Funds` totals
    pub fn is_base_token(&self, token: &EvmAddress) -> bool {
        self.base_token.as_ref().map_or(false, |base| base == token)
    }
}

#[cw_serde]
#[derive(Copy, Default)]
pub enum ReaddPolicy {
    /// Re-adding replaces the record with a fresh one, discarding claim history
    #[default]
    Reset,
    /// Re-adding reactivates the record and keeps `total_claimed` and `date_added`
    Preserve,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Manages the owner role
    UpdateOwner(OwnerUpdate),

    /// Apply a single decoded log
    IndexEvent(IndexedEvent),

    /// Apply logs in the given order. A fatal error in any of them aborts the whole batch.
    IndexEvents {
        events: Vec<IndexedEvent>,
    },
}

#[cw_serde]
#[derive(Copy)]
pub enum OrderBy {
    Asc,
    Desc,
}

impl From<OrderBy> for Order {
    fn from(order: OrderBy) -> Self {
        match order {
            OrderBy::Asc => Order::Ascending,
            OrderBy::Desc => Order::Descending,
        }
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(mars_owner::OwnerResponse)]
    Owner {},

    #[returns(Config)]
    Config {},

    /// Position of the last applied log
    #[returns(Option<Cursor>)]
    Cursor {},

    #[returns(Option<Beneficiary>)]
    Beneficiary {
        address: String,
    },

    /// Beneficiaries ordered by address
    #[returns(Vec<Beneficiary>)]
    Beneficiaries {
        start_after: Option<String>,
        limit: Option<u32>,
        active_only: Option<bool>,
    },

    /// Defaults to the indexed program's funds
    #[returns(Option<Funds>)]
    Funds {
        address: Option<String>,
    },

    #[returns(Option<DailyClaim>)]
    DailyClaim {
        day: u64,
    },

    /// Daily claims ordered by day, ascending unless `order` says otherwise
    #[returns(Vec<DailyClaim>)]
    DailyClaims {
        start_after: Option<u64>,
        limit: Option<u32>,
        order: Option<OrderBy>,
    },

    #[returns(Option<TokenBalance>)]
    TokenBalance {
        token: String,
    },

    #[returns(Vec<TokenBalance>)]
    TokenBalances {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(Option<ProgramSettings>)]
    ProgramSettings {},

    #[returns(Option<EventLog>)]
    EventLog {
        transaction_hash: String,
        log_index: u32,
    },
}

//--------------------------------------------------------------------------------------------------
// Entities
//--------------------------------------------------------------------------------------------------

#[cw_serde]
pub struct Beneficiary {
    pub id: EvmAddress,
    pub total_claimed: Uint256,
    pub date_added: u64,
    pub date_removed: Option<u64>,
    pub is_active: bool,
}

impl Beneficiary {
    pub fn new(id: EvmAddress, date_added: u64) -> Self {
        Self {
            id,
            total_claimed: Uint256::zero(),
            date_added,
            date_removed: None,
            is_active: true,
        }
    }
}

#[cw_serde]
pub struct Funds {
    /// Address of the program contract
    pub id: EvmAddress,
    pub total_supplied: Uint256,
    pub total_withdrawn: Uint256,
    pub total_claimed: Uint256,
    /// Last balance reported by the program
    pub contract_balance: Uint256,
}

impl Funds {
    pub fn new(id: EvmAddress) -> Self {
        Self {
            id,
            total_supplied: Uint256::zero(),
            total_withdrawn: Uint256::zero(),
            total_claimed: Uint256::zero(),
            contract_balance: Uint256::zero(),
        }
    }
}

#[cw_serde]
pub struct DailyClaim {
    /// Day bucket as a decimal string
    pub id: String,
    /// Timestamp of the first claim in the bucket
    pub date: u64,
    pub total_claims: u64,
    pub total_amount: Uint256,
    /// Claimants in order of their first claim of the day
    pub beneficiaries: Vec<EvmAddress>,
}

impl DailyClaim {
    pub fn new(day: u64, date: u64) -> Self {
        Self {
            id: day.to_string(),
            date,
            total_claims: 0,
            total_amount: Uint256::zero(),
            beneficiaries: vec![],
        }
    }
}

#[cw_serde]
pub struct TokenBalance {
    pub id: EvmAddress,
    pub token: EvmAddress,
    pub balance: Uint256,
    pub total_swapped: Uint256,
    pub total_withdrawn: Uint256,
    /// Id of the `Funds` record holding this token
    pub funds: EvmAddress,
}

impl TokenBalance {
    pub fn new(token: EvmAddress, funds: EvmAddress) -> Self {
        Self {
            id: token.clone(),
            token,
            balance: Uint256::zero(),
            total_swapped: Uint256::zero(),
            total_withdrawn: Uint256::zero(),
            funds,
        }
    }
}

/// Latest program parameters announced through admin events
#[cw_serde]
pub struct ProgramSettings {
    pub id: EvmAddress,
    pub claim_interval: Option<Uint256>,
    pub claimable_amount: Option<Uint256>,
    pub token_address: Option<EvmAddress>,
    pub owner: Option<EvmAddress>,
    pub updated_at: u64,
}

impl ProgramSettings {
    pub fn new(id: EvmAddress) -> Self {
        Self {
            id,
            claim_interval: None,
            claimable_amount: None,
            token_address: None,
            owner: None,
            updated_at: 0,
        }
    }
}

/// Raw record of an applied log, keyed by transaction hash and log index
#[cw_serde]
pub struct EventLog {
    pub kind: String,
    pub contract: EvmAddress,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: String,
    pub log_index: u32,
    /// False if the event was recorded but left every entity untouched
    pub applied: bool,
    pub event: SubsidyEvent,
}

#[cw_serde]
pub struct Cursor {
    pub block_number: u64,
    pub log_index: u32,
    pub events_applied: u64,
    pub events_skipped: u64,
}

impl Cursor {
    /// True if a log at `(block_number, log_index)` comes strictly after this cursor
    pub fn precedes(&self, block_number: u64, log_index: u32) -> bool {
        (self.block_number, self.log_index) < (block_number, log_index)
    }
}
