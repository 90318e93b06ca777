use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;
use ubi_types::{
    address::EvmAddress,
    subsidy_indexer::{Beneficiary, DailyClaim, EventLog, Funds, OrderBy, TokenBalance},
};
use ubi_utils::helpers::normalize_tx_hash;

use crate::state::{
    ACTIVE_BENEFICIARIES, BENEFICIARIES, CONFIG, DAILY_CLAIMS, EVENT_LOGS, FUNDS, TOKEN_BALANCES,
};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 30;

pub fn query_beneficiary(deps: Deps, address: String) -> StdResult<Option<Beneficiary>> {
    let address = EvmAddress::parse(&address)?;
    BENEFICIARIES.may_load(deps.storage, address.as_str())
}

pub fn query_beneficiaries(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
    active_only: Option<bool>,
) -> StdResult<Vec<Beneficiary>> {
    let start_after = start_after.map(|addr| EvmAddress::parse(&addr)).transpose()?;
    let start = start_after.as_ref().map(|addr| Bound::exclusive(addr.as_str()));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    // walk the active index so a page never scans removed records
    if active_only.unwrap_or(false) {
        return ACTIVE_BENEFICIARIES
            .keys(deps.storage, start, None, Order::Ascending)
            .take(limit)
            .map(|key| BENEFICIARIES.load(deps.storage, &key?))
            .collect();
    }

    BENEFICIARIES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| Ok(item?.1))
        .collect()
}

pub fn query_funds(deps: Deps, address: Option<String>) -> StdResult<Option<Funds>> {
    let address = match address {
        Some(address) => EvmAddress::parse(&address)?,
        None => CONFIG.load(deps.storage)?.program,
    };
    FUNDS.may_load(deps.storage, address.as_str())
}

pub fn query_daily_claim(deps: Deps, day: u64) -> StdResult<Option<DailyClaim>> {
    DAILY_CLAIMS.may_load(deps.storage, day)
}

pub fn query_daily_claims(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
    order: Option<OrderBy>,
) -> StdResult<Vec<DailyClaim>> {
    let order: Order = order.unwrap_or(OrderBy::Asc).into();
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let bound: Option<Bound<u64>> = start_after.map(Bound::exclusive);

    let (min, max) = match order {
        Order::Ascending => (bound, None),
        Order::Descending => (None, bound),
    };

    DAILY_CLAIMS
        .range(deps.storage, min, max, order)
        .take(limit)
        .map(|item| Ok(item?.1))
        .collect()
}

pub fn query_token_balance(deps: Deps, token: String) -> StdResult<Option<TokenBalance>> {
    let token = EvmAddress::parse(&token)?;
    TOKEN_BALANCES.may_load(deps.storage, token.as_str())
}

pub fn query_token_balances(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<TokenBalance>> {
    let start_after = start_after.map(|addr| EvmAddress::parse(&addr)).transpose()?;
    let start = start_after.as_ref().map(|addr| Bound::exclusive(addr.as_str()));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    TOKEN_BALANCES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| Ok(item?.1))
        .collect()
}

pub fn query_event_log(
    deps: Deps,
    transaction_hash: String,
    log_index: u32,
) -> StdResult<Option<EventLog>> {
    let tx_hash = normalize_tx_hash(&transaction_hash)?;
    EVENT_LOGS.may_load(deps.storage, (tx_hash.as_str(), log_index))
}
