#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;
use mars_owner::OwnerInit::SetInitialOwner;
use ubi_types::{
    address::EvmAddress,
    subsidy_indexer::{Config, ExecuteMsg, InstantiateMsg, QueryMsg},
};

use crate::{
    error::ContractResult,
    execute::{index_event, index_events},
    query::{
        query_beneficiaries, query_beneficiary, query_daily_claim, query_daily_claims,
        query_event_log, query_funds, query_token_balance, query_token_balances,
    },
    state::{CONFIG, CURSOR, OWNER, PROGRAM_SETTINGS},
};

pub const CONTRACT_NAME: &str = "crates.io:ubi-subsidy-indexer";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _: Env,
    _: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    OWNER.initialize(
        deps.storage,
        deps.api,
        SetInitialOwner {
            owner: msg.owner,
        },
    )?;

    let config = Config {
        program: EvmAddress::parse(&msg.program)?,
        base_token: msg.base_token.as_deref().map(EvmAddress::parse).transpose()?,
        readd_policy: msg.readd_policy.unwrap_or_default(),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("program", config.program.as_str()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::UpdateOwner(update) => Ok(OWNER.update(deps, info, update)?),
        ExecuteMsg::IndexEvent(event) => index_event(deps, info, event),
        ExecuteMsg::IndexEvents {
            events,
        } => index_events(deps, info, events),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let res = match msg {
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Cursor {} => to_json_binary(&CURSOR.may_load(deps.storage)?),
        QueryMsg::Beneficiary {
            address,
        } => to_json_binary(&query_beneficiary(deps, address)?),
        QueryMsg::Beneficiaries {
            start_after,
            limit,
            active_only,
        } => to_json_binary(&query_beneficiaries(deps, start_after, limit, active_only)?),
        QueryMsg::Funds {
            address,
        } => to_json_binary(&query_funds(deps, address)?),
        QueryMsg::DailyClaim {
            day,
        } => to_json_binary(&query_daily_claim(deps, day)?),
        QueryMsg::DailyClaims {
            start_after,
            limit,
            order,
        } => to_json_binary(&query_daily_claims(deps, start_after, limit, order)?),
        QueryMsg::TokenBalance {
            token,
        } => to_json_binary(&query_token_balance(deps, token)?),
        QueryMsg::TokenBalances {
            start_after,
            limit,
        } => to_json_binary(&query_token_balances(deps, start_after, limit)?),
        QueryMsg::ProgramSettings {} => {
            let program = CONFIG.load(deps.storage)?.program;
            to_json_binary(&PROGRAM_SETTINGS.may_load(deps.storage, program.as_str())?)
        }
        QueryMsg::EventLog {
            transaction_hash,
            log_index,
        } => to_json_binary(&query_event_log(deps, transaction_hash, log_index)?),
    };
    res.map_err(Into::into)
}
