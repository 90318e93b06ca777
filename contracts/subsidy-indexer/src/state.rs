use cosmwasm_std::{Empty, StdResult, Storage};
use cw_storage_plus::{Item, Map};
use mars_owner::Owner;
use ubi_types::{
    address::EvmAddress,
    subsidy_indexer::{
        Beneficiary, Config, Cursor, DailyClaim, EventLog, Funds, ProgramSettings, TokenBalance,
    },
};

pub const OWNER: Owner = Owner::new("owner");
pub const CONFIG: Item<Config> = Item::new("config");
pub const CURSOR: Item<Cursor> = Item::new("cursor");

pub const BENEFICIARIES: Map<&str, Beneficiary> = Map::new("beneficiaries");
/// Addresses whose `Beneficiary::is_active` is true
pub const ACTIVE_BENEFICIARIES: Map<&str, Empty> = Map::new("active_beneficiaries");
pub const FUNDS: Map<&str, Funds> = Map::new("funds");
pub const DAILY_CLAIMS: Map<u64, DailyClaim> = Map::new("daily_claims");
/// Membership index for `DailyClaim::beneficiaries`: (day, beneficiary address)
pub const DAILY_CLAIMANTS: Map<(u64, &str), Empty> = Map::new("daily_claimants");
pub const TOKEN_BALANCES: Map<&str, TokenBalance> = Map::new("token_balances");
pub const PROGRAM_SETTINGS: Map<&str, ProgramSettings> = Map::new("program_settings");
/// Raw log records: (transaction hash, log index)
pub const EVENT_LOGS: Map<(&str, u32), EventLog> = Map::new("event_logs");

pub fn load_or_default_funds(storage: &dyn Storage, program: &EvmAddress) -> StdResult<Funds> {
    Ok(FUNDS.may_load(storage, program.as_str())?.unwrap_or_else(|| Funds::new(program.clone())))
}

pub fn load_or_default_daily_claim(
    storage: &dyn Storage,
    day: u64,
    date: u64,
) -> StdResult<DailyClaim> {
    Ok(DAILY_CLAIMS.may_load(storage, day)?.unwrap_or_else(|| DailyClaim::new(day, date)))
}

pub fn load_or_default_token_balance(
    storage: &dyn Storage,
    token: &EvmAddress,
    funds: &EvmAddress,
) -> StdResult<TokenBalance> {
    Ok(TOKEN_BALANCES
        .may_load(storage, token.as_str())?
        .unwrap_or_else(|| TokenBalance::new(token.clone(), funds.clone())))
}

pub fn load_or_default_settings(
    storage: &dyn Storage,
    program: &EvmAddress,
) -> StdResult<ProgramSettings> {
    Ok(PROGRAM_SETTINGS
        .may_load(storage, program.as_str())?
        .unwrap_or_else(|| ProgramSettings::new(program.clone())))
}

/// Adds `beneficiary` to the day's claimant set. Returns false if it was already a member.
pub fn insert_daily_claimant(
    storage: &mut dyn Storage,
    day: u64,
    beneficiary: &EvmAddress,
) -> StdResult<bool> {
    let key = (day, beneficiary.as_str());
    if DAILY_CLAIMANTS.has(storage, key) {
        return Ok(false);
    }
    DAILY_CLAIMANTS.save(storage, key, &Empty {})?;
    Ok(true)
}
