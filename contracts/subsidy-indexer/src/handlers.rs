use cosmwasm_std::{attr, Attribute, Empty, Storage, Uint256};
use ubi_types::{
    address::EvmAddress,
    event::{SubsidyEvent, TokenSnapshot},
    subsidy_indexer::{Beneficiary, Config, ProgramSettings, ReaddPolicy},
};
use ubi_utils::time::day_bucket;

use crate::{
    error::ContractResult,
    state::{
        insert_daily_claimant, load_or_default_daily_claim, load_or_default_funds,
        load_or_default_settings, load_or_default_token_balance, ACTIVE_BENEFICIARIES,
        BENEFICIARIES, DAILY_CLAIMS, FUNDS, PROGRAM_SETTINGS, TOKEN_BALANCES,
    },
};

/// What a handler did with an event
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Applied(Vec<Attribute>),
    /// Nothing was written. Not an error: the indexer keeps going.
    Skipped {
        reason: &'static str,
    },
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

/// Where a funds movement is accounted
enum TokenTarget {
    /// The program's own funds, optionally with the balance reported for the base token
    Base {
        snapshot: Option<Uint256>,
    },
    Other {
        token: EvmAddress,
        balance: Uint256,
    },
}

fn token_target(config: &Config, token: Option<&TokenSnapshot>) -> ContractResult<TokenTarget> {
    let Some(snapshot) = token else {
        return Ok(TokenTarget::Base {
            snapshot: None,
        });
    };

    let token = EvmAddress::parse(&snapshot.token_address)?;
    if config.is_base_token(&token) {
        Ok(TokenTarget::Base {
            snapshot: Some(snapshot.token_balance),
        })
    } else {
        Ok(TokenTarget::Other {
            token,
            balance: snapshot.token_balance,
        })
    }
}

/// Applies one decoded event at block time `timestamp`.
///
/// Handlers only load and save the entities their event updates.
pub fn handle_event(
    storage: &mut dyn Storage,
    config: &Config,
    timestamp: u64,
    event: &SubsidyEvent,
) -> ContractResult<Outcome> {
    match event {
        SubsidyEvent::BeneficiaryAdded {
            beneficiary_address,
        } => beneficiary_added(storage, config, timestamp, beneficiary_address),
        SubsidyEvent::BeneficiaryRemoved {
            beneficiary_address,
        } => beneficiary_removed(storage, timestamp, beneficiary_address),
        SubsidyEvent::SubsidyClaimed {
            beneficiary_address,
            amount,
            contract_balance,
        } => subsidy_claimed(
            storage,
            config,
            timestamp,
            beneficiary_address,
            *amount,
            *contract_balance,
        ),
        SubsidyEvent::FundsAdded {
            amount,
            contract_balance,
            token,
        } => funds_added(storage, config, *amount, *contract_balance, token.as_ref()),
        SubsidyEvent::FundsWithdrawn {
            amount_withdrawn,
            token,
        } => funds_withdrawn(storage, config, *amount_withdrawn, token.as_ref()),
        SubsidyEvent::TokenAdded {
            token_address,
        } => token_added(storage, config, token_address),
        SubsidyEvent::TokenSwapped {
            token_address,
            amount_in,
            amount_out,
        } => token_swapped(storage, config, token_address, *amount_in, *amount_out),
        SubsidyEvent::ClaimIntervalSet {
            interval,
        } => update_settings(storage, config, timestamp, |settings| {
            settings.claim_interval = Some(*interval);
            Ok(vec![attr("claim_interval", interval.to_string())])
        }),
        SubsidyEvent::ClaimableAmountSet {
            amount,
        } => update_settings(storage, config, timestamp, |settings| {
            settings.claimable_amount = Some(*amount);
            Ok(vec![attr("claimable_amount", amount.to_string())])
        }),
        SubsidyEvent::TokenAddressSet {
            token_address,
        } => update_settings(storage, config, timestamp, |settings| {
            let token = EvmAddress::parse(token_address)?;
            let attrs = vec![attr("token_address", token.as_str())];
            settings.token_address = Some(token);
            Ok(attrs)
        }),
        SubsidyEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        } => update_settings(storage, config, timestamp, |settings| {
            let previous = EvmAddress::parse(previous_owner)?;
            let new = EvmAddress::parse(new_owner)?;
            let attrs =
                vec![attr("previous_owner", previous.as_str()), attr("new_owner", new.as_str())];
            settings.owner = Some(new);
            Ok(attrs)
        }),
    }
}

pub fn beneficiary_added(
    storage: &mut dyn Storage,
    config: &Config,
    timestamp: u64,
    beneficiary_address: &str,
) -> ContractResult<Outcome> {
    let address = EvmAddress::parse(beneficiary_address)?;
    let existing = BENEFICIARIES.may_load(storage, address.as_str())?;
    let readded = existing.is_some();

    let beneficiary = match (existing, config.readd_policy) {
        (Some(mut beneficiary), ReaddPolicy::Preserve) => {
            beneficiary.is_active = true;
            beneficiary.date_removed = None;
            beneficiary
        }
        _ => Beneficiary::new(address.clone(), timestamp),
    };
    BENEFICIARIES.save(storage, address.as_str(), &beneficiary)?;
    ACTIVE_BENEFICIARIES.save(storage, address.as_str(), &Empty {})?;

    Ok(Outcome::Applied(vec![
        attr("beneficiary", address.as_str()),
        attr("readded", readded.to_string()),
    ]))
}

pub fn beneficiary_removed(
    storage: &mut dyn Storage,
    timestamp: u64,
    beneficiary_address: &str,
) -> ContractResult<Outcome> {
    let address = EvmAddress::parse(beneficiary_address)?;
    let Some(mut beneficiary) = BENEFICIARIES.may_load(storage, address.as_str())? else {
        return Ok(Outcome::Skipped {
            reason: "unknown_beneficiary",
        });
    };

    // date_removed is written at most once per active period
    if !beneficiary.is_active {
        return Ok(Outcome::Skipped {
            reason: "already_removed",
        });
    }

    beneficiary.is_active = false;
    beneficiary.date_removed = Some(timestamp);
    BENEFICIARIES.save(storage, address.as_str(), &beneficiary)?;
    ACTIVE_BENEFICIARIES.remove(storage, address.as_str());

    Ok(Outcome::Applied(vec![attr("beneficiary", address.as_str())]))
}

pub fn subsidy_claimed(
    storage: &mut dyn Storage,
    config: &Config,
    timestamp: u64,
    beneficiary_address: &str,
    amount: Uint256,
    contract_balance: Uint256,
) -> ContractResult<Outcome> {
    let address = EvmAddress::parse(beneficiary_address)?;
    let Some(mut beneficiary) = BENEFICIARIES.may_load(storage, address.as_str())? else {
        return Ok(Outcome::Skipped {
            reason: "unknown_beneficiary",
        });
    };

    beneficiary.total_claimed = beneficiary.total_claimed.checked_add(amount)?;

    let mut funds = load_or_default_funds(storage, &config.program)?;
    funds.total_claimed = funds.total_claimed.checked_add(amount)?;
    funds.contract_balance = contract_balance;

    let day = day_bucket(timestamp);
    let mut daily_claim = load_or_default_daily_claim(storage, day, timestamp)?;
    daily_claim.total_claims += 1;
    daily_claim.total_amount = daily_claim.total_amount.checked_add(amount)?;
    if insert_daily_claimant(storage, day, &address)? {
        daily_claim.beneficiaries.push(address.clone());
    }

    BENEFICIARIES.save(storage, address.as_str(), &beneficiary)?;
    FUNDS.save(storage, config.program.as_str(), &funds)?;
    DAILY_CLAIMS.save(storage, day, &daily_claim)?;

    Ok(Outcome::Applied(vec![
        attr("beneficiary", address.as_str()),
        attr("beneficiary_active", beneficiary.is_active.to_string()),
        attr("amount", amount.to_string()),
        attr("contract_balance", contract_balance.to_string()),
        attr("day", daily_claim.id),
    ]))
}

pub fn funds_added(
    storage: &mut dyn Storage,
    config: &Config,
    amount: Uint256,
    contract_balance: Uint256,
    token: Option<&TokenSnapshot>,
) -> ContractResult<Outcome> {
    let mut funds = load_or_default_funds(storage, &config.program)?;
    funds.total_supplied = funds.total_supplied.checked_add(amount)?;
    funds.contract_balance = contract_balance;

    let mut attrs = vec![attr("amount", amount.to_string())];

    if let TokenTarget::Other {
        token,
        balance,
    } = token_target(config, token)?
    {
        let mut token_balance = load_or_default_token_balance(storage, &token, &config.program)?;
        token_balance.balance = balance;
        TOKEN_BALANCES.save(storage, token.as_str(), &token_balance)?;
        attrs.push(attr("token", token.as_str()));
        attrs.push(attr("token_balance", balance.to_string()));
    }

    FUNDS.save(storage, config.program.as_str(), &funds)?;

    attrs.push(attr("contract_balance", contract_balance.to_string()));
    Ok(Outcome::Applied(attrs))
}

pub fn funds_withdrawn(
    storage: &mut dyn Storage,
    config: &Config,
    amount_withdrawn: Uint256,
    token: Option<&TokenSnapshot>,
) -> ContractResult<Outcome> {
    let mut funds = load_or_default_funds(storage, &config.program)?;
    funds.total_withdrawn = funds.total_withdrawn.checked_add(amount_withdrawn)?;

    let mut attrs = vec![attr("amount_withdrawn", amount_withdrawn.to_string())];

    // only a base token snapshot says what the program itself holds
    let snapshot = match token_target(config, token)? {
        TokenTarget::Base {
            snapshot,
        } => snapshot,
        TokenTarget::Other {
            token,
            balance,
        } => {
            let mut token_balance = load_or_default_token_balance(storage, &token, &config.program)?;
            token_balance.total_withdrawn =
                token_balance.total_withdrawn.checked_add(amount_withdrawn)?;
            token_balance.balance = balance;
            TOKEN_BALANCES.save(storage, token.as_str(), &token_balance)?;
            attrs.push(attr("token", token.as_str()));
            attrs.push(attr("token_balance", balance.to_string()));
            None
        }
    };

    let derived = funds.contract_balance.saturating_sub(amount_withdrawn);
    funds.contract_balance = snapshot.unwrap_or(derived);
    FUNDS.save(storage, config.program.as_str(), &funds)?;

    let source = if snapshot.is_some() {
        "snapshot"
    } else {
        "derived"
    };
    attrs.push(attr("contract_balance", funds.contract_balance.to_string()));
    attrs.push(attr("balance_source", source));

    Ok(Outcome::Applied(attrs))
}

pub fn token_added(
    storage: &mut dyn Storage,
    config: &Config,
    token_address: &str,
) -> ContractResult<Outcome> {
    let token = EvmAddress::parse(token_address)?;
    let token_balance = load_or_default_token_balance(storage, &token, &config.program)?;
    TOKEN_BALANCES.save(storage, token.as_str(), &token_balance)?;

    Ok(Outcome::Applied(vec![attr("token", token.as_str())]))
}

pub fn token_swapped(
    storage: &mut dyn Storage,
    config: &Config,
    token_address: &str,
    amount_in: Uint256,
    amount_out: Uint256,
) -> ContractResult<Outcome> {
    let token = EvmAddress::parse(token_address)?;

    let mut token_balance = load_or_default_token_balance(storage, &token, &config.program)?;
    token_balance.total_swapped = token_balance.total_swapped.checked_add(amount_in)?;
    token_balance.balance = token_balance.balance.saturating_sub(amount_in);

    let mut funds = load_or_default_funds(storage, &config.program)?;
    funds.contract_balance = funds.contract_balance.checked_add(amount_out)?;

    TOKEN_BALANCES.save(storage, token.as_str(), &token_balance)?;
    FUNDS.save(storage, config.program.as_str(), &funds)?;

    Ok(Outcome::Applied(vec![
        attr("token", token.as_str()),
        attr("amount_in", amount_in.to_string()),
        attr("amount_out", amount_out.to_string()),
        attr("contract_balance", funds.contract_balance.to_string()),
    ]))
}

fn update_settings<F>(
    storage: &mut dyn Storage,
    config: &Config,
    timestamp: u64,
    update: F,
) -> ContractResult<Outcome>
where
    F: FnOnce(&mut ProgramSettings) -> ContractResult<Vec<Attribute>>,
{
    let mut settings = load_or_default_settings(storage, &config.program)?;
    let attrs = update(&mut settings)?;
    settings.updated_at = timestamp;
    PROGRAM_SETTINGS.save(storage, config.program.as_str(), &settings)?;

    Ok(Outcome::Applied(attrs))
}
