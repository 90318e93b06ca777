use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Storage};
use ubi_types::{
    address::EvmAddress,
    event::IndexedEvent,
    subsidy_indexer::{Config, Cursor, EventLog},
};
use ubi_utils::helpers::normalize_tx_hash;

use crate::{
    error::{ContractError, ContractResult},
    handlers::{handle_event, Outcome},
    state::{CONFIG, CURSOR, EVENT_LOGS, OWNER},
};

pub fn index_event(
    deps: DepsMut,
    info: MessageInfo,
    event: IndexedEvent,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let log_event = apply_event(deps.storage, &config, event)?;

    Ok(Response::new().add_attribute("action", "index_event").add_event(log_event))
}

pub fn index_events(
    deps: DepsMut,
    info: MessageInfo,
    events: Vec<IndexedEvent>,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let mut response = Response::new()
        .add_attribute("action", "index_events")
        .add_attribute("count", events.len().to_string());

    for event in events {
        let log_event = apply_event(deps.storage, &config, event)?;
        response = response.add_event(log_event);
    }

    Ok(response)
}

/// Runs one log through the delivery checks and its handler, then records it.
///
/// A log already recorded under the same (transaction hash, log index) is a redelivery and leaves
/// the store untouched. Logs must otherwise arrive strictly after the cursor.
fn apply_event(
    storage: &mut dyn Storage,
    config: &Config,
    indexed: IndexedEvent,
) -> ContractResult<Event> {
    let IndexedEvent {
        meta,
        event,
    } = indexed;

    let emitter = EvmAddress::parse(&meta.contract)?;
    if emitter != config.program {
        return Err(ContractError::UnexpectedEmitter {
            emitter: emitter.into_string(),
            expected: config.program.to_string(),
        });
    }

    let tx_hash = normalize_tx_hash(&meta.transaction_hash)?;
    let log_key = (tx_hash.as_str(), meta.log_index);

    let log_event = Event::new(event.kind())
        .add_attribute("transaction_hash", &tx_hash)
        .add_attribute("log_index", meta.log_index.to_string());

    if EVENT_LOGS.has(storage, log_key) {
        return Ok(log_event.add_attribute("skipped", "duplicate"));
    }

    let cursor = CURSOR.may_load(storage)?;
    if let Some(cursor) = &cursor {
        if !cursor.precedes(meta.block_number, meta.log_index) {
            return Err(ContractError::OutOfOrder {
                block_number: meta.block_number,
                log_index: meta.log_index,
                cursor_block_number: cursor.block_number,
                cursor_log_index: cursor.log_index,
            });
        }
    }

    let outcome = handle_event(storage, config, meta.block_timestamp, &event)?;
    let applied = outcome.is_applied();

    let log_event = match outcome {
        Outcome::Applied(attrs) => log_event.add_attributes(attrs),
        Outcome::Skipped {
            reason,
        } => log_event.add_attribute("skipped", reason),
    };

    EVENT_LOGS.save(
        storage,
        log_key,
        &EventLog {
            kind: event.kind().to_string(),
            contract: emitter,
            block_number: meta.block_number,
            block_timestamp: meta.block_timestamp,
            transaction_hash: tx_hash.clone(),
            log_index: meta.log_index,
            applied,
            event,
        },
    )?;

    let (events_applied, events_skipped) =
        cursor.map_or((0, 0), |c| (c.events_applied, c.events_skipped));
    CURSOR.save(
        storage,
        &Cursor {
            block_number: meta.block_number,
            log_index: meta.log_index,
            events_applied: events_applied + u64::from(applied),
            events_skipped: events_skipped + u64::from(!applied),
        },
    )?;

    Ok(log_event)
}
