use cosmwasm_std::Uint256;
use ubi_types::event::{EventMeta, IndexedEvent, SubsidyEvent, TokenSnapshot};

use crate::helpers::tx_hash;

/// Block time of the first block produced by a new [`EventStream`]
pub const GENESIS_TIMESTAMP: u64 = 1_700_006_400;

/// Produces logs for one contract with block metadata filled in the way the host runtime orders
/// them: every log gets its own transaction, log indexes grow within a block, and
/// [`EventStream::next_block`] moves to a later block.
pub struct EventStream {
    contract: String,
    block_number: u64,
    block_timestamp: u64,
    log_index: u32,
}

impl EventStream {
    pub fn new(contract: impl Into<String>) -> Self {
        Self::starting_at(contract, GENESIS_TIMESTAMP)
    }

    pub fn starting_at(contract: impl Into<String>, block_timestamp: u64) -> Self {
        Self {
            contract: contract.into(),
            block_number: 1,
            block_timestamp,
            log_index: 0,
        }
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    pub fn block_timestamp(&self) -> u64 {
        self.block_timestamp
    }

    /// Moves to the next block, `seconds` after the current one
    pub fn next_block(&mut self, seconds: u64) -> &mut Self {
        self.block_number += 1;
        self.block_timestamp += seconds;
        self.log_index = 0;
        self
    }

    /// Moves to a block with the given timestamp. Timestamps never go backwards.
    pub fn at_timestamp(&mut self, timestamp: u64) -> &mut Self {
        let seconds = timestamp.saturating_sub(self.block_timestamp);
        self.next_block(seconds)
    }

    /// Wraps `event` with metadata for the next log position
    pub fn log(&mut self, event: SubsidyEvent) -> IndexedEvent {
        let log_index = self.log_index;
        self.log_index += 1;

        IndexedEvent {
            meta: EventMeta {
                contract: self.contract.clone(),
                block_number: self.block_number,
                block_timestamp: self.block_timestamp,
                transaction_hash: tx_hash(self.block_number, log_index.into()),
                log_index,
            },
            event,
        }
    }

    pub fn beneficiary_added(&mut self, beneficiary: &str) -> IndexedEvent {
        self.log(SubsidyEvent::BeneficiaryAdded {
            beneficiary_address: beneficiary.to_string(),
        })
    }

    pub fn beneficiary_removed(&mut self, beneficiary: &str) -> IndexedEvent {
        self.log(SubsidyEvent::BeneficiaryRemoved {
            beneficiary_address: beneficiary.to_string(),
        })
    }

    pub fn subsidy_claimed(
        &mut self,
        beneficiary: &str,
        amount: u128,
        contract_balance: u128,
    ) -> IndexedEvent {
        self.log(SubsidyEvent::SubsidyClaimed {
            beneficiary_address: beneficiary.to_string(),
            amount: Uint256::from(amount),
            contract_balance: Uint256::from(contract_balance),
        })
    }

    pub fn funds_added(&mut self, amount: u128, contract_balance: u128) -> IndexedEvent {
        self.log(SubsidyEvent::FundsAdded {
            amount: Uint256::from(amount),
            contract_balance: Uint256::from(contract_balance),
            token: None,
        })
    }

    pub fn token_funds_added(
        &mut self,
        token: &str,
        amount: u128,
        contract_balance: u128,
        token_balance: u128,
    ) -> IndexedEvent {
        self.log(SubsidyEvent::FundsAdded {
            amount: Uint256::from(amount),
            contract_balance: Uint256::from(contract_balance),
            token: Some(snapshot(token, token_balance)),
        })
    }

    pub fn funds_withdrawn(&mut self, amount_withdrawn: u128) -> IndexedEvent {
        self.log(SubsidyEvent::FundsWithdrawn {
            amount_withdrawn: Uint256::from(amount_withdrawn),
            token: None,
        })
    }

    pub fn token_funds_withdrawn(
        &mut self,
        token: &str,
        amount_withdrawn: u128,
        token_balance: u128,
    ) -> IndexedEvent {
        self.log(SubsidyEvent::FundsWithdrawn {
            amount_withdrawn: Uint256::from(amount_withdrawn),
            token: Some(snapshot(token, token_balance)),
        })
    }

    pub fn token_added(&mut self, token: &str) -> IndexedEvent {
        self.log(SubsidyEvent::TokenAdded {
            token_address: token.to_string(),
        })
    }

    pub fn token_swapped(&mut self, token: &str, amount_in: u128, amount_out: u128) -> IndexedEvent {
        self.log(SubsidyEvent::TokenSwapped {
            token_address: token.to_string(),
            amount_in: Uint256::from(amount_in),
            amount_out: Uint256::from(amount_out),
        })
    }

    pub fn claim_interval_set(&mut self, interval: u128) -> IndexedEvent {
        self.log(SubsidyEvent::ClaimIntervalSet {
            interval: Uint256::from(interval),
        })
    }

    pub fn claimable_amount_set(&mut self, amount: u128) -> IndexedEvent {
        self.log(SubsidyEvent::ClaimableAmountSet {
            amount: Uint256::from(amount),
        })
    }

    pub fn token_address_set(&mut self, token: &str) -> IndexedEvent {
        self.log(SubsidyEvent::TokenAddressSet {
            token_address: token.to_string(),
        })
    }

    pub fn ownership_transferred(&mut self, previous_owner: &str, new_owner: &str) -> IndexedEvent {
        self.log(SubsidyEvent::OwnershipTransferred {
            previous_owner: previous_owner.to_string(),
            new_owner: new_owner.to_string(),
        })
    }
}

fn snapshot(token: &str, token_balance: u128) -> TokenSnapshot {
    TokenSnapshot {
        token_address: token.to_string(),
        token_balance: Uint256::from(token_balance),
    }
}
