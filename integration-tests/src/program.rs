use std::collections::BTreeMap;

use ubi_testing::EventStream;
use ubi_types::event::IndexedEvent;

/// What the program's own storage holds after the simulated history
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Totals {
    pub supplied: u128,
    pub withdrawn: u128,
    pub claimed: u128,
    pub balance: u128,
}

struct Member {
    active: bool,
    last_claim: Option<u64>,
    claimed: u128,
}

/// Drives a simulated subsidy program and records the logs it would emit.
///
/// The program pays a fixed amount per claim and lets each active beneficiary claim at most once
/// per interval. Calls the program would revert emit nothing.
pub struct ProgramSimulator {
    stream: EventStream,
    claim_interval: u64,
    claimable_amount: u128,
    members: BTreeMap<String, Member>,
    totals: Totals,
    logs: Vec<IndexedEvent>,
}

impl ProgramSimulator {
    pub fn deploy(
        program: impl Into<String>,
        start: u64,
        claim_interval: u64,
        claimable_amount: u128,
    ) -> Self {
        let mut stream = EventStream::starting_at(program, start);
        let logs = vec![
            stream.claim_interval_set(claim_interval.into()),
            stream.claimable_amount_set(claimable_amount),
        ];

        Self {
            stream,
            claim_interval,
            claimable_amount,
            members: BTreeMap::new(),
            totals: Totals::default(),
            logs,
        }
    }

    pub fn now(&self) -> u64 {
        self.stream.block_timestamp()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Everything `beneficiary` has claimed since it was first added
    pub fn claimed_by(&self, beneficiary: &str) -> Option<u128> {
        self.members.get(beneficiary).map(|member| member.claimed)
    }

    pub fn advance(&mut self, seconds: u64) -> &mut Self {
        self.stream.next_block(seconds);
        self
    }

    pub fn fund(&mut self, amount: u128) -> &mut Self {
        self.totals.supplied += amount;
        self.totals.balance += amount;
        let log = self.stream.funds_added(amount, self.totals.balance);
        self.logs.push(log);
        self
    }

    /// Withdraws up to `amount`, capped at the current balance
    pub fn withdraw(&mut self, amount: u128) -> &mut Self {
        let amount = amount.min(self.totals.balance);
        self.totals.withdrawn += amount;
        self.totals.balance -= amount;
        let log = self.stream.funds_withdrawn(amount);
        self.logs.push(log);
        self
    }

    pub fn add(&mut self, beneficiary: &str) -> &mut Self {
        let member = self.members.entry(beneficiary.to_string()).or_insert(Member {
            active: false,
            last_claim: None,
            claimed: 0,
        });
        if !member.active {
            member.active = true;
            let log = self.stream.beneficiary_added(beneficiary);
            self.logs.push(log);
        }
        self
    }

    pub fn remove(&mut self, beneficiary: &str) -> &mut Self {
        if let Some(member) = self.members.get_mut(beneficiary).filter(|m| m.active) {
            member.active = false;
            let log = self.stream.beneficiary_removed(beneficiary);
            self.logs.push(log);
        }
        self
    }

    /// Returns false if the program would have reverted the claim
    pub fn claim(&mut self, beneficiary: &str) -> bool {
        let now = self.stream.block_timestamp();
        let amount = self.claimable_amount;
        let interval = self.claim_interval;

        let Some(member) = self.members.get_mut(beneficiary) else {
            return false;
        };
        let interval_elapsed = member.last_claim.map_or(true, |last| now >= last + interval);
        if !member.active || !interval_elapsed || self.totals.balance < amount {
            return false;
        }

        member.last_claim = Some(now);
        member.claimed += amount;
        self.totals.claimed += amount;
        self.totals.balance -= amount;

        let log = self.stream.subsidy_claimed(beneficiary, amount, self.totals.balance);
        self.logs.push(log);
        true
    }

    /// Hands over every log recorded since the last call
    pub fn drain_logs(&mut self) -> Vec<IndexedEvent> {
        std::mem::take(&mut self.logs)
    }
}
