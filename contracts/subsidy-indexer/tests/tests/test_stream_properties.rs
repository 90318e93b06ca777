use std::collections::BTreeSet;

use cosmwasm_std::Uint256;
use proptest::{collection::vec, prelude::*, proptest};
use ubi_testing::{addr, EventStream};
use ubi_types::{
    event::IndexedEvent,
    subsidy_indexer::{Beneficiary, DailyClaim, Funds, ReaddPolicy},
};
use ubi_utils::time::SECONDS_PER_DAY;

use super::helpers::{program, MockEnv};

#[derive(Clone, Debug)]
enum Op {
    Add(u64),
    Remove(u64),
    Claim(u64, u128),
    Fund(u128),
    Withdraw(u128),
    Wait(u64),
}

/// Generates a random operation against a small set of addresses
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1..6u64).prop_map(Op::Add),
        (1..6u64).prop_map(Op::Remove),
        (1..6u64, 0..1_000_000u128).prop_map(|(n, amount)| Op::Claim(n, amount)),
        (0..1_000_000u128).prop_map(Op::Fund),
        (0..1_000_000u128).prop_map(Op::Withdraw),
        (1..SECONDS_PER_DAY).prop_map(Op::Wait),
    ]
}

fn build_logs(ops: &[Op]) -> Vec<IndexedEvent> {
    let mut stream = EventStream::new(program());
    let mut balance = 0u128;
    let mut logs = vec![];

    for op in ops {
        match op {
            Op::Add(n) => logs.push(stream.beneficiary_added(&addr(*n))),
            Op::Remove(n) => logs.push(stream.beneficiary_removed(&addr(*n))),
            Op::Claim(n, amount) => {
                balance = balance.saturating_sub(*amount);
                logs.push(stream.subsidy_claimed(&addr(*n), *amount, balance));
            }
            Op::Fund(amount) => {
                balance += amount;
                logs.push(stream.funds_added(*amount, balance));
            }
            Op::Withdraw(amount) => logs.push(stream.funds_withdrawn(*amount)),
            Op::Wait(seconds) => {
                stream.next_block(*seconds);
            }
        }
    }
    logs
}

fn all_beneficiaries(mock: &MockEnv) -> Vec<Beneficiary> {
    let mut all = vec![];
    let mut start_after = None;
    loop {
        let page = mock.query_beneficiaries(start_after, Some(30), None);
        let Some(last) = page.last() else {
            break;
        };
        start_after = Some(last.id.to_string());
        all.extend(page);
    }
    all
}

fn all_daily_claims(mock: &MockEnv) -> Vec<DailyClaim> {
    let mut all = vec![];
    let mut start_after = None;
    loop {
        let page = mock.query_daily_claims(start_after, Some(30), None);
        let Some(last) = page.last() else {
            break;
        };
        start_after = Some(last.date / SECONDS_PER_DAY);
        all.extend(page);
    }
    all
}

fn funds_or_default(mock: &MockEnv) -> (Uint256, Uint256, Uint256) {
    mock.query_funds()
        .map(|Funds { total_supplied, total_withdrawn, total_claimed, .. }| {
            (total_supplied, total_withdrawn, total_claimed)
        })
        .unwrap_or_default()
}

proptest! {
  #![proptest_config(ProptestConfig {
      cases: 64,
      max_shrink_iters: 256,
      ..ProptestConfig::default()
  })]

  #[test]
  fn proptest_totals_never_decrease(ops in vec(op(), 1..40)) {
    let mut mock = MockEnv::new().readd_policy(ReaddPolicy::Preserve).build().unwrap();
    let mut previous = funds_or_default(&mock);

    for log in build_logs(&ops) {
        mock.index(log).unwrap();

        let current = funds_or_default(&mock);
        prop_assert!(current.0 >= previous.0);
        prop_assert!(current.1 >= previous.1);
        prop_assert!(current.2 >= previous.2);
        previous = current;
    }
  }

  #[test]
  fn proptest_claim_totals_agree(ops in vec(op(), 1..40)) {
    let mut mock = MockEnv::new().readd_policy(ReaddPolicy::Preserve).build().unwrap();

    // claims apply only once the address has been added at least once
    let mut known = BTreeSet::new();
    let mut expected_claims = 0u64;
    let mut expected_amount = Uint256::zero();
    for op in &ops {
        match op {
            Op::Add(n) => {
                known.insert(*n);
            }
            Op::Claim(n, amount) if known.contains(n) => {
                expected_claims += 1;
                expected_amount += Uint256::from(*amount);
            }
            _ => {}
        }
    }

    mock.index_all(build_logs(&ops)).unwrap();

    let (_, _, total_claimed) = funds_or_default(&mock);
    prop_assert_eq!(total_claimed, expected_amount);

    let beneficiary_sum = all_beneficiaries(&mock)
        .iter()
        .fold(Uint256::zero(), |sum, b| sum + b.total_claimed);
    prop_assert_eq!(beneficiary_sum, expected_amount);

    let daily = all_daily_claims(&mock);
    let daily_sum = daily.iter().fold(Uint256::zero(), |sum, d| sum + d.total_amount);
    let daily_count: u64 = daily.iter().map(|d| d.total_claims).sum();
    prop_assert_eq!(daily_sum, expected_amount);
    prop_assert_eq!(daily_count, expected_claims);

    for day in &daily {
        let unique: BTreeSet<_> = day.beneficiaries.iter().collect();
        prop_assert_eq!(unique.len(), day.beneficiaries.len());
        prop_assert!(day.beneficiaries.len() as u64 <= day.total_claims);
    }
  }

  #[test]
  fn proptest_replay_is_idempotent(ops in vec(op(), 1..30)) {
    let mut mock = MockEnv::new().build().unwrap();
    let logs = build_logs(&ops);

    mock.index_all(logs.clone()).unwrap();
    let funds = mock.query_funds();
    let beneficiaries = all_beneficiaries(&mock);
    let daily = all_daily_claims(&mock);
    let cursor = mock.query_cursor();

    mock.index_all(logs).unwrap();
    prop_assert_eq!(mock.query_funds(), funds);
    prop_assert_eq!(all_beneficiaries(&mock), beneficiaries);
    prop_assert_eq!(all_daily_claims(&mock), daily);
    prop_assert_eq!(mock.query_cursor(), cursor);
  }
}
