use cosmwasm_std::Uint256;
use ubi_testing::{addr, u256};
use ubi_types::address::EvmAddress;

use super::helpers::{base_token, event_attribute, program, stream, MockEnv};

#[test]
fn token_added_registers_empty_balance() {
    let mut mock = MockEnv::new().build().unwrap();
    let mut stream = stream();
    let token = addr(0xc1);

    mock.index(stream.token_added(&token)).unwrap();

    let balance = mock.query_token_balance(&token).unwrap();
    assert_eq!(balance.id, EvmAddress::parse(&token).unwrap());
    assert_eq!(balance.funds, EvmAddress::parse(&program()).unwrap());
    assert_eq!(balance.balance, Uint256::zero());
    assert_eq!(balance.total_swapped, Uint256::zero());
    assert_eq!(balance.total_withdrawn, Uint256::zero());
}

#[test]
fn readding_token_keeps_its_history() {
    let mut mock = MockEnv::new().build().unwrap();
    let mut stream = stream();
    let token = addr(0xc1);

    mock.index(stream.token_added(&token)).unwrap();
    mock.index(stream.token_funds_added(&token, 300, 0, 300)).unwrap();
    mock.index(stream.token_added(&token)).unwrap();

    assert_eq!(mock.query_token_balance(&token).unwrap().balance, u256(300));
}

#[test]
fn other_token_deposit_is_also_tracked_per_token() {
    let mut mock = MockEnv::new().base_token(&base_token()).build().unwrap();
    let mut stream = stream();
    let token = addr(0xc1);

    mock.index(stream.funds_added(1_000, 1_000)).unwrap();
    let res = mock.index(stream.token_funds_added(&token, 300, 1_000, 300)).unwrap();
    assert_eq!(
        event_attribute(&res, "funds_added", "token_balance"),
        Some("300".to_string())
    );

    let balance = mock.query_token_balance(&token).unwrap();
    assert_eq!(balance.balance, u256(300));

    let funds = mock.query_funds().unwrap();
    assert_eq!(funds.total_supplied, u256(1_300));
    assert_eq!(funds.contract_balance, u256(1_000));
}

#[test]
fn base_token_deposit_counts_as_program_funds() {
    let mut mock = MockEnv::new().base_token(&base_token()).build().unwrap();
    let mut stream = stream();

    mock.index(stream.token_funds_added(&base_token(), 250, 250, 250)).unwrap();

    let funds = mock.query_funds().unwrap();
    assert_eq!(funds.total_supplied, u256(250));
    assert_eq!(funds.contract_balance, u256(250));
    assert_eq!(mock.query_token_balance(&base_token()), None);
}

#[test]
fn base_token_withdrawal_uses_reported_balance() {
    let mut mock = MockEnv::new().base_token(&base_token()).build().unwrap();
    let mut stream = stream();

    mock.index(stream.funds_added(1_000, 1_000)).unwrap();
    let res = mock.index(stream.token_funds_withdrawn(&base_token(), 100, 850)).unwrap();

    assert_eq!(
        event_attribute(&res, "funds_withdrawn", "balance_source"),
        Some("snapshot".to_string())
    );
    let funds = mock.query_funds().unwrap();
    assert_eq!(funds.total_withdrawn, u256(100));
    assert_eq!(funds.contract_balance, u256(850));
}

#[test]
fn other_token_withdrawal_counts_towards_program_totals() {
    let mut mock = MockEnv::new().base_token(&base_token()).build().unwrap();
    let mut stream = stream();
    let token = addr(0xc1);

    mock.index(stream.funds_added(1_000, 1_000)).unwrap();
    mock.index(stream.token_funds_added(&token, 300, 1_000, 300)).unwrap();
    let res = mock.index(stream.token_funds_withdrawn(&token, 120, 180)).unwrap();
    assert_eq!(
        event_attribute(&res, "funds_withdrawn", "balance_source"),
        Some("derived".to_string())
    );

    let balance = mock.query_token_balance(&token).unwrap();
    assert_eq!(balance.total_withdrawn, u256(120));
    assert_eq!(balance.balance, u256(180));

    let funds = mock.query_funds().unwrap();
    assert_eq!(funds.total_supplied, u256(1_300));
    assert_eq!(funds.total_withdrawn, u256(120));
    assert_eq!(funds.contract_balance, u256(880));
}

#[test]
fn token_funds_without_base_token_still_move_program_totals() {
    let mut mock = MockEnv::new().build().unwrap();
    let mut stream = stream();
    let token = addr(0xc1);

    mock.index(stream.token_funds_added(&token, 100, 100, 100)).unwrap();
    mock.index(stream.token_funds_withdrawn(&token, 30, 70)).unwrap();

    let funds = mock.query_funds().unwrap();
    assert_eq!(funds.total_supplied, u256(100));
    assert_eq!(funds.total_withdrawn, u256(30));
    assert_eq!(funds.contract_balance, u256(70));

    let balance = mock.query_token_balance(&token).unwrap();
    assert_eq!(balance.balance, u256(70));
    assert_eq!(balance.total_withdrawn, u256(30));
}

#[test]
fn swap_moves_value_into_program_balance() {
    let mut mock = MockEnv::new().base_token(&base_token()).build().unwrap();
    let mut stream = stream();
    let token = addr(0xc1);

    mock.index(stream.funds_added(1_000, 1_000)).unwrap();
    mock.index(stream.token_added(&token)).unwrap();
    mock.index(stream.token_funds_added(&token, 300, 1_000, 300)).unwrap();
    stream.next_block(12);
    mock.index(stream.token_swapped(&token, 200, 90)).unwrap();

    let balance = mock.query_token_balance(&token).unwrap();
    assert_eq!(balance.total_swapped, u256(200));
    assert_eq!(balance.balance, u256(100));

    let funds = mock.query_funds().unwrap();
    assert_eq!(funds.contract_balance, u256(1_090));
    assert_eq!(funds.total_supplied, u256(1_300));
}

#[test]
fn swapping_more_than_tracked_empties_token_balance() {
    let mut mock = MockEnv::new().build().unwrap();
    let mut stream = stream();
    let token = addr(0xc1);

    mock.index(stream.token_swapped(&token, 50, 20)).unwrap();

    let balance = mock.query_token_balance(&token).unwrap();
    assert_eq!(balance.total_swapped, u256(50));
    assert_eq!(balance.balance, Uint256::zero());
    assert_eq!(mock.query_funds().unwrap().contract_balance, u256(20));
}
