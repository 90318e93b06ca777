use cosmwasm_std::Uint256;

/// Assert elements in vecs one by one in order to get a more meaningful error
/// when debugging tests
pub fn assert_eq_vec<T: std::fmt::Debug + PartialEq>(expected: Vec<T>, actual: Vec<T>) {
    assert_eq!(expected.len(), actual.len());

    for (i, element) in expected.iter().enumerate() {
        assert_eq!(*element, actual[i]);
    }
}

/// Deterministic lowercase address ending in `n`, e.g. `addr(1)` = `0x00..01`
pub fn addr(n: u64) -> String {
    format!("0x{n:040x}")
}

/// Deterministic transaction hash for block `block` and transaction `index`
pub fn tx_hash(block: u64, index: u64) -> String {
    format!("0x{block:032x}{index:032x}")
}

pub fn u256(value: u128) -> Uint256 {
    Uint256::from(value)
}
