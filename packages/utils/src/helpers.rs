use crate::error::ValidationError;

const ADDRESS_PREFIX: &str = "0x";
const ADDRESS_HEX_LEN: usize = 40;

/// Validates a 20-byte hex address and returns it normalized to lowercase.
///
/// The `0x` prefix is mandatory (either case). Mixed-case checksummed input is accepted, the
/// checksum itself is not verified.
pub fn normalize_evm_address(address: &str) -> Result<String, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidAddress {
        address: address.to_string(),
        reason: reason.to_string(),
    };

    let hex = address
        .strip_prefix(ADDRESS_PREFIX)
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| invalid("missing 0x prefix"))?;

    if hex.len() != ADDRESS_HEX_LEN {
        return Err(invalid("expected 40 hex characters"));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("not all characters are hex digits"));
    }

    Ok(format!("{ADDRESS_PREFIX}{}", hex.to_ascii_lowercase()))
}

/// Transaction hashes are 32-byte hex strings, normalized the same way as addresses.
pub fn normalize_tx_hash(hash: &str) -> Result<String, ValidationError> {
    let hex = hash.strip_prefix(ADDRESS_PREFIX).unwrap_or(hash);

    if hex.len() != 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidParam {
            param_name: "transaction_hash".to_string(),
            invalid_value: hash.to_string(),
            predicate: "32 bytes of hex".to_string(),
        });
    }

    Ok(format!("{ADDRESS_PREFIX}{}", hex.to_ascii_lowercase()))
}
