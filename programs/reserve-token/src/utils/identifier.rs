//! Transaction identifiers: blake3 of the human-supplied token.

/// Key under which a transaction record is stored.
pub fn transaction_key(identifier: &str) -> [u8; 32] {
    *blake3::hash(identifier.as_bytes()).as_bytes()
}

pub fn matches_identifier(transaction_id: &[u8; 32], identifier: &str) -> bool {
    transaction_key(identifier) == *transaction_id
}
