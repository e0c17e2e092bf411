//! Commit-reveal hashing for Player 1's hidden choice.
//!
//! A commitment is `keccak256(secret ‖ encode_choice(choice))`. Off-chain
//! tooling builds it with [`compute`]; the program checks a reveal with
//! [`verify`].

use anchor_lang::solana_program::keccak;

/// Single-byte two's-complement big-endian encoding of a choice.
///
/// This is the shortest even-length hex form of an `i8`: `3 -> 0x03`,
/// `-1 -> 0xff`.
pub fn encode_choice(choice: i8) -> [u8; 1] {
    choice.to_be_bytes()
}

pub fn compute(secret: &[u8], choice: i8) -> [u8; 32] {
    keccak::hashv(&[secret, &encode_choice(choice)]).to_bytes()
}

/// Byte-exact comparison of a revealed pair against a stored commitment.
pub fn verify(commitment: &[u8; 32], secret: &[u8], choice: i8) -> bool {
    compute(secret, choice) == *commitment
}
