pub const HOUSE_SEED: &[u8] = b"house";

/// Longest secret the archive can hold.
pub const MAX_SECRET_LEN: usize = 64;

pub const BPS_DENOMINATOR: u64 = 10_000;

/// 10%. Keeps the fee on a pooled pair of bids below a single bid.
pub const MAX_FEE_BPS: u16 = 1_000;

pub const EMPTY_COMMITMENT: [u8; 32] = [0u8; 32];
