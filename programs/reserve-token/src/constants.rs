//! Program-wide constants.

/// Number of shards in the reserve pool.
pub const SHARD_COUNT: usize = 20;

/// Max members on the vesting roster.
pub const ROSTER_CAPACITY: usize = 10;

/// Refund records returned per `list_refunds` call. A full page (4 + 32 * 16 bytes)
/// stays under the 1024-byte return data limit.
pub const REFUND_PAGE_SIZE: usize = 32;

/// Base units per whole token (9 decimals).
const ONE_TOKEN: u64 = 1_000_000_000;

/// Default per-shard capacity (50M tokens). Total supply = SHARD_COUNT * capacity.
pub const DEFAULT_SHARD_CAPACITY: u64 = 50_000_000 * ONE_TOKEN;

/// Default one-time allocation pushed to each roster member at distribution.
pub const DEFAULT_MEMBER_ALLOCATION: u64 = 1_000_000 * ONE_TOKEN;

/// Default roster lock: 180 days in seconds.
pub const DEFAULT_LOCK_DURATION: i64 = 15_552_000;

pub const TOKEN_STATE_SEED: &[u8] = b"token_state";
pub const HOLDER_SEED: &[u8] = b"holder";
pub const ALLOWANCE_SEED: &[u8] = b"allowance";
pub const TRANSACTION_SEED: &[u8] = b"transaction";
pub const REFUND_LOG_SEED: &[u8] = b"refund_log";
