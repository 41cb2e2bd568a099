//! Timelock arithmetic over the runtime clock (Unix seconds).
//! - elapsed = now - start, rejected when now < start
//! - unlocked iff elapsed >= lock_duration (inclusive at the boundary)

use crate::error::{TokenError, TokenResult};

/// Seconds elapsed since `start_ts`.
pub fn elapsed_since(now_ts: i64, start_ts: i64) -> TokenResult<i64> {
    if now_ts < start_ts {
        return Err(TokenError::BeforeStart);
    }
    now_ts
        .checked_sub(start_ts)
        .ok_or(TokenError::MathOverflow)
}

/// True once `lock_duration` seconds have passed since `start_ts`.
pub fn timelock_elapsed(now_ts: i64, start_ts: i64, lock_duration: i64) -> TokenResult<bool> {
    Ok(elapsed_since(now_ts, start_ts)? >= lock_duration)
}

/// First timestamp at which the lock is open.
pub fn unlock_ts(start_ts: i64, lock_duration: i64) -> TokenResult<i64> {
    start_ts
        .checked_add(lock_duration)
        .ok_or(TokenError::MathOverflow)
}
