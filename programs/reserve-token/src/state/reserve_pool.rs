use anchor_lang::prelude::*;

use crate::constants::SHARD_COUNT;

/// Unissued supply split across `SHARD_COUNT` capacity-bounded shards.
///
/// Both cascades scan from shard 0 on every call; there is no persisted
/// cursor. Shortfalls are reported as the returned remainder, never as an
/// error.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReservePool {
    /// Ceiling shared by every shard.
    pub shard_capacity: u64,
    /// Invariant: `0 <= shards[i] <= shard_capacity`.
    pub shards: [u64; SHARD_COUNT],
}

impl ReservePool {
    pub const SIZE: usize = 8 + 8 * SHARD_COUNT;

    /// Every shard filled to capacity.
    pub fn full(shard_capacity: u64) -> Self {
        Self {
            shard_capacity,
            shards: [shard_capacity; SHARD_COUNT],
        }
    }

    pub fn empty(shard_capacity: u64) -> Self {
        Self {
            shard_capacity,
            shards: [0; SHARD_COUNT],
        }
    }

    /// Take up to `amount` from the shards, lowest index first.
    /// Returns the part that could not be taken.
    pub fn withdraw(&mut self, amount: u64) -> u64 {
        let mut remaining = amount;
        for shard in self.shards.iter_mut() {
            if remaining == 0 {
                break;
            }
            if *shard == 0 {
                continue;
            }
            let take = remaining.min(*shard);
            *shard -= take;
            remaining -= take;
        }
        remaining
    }

    /// Put `amount` back, filling shards up to capacity from the lowest index.
    /// Returns the part no shard could absorb.
    pub fn deposit(&mut self, amount: u64) -> u64 {
        let mut remaining = amount;
        for shard in self.shards.iter_mut() {
            if remaining == 0 {
                break;
            }
            let room = self.shard_capacity.saturating_sub(*shard);
            if room == 0 {
                continue;
            }
            let put = remaining.min(room);
            *shard += put;
            remaining -= put;
        }
        remaining
    }

    /// Sum of shard balances. Cannot overflow: each shard is capped and
    /// `SHARD_COUNT * shard_capacity` is checked to fit at initialize.
    pub fn total_held(&self) -> u64 {
        self.shards.iter().sum()
    }

    pub fn free_capacity(&self) -> u64 {
        self.shards
            .iter()
            .map(|s| self.shard_capacity.saturating_sub(*s))
            .sum()
    }

    pub fn within_capacity(&self) -> bool {
        self.shards.iter().all(|s| *s <= self.shard_capacity)
    }
}
