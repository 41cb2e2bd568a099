use anchor_lang::prelude::*;

use crate::constants::ROSTER_CAPACITY;
use crate::error::{TokenError, TokenResult};
use crate::utils::time;

/// Team roster: fixed slots filled during setup, a one-shot distribution
/// flag and the transfer restriction placed on members until the lock opens.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingRoster {
    /// Insertion order; only the first `member_count` slots are meaningful.
    pub members: [Pubkey; ROSTER_CAPACITY],
    pub member_count: u8,
    /// Units pushed to each member by the one-time distribution.
    pub member_allocation: u64,
    /// Seconds after operating start before member transfers may be unlocked.
    pub lock_duration: i64,
    /// Armed at initialize; consumed by the distribution, never re-armed.
    pub distribution_armed: bool,
    pub member_transfers_allowed: bool,
}

impl VestingRoster {
    pub const SIZE: usize =
        32 * ROSTER_CAPACITY + // members
        1 +                    // member_count
        8 +                    // member_allocation
        8 +                    // lock_duration
        1 +                    // distribution_armed
        1;                     // member_transfers_allowed

    pub fn new(member_allocation: u64, lock_duration: i64) -> Self {
        Self {
            members: [Pubkey::default(); ROSTER_CAPACITY],
            member_count: 0,
            member_allocation,
            lock_duration,
            distribution_armed: true,
            member_transfers_allowed: false,
        }
    }

    pub fn members(&self) -> &[Pubkey] {
        &self.members[..self.member_count as usize]
    }

    pub fn contains(&self, id: &Pubkey) -> bool {
        self.members().iter().any(|m| m == id)
    }

    pub fn is_full(&self) -> bool {
        self.member_count as usize >= ROSTER_CAPACITY
    }

    /// Append a member. Returns the new member count.
    pub fn add_member(&mut self, id: Pubkey) -> TokenResult<u8> {
        if id == Pubkey::default() {
            return Err(TokenError::InvalidIdentity);
        }
        if self.contains(&id) {
            return Err(TokenError::DuplicateMember);
        }
        if self.is_full() {
            return Err(TokenError::RosterFull);
        }
        self.members[self.member_count as usize] = id;
        self.member_count = self
            .member_count
            .checked_add(1)
            .ok_or(TokenError::MathOverflow)?;
        Ok(self.member_count)
    }

    pub fn consume_distribution(&mut self) -> TokenResult<()> {
        if !self.distribution_armed {
            return Err(TokenError::DistributionConsumed);
        }
        self.distribution_armed = false;
        Ok(())
    }

    /// Unlock member transfers once `lock_duration` has passed since `start_ts`.
    pub fn lift_restriction(&mut self, now_ts: i64, start_ts: i64) -> TokenResult<()> {
        if self.member_transfers_allowed {
            return Err(TokenError::RestrictionAlreadyLifted);
        }
        if !time::timelock_elapsed(now_ts, start_ts, self.lock_duration)? {
            return Err(TokenError::TimelockActive);
        }
        self.member_transfers_allowed = true;
        Ok(())
    }

    pub fn is_transfer_allowed(&self, id: &Pubkey) -> bool {
        !self.contains(id) || self.member_transfers_allowed
    }
}
