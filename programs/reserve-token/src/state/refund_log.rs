use anchor_lang::prelude::*;

use crate::constants::REFUND_PAGE_SIZE;
use crate::error::{TokenError, TokenResult};

/// One intercepted transfer to the refund address.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefundRecord {
    pub amount: u64,
    pub timestamp: i64,
}

impl RefundRecord {
    pub const SIZE: usize = 8 + 8;
}

/// Per-sender refund history. Append-only except for the authority's bulk clear.
/// The account grows by one record per parked transfer.
/// Seeds: [b"refund_log", token_state, sender]
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RefundLog {
    pub sender: Pubkey,
    pub bump: u8,
    pub records: Vec<RefundRecord>,
}

impl RefundLog {
    /// Account space for a log holding `records` entries.
    pub const fn space(records: usize) -> usize {
        8 + 32 + 1 + 4 + records * RefundRecord::SIZE
    }

    pub fn record(&mut self, amount: u64, now_ts: i64) {
        self.records.push(RefundRecord {
            amount,
            timestamp: now_ts,
        });
    }

    /// Records `[offset, offset + REFUND_PAGE_SIZE)`, clipped to the log.
    pub fn page(&self, offset: usize) -> &[RefundRecord] {
        let start = offset.min(self.records.len());
        let end = start.saturating_add(REFUND_PAGE_SIZE).min(self.records.len());
        &self.records[start..end]
    }

    pub fn total(&self) -> TokenResult<u64> {
        self.records.iter().try_fold(0u64, |acc, r| {
            acc.checked_add(r.amount).ok_or(TokenError::MathOverflow)
        })
    }
}
