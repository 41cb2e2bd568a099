use anchor_lang::prelude::*;

use crate::error::{TokenError, TokenResult};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Recorded by the authority, waiting for the approver.
    #[default]
    Created,
    /// Approved and paid out. Terminal.
    Signed,
}

/// Payout request keyed by `blake3(identifier)`.
/// Seeds: [b"transaction", token_state, transaction_id]
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TransactionRecord {
    pub transaction_id: [u8; 32],
    /// Default key marks a freshly allocated, never-created record.
    pub recipient: Pubkey,
    pub requested_amount: u64,
    /// Fixed at signing: requested minus pool shortfall.
    pub credited_amount: u64,
    pub status: TransactionStatus,
    pub created_at: i64,
    pub signed_at: i64,
    pub bump: u8,
}

impl TransactionRecord {
    pub const SIZE: usize = 8 + // discriminator
        32 + // transaction_id
        32 + // recipient
        8 +  // requested_amount
        8 +  // credited_amount
        1 +  // status
        8 +  // created_at
        8 +  // signed_at
        1;   // bump

    pub fn is_vacant(&self) -> bool {
        self.recipient == Pubkey::default()
    }

    /// Fill a vacant record. Existing records are never overwritten.
    pub fn open(
        &mut self,
        transaction_id: [u8; 32],
        recipient: Pubkey,
        amount: u64,
        now_ts: i64,
    ) -> TokenResult<()> {
        if !self.is_vacant() {
            return Err(match self.status {
                TransactionStatus::Created => TokenError::TransactionPending,
                TransactionStatus::Signed => TokenError::TransactionAlreadySigned,
            });
        }
        if recipient == Pubkey::default() {
            return Err(TokenError::InvalidIdentity);
        }
        if amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        self.transaction_id = transaction_id;
        self.recipient = recipient;
        self.requested_amount = amount;
        self.credited_amount = 0;
        self.status = TransactionStatus::Created;
        self.created_at = now_ts;
        self.signed_at = 0;
        Ok(())
    }

    pub fn require_pending(&self) -> TokenResult<()> {
        if self.is_vacant() {
            return Err(TokenError::InvalidIdentifier);
        }
        match self.status {
            TransactionStatus::Created => Ok(()),
            TransactionStatus::Signed => Err(TokenError::TransactionAlreadySigned),
        }
    }

    pub fn mark_signed(&mut self, credited_amount: u64, now_ts: i64) -> TokenResult<()> {
        self.require_pending()?;
        if credited_amount > self.requested_amount {
            return Err(TokenError::MathOverflow);
        }
        self.status = TransactionStatus::Signed;
        self.credited_amount = credited_amount;
        self.signed_at = now_ts;
        Ok(())
    }
}
