use anchor_lang::prelude::*;

use crate::error::{TokenError, TokenResult};

/// Ledger balance PDA, one per owner.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Holder {
    pub owner: Pubkey,
    pub balance: u64,
    pub bump: u8,
}

impl Holder {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        8 +  // balance
        1;   // bump

    pub fn credit(&mut self, amount: u64) -> TokenResult<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TokenError::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> TokenResult<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;
        Ok(())
    }
}

/// Spending allowance granted by `owner` to `spender`.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Allowance {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Allowance {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        32 + // spender
        8 +  // amount
        1;   // bump

    pub fn spend(&mut self, amount: u64) -> TokenResult<()> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance)?;
        Ok(())
    }
}
