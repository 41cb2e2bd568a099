use anchor_lang::prelude::*;

use crate::constants::{REFUND_LOG_SEED, TOKEN_STATE_SEED};
use crate::state::{RefundLog, TokenState};

/// Reverse every parked transfer for one sender back into the reserve.
/// Returns the amount the reserve could not absorb (left as a residual record).
pub fn clear_refunds(ctx: Context<ClearRefunds>) -> Result<u64> {
    let authority = ctx.accounts.authority.key();
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    let cleared_records = accounts.refund_log.records.len() as u32;
    let parked = accounts.refund_log.total()?;
    let residual = accounts
        .token_state
        .clear_refunds(&authority, &mut accounts.refund_log, now)?;

    if residual > 0 {
        msg!(
            "reserve absorbed {} of {} refunded units; {} kept as residual",
            parked - residual,
            parked,
            residual
        );
    }

    emit!(RefundsCleared {
        sender: accounts.refund_log.sender,
        cleared_records,
        restored: parked - residual,
        residual,
        reserve_held: accounts.token_state.reserve.total_held(),
    });
    Ok(residual)
}

#[derive(Accounts)]
pub struct ClearRefunds<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [REFUND_LOG_SEED, token_state.key().as_ref(), refund_log.sender.as_ref()],
        bump = refund_log.bump
    )]
    pub refund_log: Account<'info, RefundLog>,

    pub authority: Signer<'info>,
}

#[event]
pub struct RefundsCleared {
    pub sender: Pubkey,
    pub cleared_records: u32,
    pub restored: u64,
    pub residual: u64,
    pub reserve_held: u64,
}
