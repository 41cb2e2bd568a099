use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, REFUND_LOG_SEED, TOKEN_STATE_SEED};
use crate::state::{Holder, RefundLog, TokenState, TransferOutcome};

/// Holder-to-holder transfer. Transfers addressed to the refund address are
/// parked in the sender's refund log instead of being credited.
pub fn transfer(ctx: Context<Transfer>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    let outcome = accounts.token_state.transfer(
        &mut accounts.sender_holder,
        &mut accounts.recipient_holder,
        accounts.refund_log.as_deref_mut(),
        amount,
        now,
    )?;

    emit_settled(
        accounts.sender_holder.owner,
        accounts.recipient_holder.owner,
        None,
        amount,
        outcome,
        now,
    );
    Ok(())
}

pub(crate) fn emit_settled(
    from: Pubkey,
    to: Pubkey,
    spender: Option<Pubkey>,
    amount: u64,
    outcome: TransferOutcome,
    now: i64,
) {
    match outcome {
        TransferOutcome::Delivered => emit!(Transferred {
            from,
            to,
            spender,
            amount,
        }),
        TransferOutcome::Parked => emit!(RefundParked {
            sender: from,
            spender,
            amount,
            timestamp: now,
        }),
    }
}

#[derive(Accounts)]
pub struct Transfer<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, token_state.key().as_ref(), sender.key().as_ref()],
        bump = sender_holder.bump
    )]
    pub sender_holder: Account<'info, Holder>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, token_state.key().as_ref(), recipient_holder.owner.as_ref()],
        bump = recipient_holder.bump
    )]
    pub recipient_holder: Account<'info, Holder>,

    /// Required only when the recipient is the refund address. Grows by one
    /// record, paid by the sender.
    #[account(
        mut,
        seeds = [REFUND_LOG_SEED, token_state.key().as_ref(), sender.key().as_ref()],
        bump = refund_log.bump,
        realloc = RefundLog::space(refund_log.records.len() + 1),
        realloc::payer = sender,
        realloc::zero = true
    )]
    pub refund_log: Option<Account<'info, RefundLog>>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Transferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub spender: Option<Pubkey>,
    pub amount: u64,
}

#[event]
pub struct RefundParked {
    pub sender: Pubkey,
    pub spender: Option<Pubkey>,
    pub amount: u64,
    pub timestamp: i64,
}
