use anchor_lang::prelude::*;

use crate::constants::{ALLOWANCE_SEED, HOLDER_SEED, REFUND_LOG_SEED, TOKEN_STATE_SEED};
use crate::instructions::transfer::emit_settled;
use crate::state::{Allowance, Holder, RefundLog, TokenState};

/// Spend an allowance. Interception and member locks apply to the owner,
/// not the spender.
pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let spender = ctx.accounts.spender.key();
    let accounts = &mut *ctx.accounts;

    let outcome = accounts.token_state.transfer_from(
        &mut accounts.allowance,
        &mut accounts.owner_holder,
        &mut accounts.recipient_holder,
        accounts.refund_log.as_deref_mut(),
        amount,
        now,
    )?;

    emit_settled(
        accounts.owner_holder.owner,
        accounts.recipient_holder.owner,
        Some(spender),
        amount,
        outcome,
        now,
    );
    Ok(())
}

#[derive(Accounts)]
pub struct TransferFrom<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, token_state.key().as_ref(), owner_holder.owner.as_ref()],
        bump = owner_holder.bump
    )]
    pub owner_holder: Account<'info, Holder>,

    #[account(
        mut,
        seeds = [
            ALLOWANCE_SEED,
            token_state.key().as_ref(),
            owner_holder.owner.as_ref(),
            spender.key().as_ref()
        ],
        bump = allowance.bump
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, token_state.key().as_ref(), recipient_holder.owner.as_ref()],
        bump = recipient_holder.bump
    )]
    pub recipient_holder: Account<'info, Holder>,

    /// Owner's refund log; required only when the recipient is the refund
    /// address. Grows by one record, paid by the spender.
    #[account(
        mut,
        seeds = [REFUND_LOG_SEED, token_state.key().as_ref(), owner_holder.owner.as_ref()],
        bump = refund_log.bump,
        realloc = RefundLog::space(refund_log.records.len() + 1),
        realloc::payer = spender,
        realloc::zero = true
    )]
    pub refund_log: Option<Account<'info, RefundLog>>,

    #[account(mut)]
    pub spender: Signer<'info>,

    pub system_program: Program<'info, System>,
}
