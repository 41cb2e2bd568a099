use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, TOKEN_STATE_SEED, TRANSACTION_SEED};
use crate::error::TokenError;
use crate::state::{Holder, TokenState, TransactionRecord};
use crate::utils::identifier::matches_identifier;

/// Approve a pending transaction and pay it out of the reserve.
///
/// Returns the shortfall: the part of the requested amount the reserve
/// could not supply. The recipient is credited only what was withdrawn.
pub fn sign_transaction(
    ctx: Context<SignTransaction>,
    transaction_id: [u8; 32],
    identifier: String,
) -> Result<u64> {
    require!(
        matches_identifier(&transaction_id, &identifier),
        TokenError::InvalidIdentifier
    );
    let approver = ctx.accounts.approver.key();
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    let shortfall = accounts.token_state.sign_transaction(
        &approver,
        &mut accounts.transaction,
        &mut accounts.recipient_holder,
        now,
    )?;

    let record = &accounts.transaction;
    if shortfall > 0 {
        msg!(
            "reserve short by {} of {} requested; credited {}",
            shortfall,
            record.requested_amount,
            record.credited_amount
        );
    }

    emit!(TransactionSigned {
        transaction_id,
        recipient: record.recipient,
        requested_amount: record.requested_amount,
        credited_amount: record.credited_amount,
        shortfall,
        signed_at: now,
    });
    Ok(shortfall)
}

#[derive(Accounts)]
#[instruction(transaction_id: [u8; 32])]
pub struct SignTransaction<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [TRANSACTION_SEED, token_state.key().as_ref(), transaction_id.as_ref()],
        bump = transaction.bump
    )]
    pub transaction: Account<'info, TransactionRecord>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, token_state.key().as_ref(), transaction.recipient.as_ref()],
        bump = recipient_holder.bump
    )]
    pub recipient_holder: Account<'info, Holder>,

    pub approver: Signer<'info>,
}

#[event]
pub struct TransactionSigned {
    pub transaction_id: [u8; 32],
    pub recipient: Pubkey,
    pub requested_amount: u64,
    pub credited_amount: u64,
    pub shortfall: u64,
    pub signed_at: i64,
}
