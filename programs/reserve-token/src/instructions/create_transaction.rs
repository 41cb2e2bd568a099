use anchor_lang::prelude::*;

use crate::constants::{TOKEN_STATE_SEED, TRANSACTION_SEED};
use crate::error::TokenError;
use crate::state::{TokenState, TransactionRecord};
use crate::utils::identifier::matches_identifier;

/// Record a payout request. Nothing moves until the approver signs it.
///
/// `transaction_id` must be `blake3(identifier)`; the record lives at that
/// seed and is never overwritten once created.
pub fn create_transaction(
    ctx: Context<CreateTransaction>,
    transaction_id: [u8; 32],
    identifier: String,
    recipient: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(
        matches_identifier(&transaction_id, &identifier),
        TokenError::InvalidIdentifier
    );
    let authority = ctx.accounts.authority.key();
    let now = Clock::get()?.unix_timestamp;

    let record = &mut ctx.accounts.transaction;
    ctx.accounts
        .token_state
        .create_transaction(&authority, record, transaction_id, recipient, amount, now)?;
    record.bump = ctx.bumps.transaction;

    emit!(TransactionCreated {
        transaction_id,
        recipient,
        amount,
        created_at: now,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(transaction_id: [u8; 32])]
pub struct CreateTransaction<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        init_if_needed,
        payer = authority,
        space = TransactionRecord::SIZE,
        seeds = [TRANSACTION_SEED, token_state.key().as_ref(), transaction_id.as_ref()],
        bump
    )]
    pub transaction: Account<'info, TransactionRecord>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TransactionCreated {
    pub transaction_id: [u8; 32],
    pub recipient: Pubkey,
    pub amount: u64,
    pub created_at: i64,
}
