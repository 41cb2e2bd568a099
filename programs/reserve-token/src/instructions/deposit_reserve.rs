use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, TOKEN_STATE_SEED};
use crate::error::TokenError;
use crate::state::{Holder, TokenState};

/// Return units from the authority's holder to the reserve.
/// Returns what the shards could not absorb; that part stays with the authority.
pub fn deposit_reserve(ctx: Context<DepositReserve>, amount: u64) -> Result<u64> {
    require!(amount > 0, TokenError::InvalidAmount);
    let authority = ctx.accounts.authority.key();
    let accounts = &mut *ctx.accounts;
    require!(
        accounts.authority_holder.balance >= amount,
        TokenError::InsufficientBalance
    );

    let remainder = accounts.token_state.deposit_reserve(&authority, amount)?;
    accounts.authority_holder.debit(amount - remainder)?;

    emit!(ReserveDeposited {
        authority,
        requested: amount,
        deposited: amount - remainder,
        remainder,
        reserve_held: accounts.token_state.reserve.total_held(),
    });
    Ok(remainder)
}

#[derive(Accounts)]
pub struct DepositReserve<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, token_state.key().as_ref(), authority.key().as_ref()],
        bump = authority_holder.bump
    )]
    pub authority_holder: Account<'info, Holder>,

    pub authority: Signer<'info>,
}

#[event]
pub struct ReserveDeposited {
    pub authority: Pubkey,
    pub requested: u64,
    pub deposited: u64,
    pub remainder: u64,
    pub reserve_held: u64,
}
