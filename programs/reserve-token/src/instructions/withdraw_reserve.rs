use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, TOKEN_STATE_SEED};
use crate::state::{Holder, TokenState};

/// Issue units from the reserve to the caller's own holder on a single
/// signature. Payouts to anyone else go through `create_transaction` and
/// `sign_transaction`. Returns the shortfall; only the withdrawn part is credited.
pub fn withdraw_reserve(ctx: Context<WithdrawReserve>, amount: u64) -> Result<u64> {
    let operator = ctx.accounts.operator.key();
    let accounts = &mut *ctx.accounts;

    let remainder = accounts.token_state.withdraw_reserve(&operator, amount)?;
    accounts.operator_holder.credit(amount - remainder)?;

    emit!(ReserveWithdrawn {
        operator,
        requested: amount,
        withdrawn: amount - remainder,
        remainder,
        reserve_held: accounts.token_state.reserve.total_held(),
    });
    Ok(remainder)
}

#[derive(Accounts)]
pub struct WithdrawReserve<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, token_state.key().as_ref(), operator.key().as_ref()],
        bump = operator_holder.bump
    )]
    pub operator_holder: Account<'info, Holder>,

    pub operator: Signer<'info>,
}

#[event]
pub struct ReserveWithdrawn {
    pub operator: Pubkey,
    pub requested: u64,
    pub withdrawn: u64,
    pub remainder: u64,
    pub reserve_held: u64,
}
