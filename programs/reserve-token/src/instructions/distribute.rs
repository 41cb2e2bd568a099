use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::error::TokenError;
use crate::state::{Holder, TokenState};

/// One-time roster distribution.
///
/// Remaining accounts: one writable `Holder` per roster member, in roster
/// order. All holders are loaded and checked before any balance moves.
pub fn distribute(ctx: Context<Distribute>) -> Result<u64> {
    let authority = ctx.accounts.authority.key();

    let mut holders = Vec::with_capacity(ctx.remaining_accounts.len());
    for info in ctx.remaining_accounts.iter() {
        require!(info.owner == &crate::ID, TokenError::RosterAccountsMismatch);
        require!(info.is_writable, TokenError::RosterAccountsMismatch);
        let data = info.try_borrow_data()?;
        holders.push(Holder::try_deserialize(&mut &data[..])?);
    }

    let st = &mut ctx.accounts.token_state;
    let shortfall = st.distribute(&authority, &mut holders)?;

    for (info, holder) in ctx.remaining_accounts.iter().zip(holders.iter()) {
        let mut data = info.try_borrow_mut_data()?;
        AnchorSerialize::serialize(holder, &mut &mut data[8..])
            .map_err(|_| anchor_lang::error::ErrorCode::AccountDidNotSerialize)?;
    }

    if shortfall > 0 {
        msg!("distribution shortfall: {} units not available in reserve", shortfall);
    }

    emit!(RosterDistributed {
        member_count: st.roster.member_count,
        allocation: st.roster.member_allocation,
        shortfall,
        reserve_held: st.reserve.total_held(),
    });

    Ok(shortfall)
}

#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    pub authority: Signer<'info>,
}

#[event]
pub struct RosterDistributed {
    pub member_count: u8,
    pub allocation: u64,
    pub shortfall: u64,
    pub reserve_held: u64,
}
