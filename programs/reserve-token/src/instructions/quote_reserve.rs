use anchor_lang::prelude::*;

use crate::constants::{SHARD_COUNT, TOKEN_STATE_SEED};
use crate::state::TokenState;

/// Read-only snapshot of the reserve. Emits the per-shard view, returns the total.
pub fn quote_reserve(ctx: Context<QuoteReserve>) -> Result<u64> {
    let st = &ctx.accounts.token_state;
    let total_held = st.reserve.total_held();

    emit!(ReserveQuote {
        total_held,
        shards: st.reserve.shards,
        shard_capacity: st.reserve.shard_capacity,
        parked_supply: st.parked_supply,
        total_supply: st.total_supply,
    });
    Ok(total_held)
}

#[derive(Accounts)]
pub struct QuoteReserve<'info> {
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,
}

#[event]
pub struct ReserveQuote {
    pub total_held: u64,
    pub shards: [u64; SHARD_COUNT],
    pub shard_capacity: u64,
    pub parked_supply: u64,
    pub total_supply: u64,
}
