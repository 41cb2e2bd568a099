use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;
use crate::utils::time;

/// Close setup and open the operating phase. The roster is frozen from here on.
pub fn start_operations(ctx: Context<StartOperations>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let now = Clock::get()?.unix_timestamp;

    let st = &mut ctx.accounts.token_state;
    st.start_operations(&authority, now)?;
    let unlock_ts = time::unlock_ts(now, st.roster.lock_duration)?;

    emit!(OperationsStarted {
        start_ts: now,
        member_unlock_ts: unlock_ts,
        member_count: st.roster.member_count,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct StartOperations<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    pub authority: Signer<'info>,
}

#[event]
pub struct OperationsStarted {
    pub start_ts: i64,
    pub member_unlock_ts: i64,
    pub member_count: u8,
}
