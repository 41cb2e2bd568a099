use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;

/// Let roster members transfer once the lock has run since operating start.
pub fn lift_member_restriction(ctx: Context<LiftMemberRestriction>) -> Result<()> {
    let approver = ctx.accounts.approver.key();
    let now = Clock::get()?.unix_timestamp;

    let st = &mut ctx.accounts.token_state;
    st.lift_member_restriction(&approver, now)?;

    emit!(MemberRestrictionLifted {
        approver,
        start_ts: st.work.start_ts,
        lifted_at: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct LiftMemberRestriction<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    pub approver: Signer<'info>,
}

#[event]
pub struct MemberRestrictionLifted {
    pub approver: Pubkey,
    pub start_ts: i64,
    pub lifted_at: i64,
}
