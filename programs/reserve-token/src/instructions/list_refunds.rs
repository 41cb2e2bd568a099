use anchor_lang::prelude::*;

use crate::constants::{REFUND_LOG_SEED, TOKEN_STATE_SEED};
use crate::error::TokenError;
use crate::state::{RefundLog, RefundRecord, TokenState};

/// Authority-only view of a sender's refund history, returned as instruction
/// return data one page (`REFUND_PAGE_SIZE` records) at a time.
pub fn list_refunds(ctx: Context<ListRefunds>, offset: u32) -> Result<Vec<RefundRecord>> {
    let st = &ctx.accounts.token_state;
    require!(
        st.gate.is_authority(&ctx.accounts.authority.key()),
        TokenError::UnauthorizedAuthority
    );
    Ok(ctx.accounts.refund_log.page(offset as usize).to_vec())
}

#[derive(Accounts)]
pub struct ListRefunds<'info> {
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        seeds = [REFUND_LOG_SEED, token_state.key().as_ref(), refund_log.sender.as_ref()],
        bump = refund_log.bump
    )]
    pub refund_log: Account<'info, RefundLog>,

    pub authority: Signer<'info>,
}
