use anchor_lang::prelude::*;

use crate::constants::{REFUND_LOG_SEED, TOKEN_STATE_SEED};
use crate::error::TokenError;
use crate::state::{RefundLog, TokenState};

/// Create `sender`'s empty refund log. Transfers grow it as records are parked.
pub fn open_refund_log(ctx: Context<OpenRefundLog>, sender: Pubkey) -> Result<()> {
    require!(sender != Pubkey::default(), TokenError::InvalidIdentity);

    let log = &mut ctx.accounts.refund_log;
    log.sender = sender;
    log.bump = ctx.bumps.refund_log;
    log.records = Vec::new();
    Ok(())
}

#[derive(Accounts)]
#[instruction(sender: Pubkey)]
pub struct OpenRefundLog<'info> {
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        init,
        payer = payer,
        space = RefundLog::space(0),
        seeds = [REFUND_LOG_SEED, token_state.key().as_ref(), sender.as_ref()],
        bump
    )]
    pub refund_log: Account<'info, RefundLog>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
