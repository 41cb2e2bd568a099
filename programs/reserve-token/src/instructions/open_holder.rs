use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, TOKEN_STATE_SEED};
use crate::error::TokenError;
use crate::state::{Holder, TokenState};

/// Create the zero-balance ledger account for `owner`. Anyone may pay the rent.
pub fn open_holder(ctx: Context<OpenHolder>, owner: Pubkey) -> Result<()> {
    require!(owner != Pubkey::default(), TokenError::InvalidIdentity);

    let holder = &mut ctx.accounts.holder;
    holder.owner = owner;
    holder.balance = 0;
    holder.bump = ctx.bumps.holder;
    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct OpenHolder<'info> {
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        init,
        payer = payer,
        space = Holder::SIZE,
        seeds = [HOLDER_SEED, token_state.key().as_ref(), owner.as_ref()],
        bump
    )]
    pub holder: Account<'info, Holder>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
