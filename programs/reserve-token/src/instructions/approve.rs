use anchor_lang::prelude::*;

use crate::constants::{ALLOWANCE_SEED, TOKEN_STATE_SEED};
use crate::error::TokenError;
use crate::state::{Allowance, TokenState};

/// Set (overwrite) the amount `spender` may move out of the owner's balance.
pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
    require!(spender != Pubkey::default(), TokenError::InvalidIdentity);
    let owner = ctx.accounts.owner.key();
    require!(spender != owner, TokenError::InvalidIdentity);

    let allowance = &mut ctx.accounts.allowance;
    allowance.owner = owner;
    allowance.spender = spender;
    allowance.amount = amount;
    allowance.bump = ctx.bumps.allowance;

    emit!(Approved {
        owner,
        spender,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(spender: Pubkey)]
pub struct Approve<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        init_if_needed,
        payer = owner,
        space = Allowance::SIZE,
        seeds = [
            ALLOWANCE_SEED,
            token_state.key().as_ref(),
            owner.key().as_ref(),
            spender.as_ref()
        ],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Approved {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}
