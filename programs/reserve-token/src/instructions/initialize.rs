use anchor_lang::prelude::*;

use crate::constants::{ROSTER_CAPACITY, SHARD_COUNT, TOKEN_STATE_SEED};
use crate::state::{TokenConfig, TokenState};

pub fn initialize(
    ctx: Context<Initialize>,
    approver: Pubkey,
    refund_address: Pubkey,
    config: TokenConfig,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let state = TokenState::setup(
        authority,
        approver,
        refund_address,
        &config,
        ctx.bumps.token_state,
    )?;
    ctx.accounts.token_state.set_inner(state);

    let st = &ctx.accounts.token_state;
    msg!(
        "reserve: {} shards x {} = {} units; roster capacity {}",
        SHARD_COUNT,
        config.shard_capacity,
        st.total_supply,
        ROSTER_CAPACITY
    );

    emit!(TokenInitialized {
        authority,
        approver,
        refund_address,
        total_supply: st.total_supply,
        shard_capacity: config.shard_capacity,
        member_allocation: config.member_allocation,
        lock_duration: config.lock_duration,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = TokenState::SIZE,
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokenInitialized {
    pub authority: Pubkey,
    pub approver: Pubkey,
    pub refund_address: Pubkey,
    pub total_supply: u64,
    pub shard_capacity: u64,
    pub member_allocation: u64,
    pub lock_duration: i64,
}
