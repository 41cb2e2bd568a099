use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let st = &mut ctx.accounts.token_state;
    st.set_transfers_enabled(&authority, false)?;
    emit!(TransfersPaused { authority });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,
    pub authority: Signer<'info>,
}

#[event]
pub struct TransfersPaused {
    pub authority: Pubkey,
}
