use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let st = &mut ctx.accounts.token_state;
    st.set_transfers_enabled(&authority, true)?;
    emit!(TransfersUnpaused { authority });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,
    pub authority: Signer<'info>,
}

#[event]
pub struct TransfersUnpaused {
    pub authority: Pubkey,
}
