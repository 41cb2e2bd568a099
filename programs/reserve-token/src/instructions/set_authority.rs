use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;

pub fn set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let st = &mut ctx.accounts.token_state;
    st.gate.set_authority(&authority, new_authority)?;

    emit!(AuthoritySet {
        old_authority: authority,
        new_authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAuthority<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    pub authority: Signer<'info>,
}

#[event]
pub struct AuthoritySet {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}
