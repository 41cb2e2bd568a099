use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;

pub fn add_member(ctx: Context<AddMember>, member: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let st = &mut ctx.accounts.token_state;
    let count = st.add_member(&authority, member)?;

    emit!(MemberAdded {
        member,
        member_count: count,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddMember<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    pub authority: Signer<'info>,
}

#[event]
pub struct MemberAdded {
    pub member: Pubkey,
    pub member_count: u8,
}
