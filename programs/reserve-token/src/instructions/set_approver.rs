use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;

pub fn set_approver(ctx: Context<SetApprover>, new_approver: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let st = &mut ctx.accounts.token_state;
    let old = st.gate.set_approver(&authority, new_approver)?;

    emit!(ApproverSet {
        authority,
        old_approver: old,
        new_approver,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetApprover<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    pub authority: Signer<'info>,
}

#[event]
pub struct ApproverSet {
    pub authority: Pubkey,
    pub old_approver: Pubkey,
    pub new_approver: Pubkey,
}
