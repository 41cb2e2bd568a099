use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;

pub fn set_refund_address(ctx: Context<SetRefundAddress>, new_address: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let st = &mut ctx.accounts.token_state;
    let old = st.set_refund_address(&authority, new_address)?;

    emit!(RefundAddressSet {
        old_address: old,
        new_address,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetRefundAddress<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    pub authority: Signer<'info>,
}

#[event]
pub struct RefundAddressSet {
    pub old_address: Pubkey,
    pub new_address: Pubkey,
}
