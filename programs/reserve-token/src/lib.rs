#![allow(unexpected_cfgs)]
//! Reserve token program.
//!
//! A fixed supply split between holder balances, a sharded reserve of
//! unissued units and refund logs. Payouts from the reserve need two
//! signers: the authority creates a transaction, the approver signs it.

use anchor_lang::prelude::*;

declare_id!("87WBFDSpLtTDuNrWdJgq2tmZnAHoVNMMfzhCGhGbVv5s");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{RefundRecord, TokenConfig};

#[program]
pub mod reserve_token {
    use super::*;

    /// Create the global state: caller becomes authority, every shard is full.
    pub fn initialize(
        ctx: Context<Initialize>,
        approver: Pubkey,
        refund_address: Pubkey,
        config: TokenConfig,
    ) -> Result<()> {
        instructions::initialize(ctx, approver, refund_address, config)
    }

    pub fn set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::set_authority(ctx, new_authority)
    }

    pub fn set_approver(ctx: Context<SetApprover>, new_approver: Pubkey) -> Result<()> {
        instructions::set_approver(ctx, new_approver)
    }

    pub fn set_refund_address(ctx: Context<SetRefundAddress>, new_address: Pubkey) -> Result<()> {
        instructions::set_refund_address(ctx, new_address)
    }

    /// Setup phase only.
    pub fn add_member(ctx: Context<AddMember>, member: Pubkey) -> Result<()> {
        instructions::add_member(ctx, member)
    }

    /// One-time roster allocation once the roster is full. Member holders go
    /// in remaining accounts, in roster order. Returns the reserve shortfall.
    pub fn distribute(ctx: Context<Distribute>) -> Result<u64> {
        instructions::distribute(ctx)
    }

    pub fn start_operations(ctx: Context<StartOperations>) -> Result<()> {
        instructions::start_operations(ctx)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause(ctx)
    }

    /// Approver only, after the roster lock has elapsed.
    pub fn lift_member_restriction(ctx: Context<LiftMemberRestriction>) -> Result<()> {
        instructions::lift_member_restriction(ctx)
    }

    pub fn open_holder(ctx: Context<OpenHolder>, owner: Pubkey) -> Result<()> {
        instructions::open_holder(ctx, owner)
    }

    pub fn open_refund_log(ctx: Context<OpenRefundLog>, sender: Pubkey) -> Result<()> {
        instructions::open_refund_log(ctx, sender)
    }

    pub fn transfer(ctx: Context<Transfer>, amount: u64) -> Result<()> {
        instructions::transfer(ctx, amount)
    }

    pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
        instructions::approve(ctx, spender, amount)
    }

    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        instructions::transfer_from(ctx, amount)
    }

    /// Authority records a payout keyed by `blake3(identifier)`.
    pub fn create_transaction(
        ctx: Context<CreateTransaction>,
        transaction_id: [u8; 32],
        identifier: String,
        recipient: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::create_transaction(ctx, transaction_id, identifier, recipient, amount)
    }

    /// Approver signs and settles. Returns the reserve shortfall.
    pub fn sign_transaction(
        ctx: Context<SignTransaction>,
        transaction_id: [u8; 32],
        identifier: String,
    ) -> Result<u64> {
        instructions::sign_transaction(ctx, transaction_id, identifier)
    }

    /// One page of a sender's refund records, starting at `offset`.
    pub fn list_refunds(ctx: Context<ListRefunds>, offset: u32) -> Result<Vec<RefundRecord>> {
        instructions::list_refunds(ctx, offset)
    }

    pub fn clear_refunds(ctx: Context<ClearRefunds>) -> Result<u64> {
        instructions::clear_refunds(ctx)
    }

    pub fn withdraw_reserve(ctx: Context<WithdrawReserve>, amount: u64) -> Result<u64> {
        instructions::withdraw_reserve(ctx, amount)
    }

    pub fn deposit_reserve(ctx: Context<DepositReserve>, amount: u64) -> Result<u64> {
        instructions::deposit_reserve(ctx, amount)
    }

    pub fn quote_reserve(ctx: Context<QuoteReserve>) -> Result<u64> {
        instructions::quote_reserve(ctx)
    }
}
