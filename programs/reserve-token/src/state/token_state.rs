use anchor_lang::prelude::*;

use crate::constants::{
    DEFAULT_LOCK_DURATION, DEFAULT_MEMBER_ALLOCATION, DEFAULT_SHARD_CAPACITY, ROSTER_CAPACITY,
    SHARD_COUNT,
};
use crate::error::{TokenError, TokenResult};
use crate::state::{
    AccessGate, Allowance, Holder, RefundLog, ReservePool, TransactionRecord, VestingRoster,
};

/// Init-time parameters. Sizes (`SHARD_COUNT`, `ROSTER_CAPACITY`) are compile-time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    pub shard_capacity: u64,
    pub member_allocation: u64,
    pub lock_duration: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            shard_capacity: DEFAULT_SHARD_CAPACITY,
            member_allocation: DEFAULT_MEMBER_ALLOCATION,
            lock_duration: DEFAULT_LOCK_DURATION,
        }
    }
}

impl TokenConfig {
    /// Validate and return the implied total supply.
    pub fn total_supply(&self) -> TokenResult<u64> {
        if self.shard_capacity == 0 || self.lock_duration <= 0 {
            return Err(TokenError::InvalidConfig);
        }
        let total = self
            .shard_capacity
            .checked_mul(SHARD_COUNT as u64)
            .ok_or(TokenError::MathOverflow)?;
        let roster_total = (self.member_allocation as u128) * (ROSTER_CAPACITY as u128);
        if roster_total > total as u128 {
            return Err(TokenError::InvalidConfig);
        }
        Ok(total)
    }
}

/// Operating-phase marker. `start_ts` is meaningful only once `started`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkStart {
    pub started: bool,
    pub start_ts: i64,
}

impl WorkStart {
    pub const SIZE: usize = 1 + 8;
}

/// How a transfer was settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Debited from the sender and credited to the recipient.
    Delivered,
    /// Debited from the sender and parked in its refund log.
    Parked,
}

/// Single global state PDA. Every mutating instruction takes it writable,
/// which serializes them under the runtime's account write lock.
/// Seeds: [b"token_state"]
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TokenState {
    pub gate: AccessGate,
    pub reserve: ReservePool,
    pub roster: VestingRoster,
    pub work: WorkStart,
    /// SHARD_COUNT * shard_capacity, fixed at initialize.
    pub total_supply: u64,
    /// Sum of all outstanding refund records.
    pub parked_supply: u64,
    pub transfers_enabled: bool,
    /// Transfers to this owner are intercepted into the sender's refund log.
    pub refund_address: Pubkey,
    pub bump: u8,
}

impl TokenState {
    pub const SIZE: usize = 8 + // discriminator
        AccessGate::SIZE +
        ReservePool::SIZE +
        VestingRoster::SIZE +
        WorkStart::SIZE +
        8 +  // total_supply
        8 +  // parked_supply
        1 +  // transfers_enabled
        32 + // refund_address
        1;   // bump

    /// Fresh state: caller is authority, shards full, roster empty and armed.
    pub fn setup(
        authority: Pubkey,
        approver: Pubkey,
        refund_address: Pubkey,
        config: &TokenConfig,
        bump: u8,
    ) -> TokenResult<Self> {
        if approver == Pubkey::default() || refund_address == Pubkey::default() {
            return Err(TokenError::InvalidIdentity);
        }
        if approver == authority {
            return Err(TokenError::InvalidConfig);
        }
        let total_supply = config.total_supply()?;
        Ok(Self {
            gate: AccessGate {
                authority,
                approver,
            },
            reserve: ReservePool::full(config.shard_capacity),
            roster: VestingRoster::new(config.member_allocation, config.lock_duration),
            work: WorkStart::default(),
            total_supply,
            parked_supply: 0,
            transfers_enabled: false,
            refund_address,
            bump,
        })
    }

    pub fn is_operating(&self) -> bool {
        self.work.started
    }

    pub fn require_operating(&self) -> TokenResult<()> {
        if self.work.started {
            Ok(())
        } else {
            Err(TokenError::NotOperating)
        }
    }

    pub fn require_setup(&self) -> TokenResult<()> {
        if self.work.started {
            Err(TokenError::AlreadyOperating)
        } else {
            Ok(())
        }
    }

    /// Open the operating phase. Freezes the roster and enables transfers.
    pub fn start_operations(&mut self, caller: &Pubkey, now_ts: i64) -> TokenResult<()> {
        self.gate.require_authority(caller)?;
        self.require_setup()?;
        self.work = WorkStart {
            started: true,
            start_ts: now_ts,
        };
        self.transfers_enabled = true;
        Ok(())
    }

    /// Flip the global transfer switch. Setting it to its current value is rejected.
    pub fn set_transfers_enabled(&mut self, caller: &Pubkey, enabled: bool) -> TokenResult<()> {
        self.gate.require_authority(caller)?;
        self.require_operating()?;
        match (self.transfers_enabled, enabled) {
            (true, true) => return Err(TokenError::TransfersAlreadyEnabled),
            (false, false) => return Err(TokenError::TransfersDisabled),
            _ => {}
        }
        self.transfers_enabled = enabled;
        Ok(())
    }

    pub fn set_refund_address(&mut self, caller: &Pubkey, new_address: Pubkey) -> TokenResult<Pubkey> {
        self.gate.require_authority(caller)?;
        if new_address == Pubkey::default() {
            return Err(TokenError::InvalidIdentity);
        }
        Ok(core::mem::replace(&mut self.refund_address, new_address))
    }

    // ---- reserve pool ----

    /// Gated pool withdrawal. Returns the shortfall.
    pub fn withdraw_reserve(&mut self, caller: &Pubkey, amount: u64) -> TokenResult<u64> {
        self.gate.require_authority_or_approver(caller)?;
        Ok(self.reserve.withdraw(amount))
    }

    /// Gated pool deposit. Returns the part the shards could not absorb.
    pub fn deposit_reserve(&mut self, caller: &Pubkey, amount: u64) -> TokenResult<u64> {
        self.gate.require_authority(caller)?;
        Ok(self.reserve.deposit(amount))
    }

    // ---- roster ----

    pub fn add_member(&mut self, caller: &Pubkey, member: Pubkey) -> TokenResult<u8> {
        self.gate.require_authority(caller)?;
        self.require_setup()?;
        self.roster.add_member(member)
    }

    /// One-time push of `member_allocation` to every roster member, allowed
    /// only once the roster is full. `holders` must follow roster order.
    /// Returns the summed pool shortfall.
    pub fn distribute(&mut self, caller: &Pubkey, holders: &mut [Holder]) -> TokenResult<u64> {
        self.gate.require_authority(caller)?;
        self.require_setup()?;
        if !self.roster.distribution_armed {
            return Err(TokenError::DistributionConsumed);
        }
        if !self.roster.is_full() {
            return Err(TokenError::RosterIncomplete);
        }
        let members = self.roster.members();
        if holders.len() != members.len() {
            return Err(TokenError::RosterAccountsMismatch);
        }
        if holders.iter().zip(members).any(|(h, m)| h.owner != *m) {
            return Err(TokenError::RosterAccountsMismatch);
        }

        let allocation = self.roster.member_allocation;
        let mut shortfall: u64 = 0;
        for holder in holders.iter_mut() {
            let remainder = self.withdraw_reserve(caller, allocation)?;
            holder.credit(allocation - remainder)?;
            shortfall = shortfall
                .checked_add(remainder)
                .ok_or(TokenError::MathOverflow)?;
        }
        self.roster.consume_distribution()?;
        Ok(shortfall)
    }

    pub fn lift_member_restriction(&mut self, caller: &Pubkey, now_ts: i64) -> TokenResult<()> {
        self.gate.require_approver(caller)?;
        self.require_operating()?;
        let start_ts = self.work.start_ts;
        self.roster.lift_restriction(now_ts, start_ts)
    }

    // ---- transaction workflow ----

    pub fn create_transaction(
        &self,
        caller: &Pubkey,
        record: &mut TransactionRecord,
        transaction_id: [u8; 32],
        recipient: Pubkey,
        amount: u64,
        now_ts: i64,
    ) -> TokenResult<()> {
        self.gate.require_authority(caller)?;
        self.require_operating()?;
        record.open(transaction_id, recipient, amount, now_ts)
    }

    /// Approve and settle a pending transaction. Returns the pool shortfall;
    /// the recipient is credited only what the pool could supply.
    pub fn sign_transaction(
        &mut self,
        caller: &Pubkey,
        record: &mut TransactionRecord,
        recipient: &mut Holder,
        now_ts: i64,
    ) -> TokenResult<u64> {
        self.gate.require_approver(caller)?;
        self.require_operating()?;
        record.require_pending()?;
        if recipient.owner != record.recipient {
            return Err(TokenError::HolderMismatch);
        }
        let remainder = self.withdraw_reserve(caller, record.requested_amount)?;
        let credited = record.requested_amount - remainder;
        recipient.credit(credited)?;
        record.mark_signed(credited, now_ts)?;
        Ok(remainder)
    }

    // ---- transfers and refunds ----

    pub fn is_refund_destination(&self, owner: &Pubkey) -> bool {
        *owner == self.refund_address
    }

    /// Preconditions shared by `transfer` and `transfer_from`.
    pub fn check_transfer(&self, sender: &Pubkey) -> TokenResult<()> {
        self.require_operating()?;
        if !self.transfers_enabled {
            return Err(TokenError::TransfersDisabled);
        }
        if !self.roster.is_transfer_allowed(sender) {
            return Err(TokenError::MemberTransfersLocked);
        }
        Ok(())
    }

    /// Move `amount` from `from` to `to`, or park it in `from`'s refund log
    /// when `to` is the refund address.
    pub fn transfer(
        &mut self,
        from: &mut Holder,
        to: &mut Holder,
        refund_log: Option<&mut RefundLog>,
        amount: u64,
        now_ts: i64,
    ) -> TokenResult<TransferOutcome> {
        self.check_transfer(&from.owner)?;
        if amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        if from.owner == to.owner {
            return Err(TokenError::SelfTransfer);
        }
        if from.balance < amount {
            return Err(TokenError::InsufficientBalance);
        }

        if self.is_refund_destination(&to.owner) {
            let log = refund_log.ok_or(TokenError::RefundLogRequired)?;
            if log.sender != from.owner {
                return Err(TokenError::HolderMismatch);
            }
            let parked = self
                .parked_supply
                .checked_add(amount)
                .ok_or(TokenError::MathOverflow)?;
            from.debit(amount)?;
            log.record(amount, now_ts);
            self.parked_supply = parked;
            return Ok(TransferOutcome::Parked);
        }

        from.debit(amount)?;
        to.credit(amount)?;
        Ok(TransferOutcome::Delivered)
    }

    /// `transfer` on the owner's behalf. The allowance must cover `amount`
    /// and is spent only when the transfer settles.
    pub fn transfer_from(
        &mut self,
        allowance: &mut Allowance,
        from: &mut Holder,
        to: &mut Holder,
        refund_log: Option<&mut RefundLog>,
        amount: u64,
        now_ts: i64,
    ) -> TokenResult<TransferOutcome> {
        if allowance.owner != from.owner {
            return Err(TokenError::HolderMismatch);
        }
        if allowance.amount < amount {
            return Err(TokenError::InsufficientAllowance);
        }
        let outcome = self.transfer(from, to, refund_log, amount, now_ts)?;
        allowance.spend(amount)?;
        Ok(outcome)
    }

    /// Return every parked amount in `log` to the pool and empty the log.
    /// Whatever the shards cannot absorb stays behind as one residual record.
    pub fn clear_refunds(
        &mut self,
        caller: &Pubkey,
        log: &mut RefundLog,
        now_ts: i64,
    ) -> TokenResult<u64> {
        self.gate.require_authority(caller)?;
        self.require_operating()?;

        let mut absorbed: u64 = 0;
        let mut residual: u64 = 0;
        for rec in log.records.iter() {
            let remainder = self.deposit_reserve(caller, rec.amount)?;
            absorbed = absorbed
                .checked_add(rec.amount - remainder)
                .ok_or(TokenError::MathOverflow)?;
            residual = residual
                .checked_add(remainder)
                .ok_or(TokenError::MathOverflow)?;
        }
        self.parked_supply = self
            .parked_supply
            .checked_sub(absorbed)
            .ok_or(TokenError::MathOverflow)?;

        log.records.clear();
        if residual > 0 {
            log.record(residual, now_ts);
        }
        Ok(residual)
    }

    /// Units accounted for outside holder balances.
    pub fn unissued_and_parked(&self) -> TokenResult<u64> {
        self.reserve
            .total_held()
            .checked_add(self.parked_supply)
            .ok_or(TokenError::MathOverflow)
    }
}
