//! End-to-end scenarios over the state layer (no runtime).

use anchor_lang::prelude::*;

use super::*;
use crate::constants::{DEFAULT_LOCK_DURATION, ROSTER_CAPACITY, SHARD_COUNT};
use crate::error::TokenError;
use crate::utils::identifier::transaction_key;

const CAP: u64 = 1_000;
const ALLOCATION: u64 = 100;
const T0: i64 = 1_775_865_600;

struct Fixture {
    state: TokenState,
    authority: Pubkey,
    approver: Pubkey,
    refund: Pubkey,
}

fn fixture() -> Fixture {
    let authority = Pubkey::new_unique();
    let approver = Pubkey::new_unique();
    let refund = Pubkey::new_unique();
    let config = TokenConfig {
        shard_capacity: CAP,
        member_allocation: ALLOCATION,
        lock_duration: DEFAULT_LOCK_DURATION,
    };
    let state = TokenState::setup(authority, approver, refund, &config, 255).unwrap();
    Fixture {
        state,
        authority,
        approver,
        refund,
    }
}

fn holder(owner: Pubkey) -> Holder {
    Holder {
        owner,
        balance: 0,
        bump: 255,
    }
}

fn log_for(sender: Pubkey) -> RefundLog {
    RefundLog {
        sender,
        bump: 255,
        records: Vec::new(),
    }
}

fn assert_conserved(state: &TokenState, holders: &[&Holder]) {
    let held: u64 = holders.iter().map(|h| h.balance).sum();
    assert_eq!(
        state.unissued_and_parked().unwrap() + held,
        state.total_supply,
        "conservation broken"
    );
}

/// Fill the roster and return member holders in roster order.
fn full_roster(f: &mut Fixture) -> Vec<Holder> {
    let authority = f.authority;
    (0..ROSTER_CAPACITY)
        .map(|_| {
            let member = Pubkey::new_unique();
            f.state.add_member(&authority, member).unwrap();
            holder(member)
        })
        .collect()
}

fn created(f: &Fixture, id: &str, recipient: Pubkey, amount: u64) -> TransactionRecord {
    let mut rec = TransactionRecord::default();
    f.state
        .create_transaction(&f.authority, &mut rec, transaction_key(id), recipient, amount, T0)
        .unwrap();
    rec
}

#[test]
fn setup_fills_every_shard() {
    let f = fixture();
    assert_eq!(f.state.total_supply, CAP * SHARD_COUNT as u64);
    assert_eq!(f.state.reserve.total_held(), f.state.total_supply);
    assert!(f.state.roster.distribution_armed);
    assert!(!f.state.is_operating());
    assert!(!f.state.transfers_enabled);
}

#[test]
fn setup_rejects_bad_config() {
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();
    let zero_cap = TokenConfig {
        shard_capacity: 0,
        ..TokenConfig::default()
    };
    assert!(matches!(
        TokenState::setup(a, b, b, &zero_cap, 0),
        Err(TokenError::InvalidConfig)
    ));
    let greedy = TokenConfig {
        shard_capacity: 10,
        member_allocation: 21,
        lock_duration: 1,
    };
    assert!(matches!(
        TokenState::setup(a, b, b, &greedy, 0),
        Err(TokenError::InvalidConfig)
    ));
    assert!(matches!(
        TokenState::setup(a, a, b, &TokenConfig::default(), 0),
        Err(TokenError::InvalidConfig)
    ));
    assert!(matches!(
        TokenState::setup(a, Pubkey::default(), b, &TokenConfig::default(), 0),
        Err(TokenError::InvalidIdentity)
    ));
}

#[test]
fn conservation_across_full_lifecycle() {
    let mut f = fixture();
    let (authority, approver, refund) = (f.authority, f.approver, f.refund);
    let mut member_holders = full_roster(&mut f);
    assert_eq!(f.state.distribute(&authority, &mut member_holders).unwrap(), 0);
    assert!(member_holders.iter().all(|h| h.balance == ALLOCATION));

    f.state.start_operations(&authority, T0).unwrap();

    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();
    let mut alice_h = holder(alice);
    let mut bob_h = holder(bob);
    let mut refund_h = holder(refund);
    let mut alice_log = log_for(alice);

    let mut rec = created(&f, "payout-1", alice, 2_500);
    assert_eq!(
        f.state
            .sign_transaction(&approver, &mut rec, &mut alice_h, T0 + 1)
            .unwrap(),
        0
    );
    let all = |s: &TokenState, a: &Holder, b: &Holder, r: &Holder, m: &[Holder]| {
        let mut v: Vec<&Holder> = vec![a, b, r];
        v.extend(m.iter());
        assert_conserved(s, &v);
    };
    all(&f.state, &alice_h, &bob_h, &refund_h, &member_holders);

    f.state
        .transfer(&mut alice_h, &mut bob_h, None, 700, T0 + 2)
        .unwrap();
    all(&f.state, &alice_h, &bob_h, &refund_h, &member_holders);

    f.state
        .transfer(&mut alice_h, &mut refund_h, Some(&mut alice_log), 300, T0 + 3)
        .unwrap();
    all(&f.state, &alice_h, &bob_h, &refund_h, &member_holders);

    f.state.clear_refunds(&authority, &mut alice_log, T0 + 4).unwrap();
    all(&f.state, &alice_h, &bob_h, &refund_h, &member_holders);

    let shortfall = f.state.withdraw_reserve(&approver, 50).unwrap();
    assert_eq!(shortfall, 0);
    bob_h.credit(50).unwrap();
    all(&f.state, &alice_h, &bob_h, &refund_h, &member_holders);

    bob_h.debit(20).unwrap();
    assert_eq!(f.state.deposit_reserve(&authority, 20).unwrap(), 0);
    all(&f.state, &alice_h, &bob_h, &refund_h, &member_holders);
}

#[test]
fn sign_credits_only_what_the_pool_holds() {
    let mut f = fixture();
    let (authority, approver) = (f.authority, f.approver);
    f.state.start_operations(&authority, T0).unwrap();

    // Leave Y = 40 in the pool.
    let available = 40;
    let drained = f.state.total_supply - available;
    assert_eq!(f.state.withdraw_reserve(&authority, drained).unwrap(), 0);
    let mut sink = holder(authority);
    sink.credit(drained).unwrap();

    let recipient = Pubkey::new_unique();
    let mut recipient_h = holder(recipient);
    let requested = 100;
    let mut rec = created(&f, "underfunded", recipient, requested);

    let shortfall = f
        .state
        .sign_transaction(&approver, &mut rec, &mut recipient_h, T0 + 5)
        .unwrap();
    assert_eq!(shortfall, requested - available);
    assert_eq!(recipient_h.balance, available);
    assert_eq!(rec.credited_amount, available);
    assert_eq!(rec.requested_amount, requested);
    assert_eq!(rec.status, TransactionStatus::Signed);
    assert_eq!(f.state.reserve.total_held(), 0);
    assert_conserved(&f.state, &[&sink, &recipient_h]);
}

#[test]
fn sign_twice_rejected() {
    let mut f = fixture();
    let (authority, approver) = (f.authority, f.approver);
    f.state.start_operations(&authority, T0).unwrap();
    let recipient = Pubkey::new_unique();
    let mut h = holder(recipient);
    let mut rec = created(&f, "once", recipient, 10);

    f.state.sign_transaction(&approver, &mut rec, &mut h, T0).unwrap();
    let pool = f.state.reserve;
    assert!(matches!(
        f.state.sign_transaction(&approver, &mut rec, &mut h, T0),
        Err(TokenError::TransactionAlreadySigned)
    ));
    assert_eq!(h.balance, 10);
    assert_eq!(f.state.reserve, pool);
}

#[test]
fn workflow_roles_are_enforced() {
    let mut f = fixture();
    let (authority, approver) = (f.authority, f.approver);
    f.state.start_operations(&authority, T0).unwrap();
    let recipient = Pubkey::new_unique();

    let mut rec = TransactionRecord::default();
    assert!(matches!(
        f.state
            .create_transaction(&approver, &mut rec, [0; 32], recipient, 5, T0),
        Err(TokenError::UnauthorizedAuthority)
    ));
    assert!(rec.is_vacant());

    let mut rec = created(&f, "roles", recipient, 5);
    let mut h = holder(recipient);
    let before = f.state.clone();
    assert!(matches!(
        f.state.sign_transaction(&authority, &mut rec, &mut h, T0),
        Err(TokenError::UnauthorizedApprover)
    ));
    assert_eq!(f.state, before);
    assert_eq!(rec.status, TransactionStatus::Created);

    let mut wrong = holder(Pubkey::new_unique());
    assert!(matches!(
        f.state.sign_transaction(&approver, &mut rec, &mut wrong, T0),
        Err(TokenError::HolderMismatch)
    ));
    assert_eq!(f.state, before);
}

#[test]
fn workflow_requires_operating_phase() {
    let mut f = fixture();
    let (authority, approver) = (f.authority, f.approver);
    let recipient = Pubkey::new_unique();
    let mut rec = TransactionRecord::default();
    assert!(matches!(
        f.state
            .create_transaction(&authority, &mut rec, [0; 32], recipient, 5, T0),
        Err(TokenError::NotOperating)
    ));
    assert!(matches!(
        f.state.lift_member_restriction(&approver, T0),
        Err(TokenError::NotOperating)
    ));
}

#[test]
fn distribution_runs_once() {
    let mut f = fixture();
    let authority = f.authority;
    let mut holders = full_roster(&mut f);

    assert_eq!(f.state.distribute(&authority, &mut holders).unwrap(), 0);
    let after_first = f.state.clone();
    assert!(matches!(
        f.state.distribute(&authority, &mut holders),
        Err(TokenError::DistributionConsumed)
    ));
    assert!(holders.iter().all(|h| h.balance == ALLOCATION));
    assert_eq!(f.state, after_first);
    assert_eq!(
        f.state.reserve.total_held(),
        f.state.total_supply - ALLOCATION * ROSTER_CAPACITY as u64
    );
}

#[test]
fn distribution_waits_for_a_full_roster() {
    let mut f = fixture();
    let authority = f.authority;
    assert!(matches!(
        f.state.distribute(&authority, &mut []),
        Err(TokenError::RosterIncomplete)
    ));

    let first = Pubkey::new_unique();
    f.state.add_member(&authority, first).unwrap();
    let mut partial = vec![holder(first)];
    let before = f.state.clone();
    assert!(matches!(
        f.state.distribute(&authority, &mut partial),
        Err(TokenError::RosterIncomplete)
    ));
    assert_eq!(f.state, before);
    assert!(f.state.roster.distribution_armed);
    assert_eq!(partial[0].balance, 0);

    // The late members still receive their allocation.
    let mut holders = partial;
    for _ in 1..ROSTER_CAPACITY {
        let member = Pubkey::new_unique();
        f.state.add_member(&authority, member).unwrap();
        holders.push(holder(member));
    }
    f.state.distribute(&authority, &mut holders).unwrap();
    assert!(holders.iter().all(|h| h.balance == ALLOCATION));
    assert!(!f.state.roster.distribution_armed);
}

#[test]
fn distribution_checks_holder_order_and_phase() {
    let mut f = fixture();
    let authority = f.authority;
    let mut holders = full_roster(&mut f);

    holders.swap(0, 1);
    assert!(matches!(
        f.state.distribute(&authority, &mut holders),
        Err(TokenError::RosterAccountsMismatch)
    ));
    holders.swap(0, 1);
    let mut short = holders[..ROSTER_CAPACITY - 1].to_vec();
    assert!(matches!(
        f.state.distribute(&authority, &mut short),
        Err(TokenError::RosterAccountsMismatch)
    ));
    assert!(f.state.roster.distribution_armed);
    assert!(holders.iter().all(|h| h.balance == 0));

    f.state.start_operations(&authority, T0).unwrap();
    assert!(matches!(
        f.state.distribute(&authority, &mut holders),
        Err(TokenError::AlreadyOperating)
    ));
    assert!(matches!(
        f.state.add_member(&authority, Pubkey::new_unique()),
        Err(TokenError::AlreadyOperating)
    ));
}

#[test]
fn roster_capacity_boundary() {
    let mut f = fixture();
    let authority = f.authority;
    for _ in 0..ROSTER_CAPACITY {
        f.state.add_member(&authority, Pubkey::new_unique()).unwrap();
    }
    let before = f.state.clone();
    assert!(matches!(
        f.state.add_member(&authority, Pubkey::new_unique()),
        Err(TokenError::RosterFull)
    ));
    assert_eq!(f.state, before);
}

#[test]
fn timelock_gate_is_inclusive() {
    let mut f = fixture();
    let (authority, approver) = (f.authority, f.approver);
    f.state.start_operations(&authority, T0).unwrap();

    assert!(matches!(
        f.state
            .lift_member_restriction(&approver, T0 + DEFAULT_LOCK_DURATION - 1),
        Err(TokenError::TimelockActive)
    ));
    assert!(matches!(
        f.state
            .lift_member_restriction(&authority, T0 + DEFAULT_LOCK_DURATION),
        Err(TokenError::UnauthorizedApprover)
    ));
    f.state
        .lift_member_restriction(&approver, T0 + DEFAULT_LOCK_DURATION)
        .unwrap();
    assert!(f.state.roster.member_transfers_allowed);
}

#[test]
fn member_transfers_locked_until_lifted() {
    let mut f = fixture();
    let (authority, approver) = (f.authority, f.approver);
    let mut holders = full_roster(&mut f);
    f.state.distribute(&authority, &mut holders).unwrap();
    f.state.start_operations(&authority, T0).unwrap();

    let mut member_h = holders.remove(0);
    let mut other = holder(Pubkey::new_unique());
    assert!(matches!(
        f.state.transfer(&mut member_h, &mut other, None, 1, T0 + 1),
        Err(TokenError::MemberTransfersLocked)
    ));

    f.state
        .lift_member_restriction(&approver, T0 + DEFAULT_LOCK_DURATION)
        .unwrap();
    assert_eq!(
        f.state
            .transfer(&mut member_h, &mut other, None, 1, T0 + DEFAULT_LOCK_DURATION)
            .unwrap(),
        TransferOutcome::Delivered
    );
    assert_eq!(other.balance, 1);
}

#[test]
fn paused_transfers_rejected() {
    let mut f = fixture();
    let authority = f.authority;
    let mut a = holder(Pubkey::new_unique());
    let mut b = holder(Pubkey::new_unique());
    a.balance = 10;

    assert!(matches!(
        f.state.transfer(&mut a, &mut b, None, 1, T0),
        Err(TokenError::NotOperating)
    ));
    f.state.start_operations(&authority, T0).unwrap();
    f.state.set_transfers_enabled(&authority, false).unwrap();
    assert!(matches!(
        f.state.transfer(&mut a, &mut b, None, 1, T0),
        Err(TokenError::TransfersDisabled)
    ));
    assert!(matches!(
        f.state.set_transfers_enabled(&authority, false),
        Err(TokenError::TransfersDisabled)
    ));
    f.state.set_transfers_enabled(&authority, true).unwrap();
    f.state.transfer(&mut a, &mut b, None, 1, T0).unwrap();
    assert_eq!((a.balance, b.balance), (9, 1));
}

#[test]
fn transfer_argument_checks() {
    let mut f = fixture();
    let authority = f.authority;
    f.state.start_operations(&authority, T0).unwrap();
    let owner = Pubkey::new_unique();
    let mut a = holder(owner);
    let mut a_again = holder(owner);
    let mut b = holder(Pubkey::new_unique());
    a.balance = 5;

    assert!(matches!(
        f.state.transfer(&mut a, &mut b, None, 0, T0),
        Err(TokenError::InvalidAmount)
    ));
    assert!(matches!(
        f.state.transfer(&mut a, &mut a_again, None, 1, T0),
        Err(TokenError::SelfTransfer)
    ));
    assert!(matches!(
        f.state.transfer(&mut a, &mut b, None, 6, T0),
        Err(TokenError::InsufficientBalance)
    ));
    assert_eq!((a.balance, b.balance), (5, 0));
}

#[test]
fn refund_round_trip() {
    let mut f = fixture();
    let (authority, approver, refund) = (f.authority, f.approver, f.refund);
    f.state.start_operations(&authority, T0).unwrap();

    let alice = Pubkey::new_unique();
    let mut alice_h = holder(alice);
    let mut rec = created(&f, "fund-alice", alice, 500);
    f.state
        .sign_transaction(&approver, &mut rec, &mut alice_h, T0)
        .unwrap();
    let pool_before = f.state.reserve.total_held();

    let mut refund_h = holder(refund);
    let mut log = log_for(alice);
    let t = T0 + 42;
    assert_eq!(
        f.state
            .transfer(&mut alice_h, &mut refund_h, Some(&mut log), 100, t)
            .unwrap(),
        TransferOutcome::Parked
    );
    assert_eq!(log.records, vec![RefundRecord { amount: 100, timestamp: t }]);
    assert_eq!(alice_h.balance, 400);
    assert_eq!(refund_h.balance, 0);
    assert_eq!(f.state.parked_supply, 100);

    assert_eq!(f.state.clear_refunds(&authority, &mut log, t + 1).unwrap(), 0);
    assert!(log.records.is_empty());
    assert_eq!(f.state.reserve.total_held(), pool_before + 100);
    assert_eq!(f.state.parked_supply, 0);
    assert_conserved(&f.state, &[&alice_h, &refund_h]);
}

#[test]
fn refund_requires_matching_log() {
    let mut f = fixture();
    let authority = f.authority;
    let refund = f.refund;
    f.state.start_operations(&authority, T0).unwrap();
    let mut a = holder(Pubkey::new_unique());
    a.balance = 50;
    let mut refund_h = holder(refund);

    assert!(matches!(
        f.state.transfer(&mut a, &mut refund_h, None, 10, T0),
        Err(TokenError::RefundLogRequired)
    ));
    let mut someone_elses = log_for(Pubkey::new_unique());
    assert!(matches!(
        f.state
            .transfer(&mut a, &mut refund_h, Some(&mut someone_elses), 10, T0),
        Err(TokenError::HolderMismatch)
    ));
    assert_eq!(a.balance, 50);
    assert_eq!(f.state.parked_supply, 0);
}

#[test]
fn clear_refunds_is_gated() {
    let mut f = fixture();
    let (authority, approver) = (f.authority, f.approver);
    let mut log = log_for(Pubkey::new_unique());
    log.record(5, T0);

    assert!(matches!(
        f.state.clear_refunds(&authority, &mut log, T0),
        Err(TokenError::NotOperating)
    ));
    f.state.start_operations(&authority, T0).unwrap();
    assert!(matches!(
        f.state.clear_refunds(&approver, &mut log, T0),
        Err(TokenError::UnauthorizedAuthority)
    ));
    assert_eq!(log.records.len(), 1);
}

#[test]
fn clear_refunds_into_full_pool_keeps_residual() {
    let mut f = fixture();
    let authority = f.authority;
    f.state.start_operations(&authority, T0).unwrap();

    // Pool is full; a stray parked amount cannot be absorbed.
    f.state.parked_supply = 30;
    let mut log = log_for(Pubkey::new_unique());
    log.record(10, T0);
    log.record(20, T0 + 1);

    assert_eq!(f.state.clear_refunds(&authority, &mut log, T0 + 2).unwrap(), 30);
    assert_eq!(log.records, vec![RefundRecord { amount: 30, timestamp: T0 + 2 }]);
    assert_eq!(f.state.parked_supply, 30);
}

#[test]
fn pool_gates() {
    let mut f = fixture();
    let (authority, approver) = (f.authority, f.approver);
    let outsider = Pubkey::new_unique();

    assert!(matches!(
        f.state.withdraw_reserve(&outsider, 1),
        Err(TokenError::UnauthorizedOperator)
    ));
    assert!(matches!(
        f.state.deposit_reserve(&approver, 1),
        Err(TokenError::UnauthorizedAuthority)
    ));
    assert_eq!(f.state.withdraw_reserve(&approver, 1).unwrap(), 0);
    assert_eq!(f.state.deposit_reserve(&authority, 2).unwrap(), 1);
}

#[test]
fn account_sizes_match_serialized_layout() {
    let f = fixture();
    let mut buf = Vec::new();
    f.state.serialize(&mut buf).unwrap();
    assert_eq!(buf.len() + 8, TokenState::SIZE);

    let mut buf = Vec::new();
    holder(Pubkey::new_unique()).serialize(&mut buf).unwrap();
    assert_eq!(buf.len() + 8, Holder::SIZE);

    let mut buf = Vec::new();
    Allowance::default().serialize(&mut buf).unwrap();
    assert_eq!(buf.len() + 8, Allowance::SIZE);

    let mut rec = TransactionRecord::default();
    rec.open(transaction_key("size"), Pubkey::new_unique(), 1, T0)
        .unwrap();
    let mut buf = Vec::new();
    rec.serialize(&mut buf).unwrap();
    assert_eq!(buf.len() + 8, TransactionRecord::SIZE);
}

#[test]
fn switch_toggles_require_operating_phase_and_a_change() {
    let mut f = fixture();
    let (authority, approver) = (f.authority, f.approver);
    assert!(matches!(
        f.state.set_transfers_enabled(&authority, false),
        Err(TokenError::NotOperating)
    ));
    assert!(matches!(
        f.state.set_transfers_enabled(&authority, true),
        Err(TokenError::NotOperating)
    ));

    f.state.start_operations(&authority, T0).unwrap();
    assert!(matches!(
        f.state.set_transfers_enabled(&authority, true),
        Err(TokenError::TransfersAlreadyEnabled)
    ));
    assert!(matches!(
        f.state.set_transfers_enabled(&approver, false),
        Err(TokenError::UnauthorizedAuthority)
    ));
    assert!(f.state.transfers_enabled);
}

#[test]
fn refund_recording_never_fills_up() {
    let mut f = fixture();
    let (authority, approver, refund) = (f.authority, f.approver, f.refund);
    f.state.start_operations(&authority, T0).unwrap();

    let alice = Pubkey::new_unique();
    let mut alice_h = holder(alice);
    let mut rec = created(&f, "fund-many", alice, 100);
    f.state
        .sign_transaction(&approver, &mut rec, &mut alice_h, T0)
        .unwrap();

    let mut refund_h = holder(refund);
    let mut log = log_for(alice);
    for i in 0..40 {
        assert_eq!(
            f.state
                .transfer(&mut alice_h, &mut refund_h, Some(&mut log), 1, T0 + i)
                .unwrap(),
            TransferOutcome::Parked
        );
    }
    assert_eq!(log.records.len(), 40);
    assert_eq!(f.state.parked_supply, 40);
    assert_eq!(alice_h.balance, 60);
    assert_conserved(&f.state, &[&alice_h, &refund_h]);
}

fn allowance(owner: Pubkey, spender: Pubkey, amount: u64) -> Allowance {
    Allowance {
        owner,
        spender,
        amount,
        bump: 255,
    }
}

#[test]
fn spender_is_held_to_the_owner_member_lock() {
    let mut f = fixture();
    let authority = f.authority;
    let mut holders = full_roster(&mut f);
    f.state.distribute(&authority, &mut holders).unwrap();
    f.state.start_operations(&authority, T0).unwrap();

    let mut member_h = holders.remove(0);
    let spender = Pubkey::new_unique();
    let mut grant = allowance(member_h.owner, spender, 10);
    let mut other = holder(Pubkey::new_unique());

    assert!(matches!(
        f.state
            .transfer_from(&mut grant, &mut member_h, &mut other, None, 5, T0 + 1),
        Err(TokenError::MemberTransfersLocked)
    ));
    assert_eq!(grant.amount, 10);
    assert_eq!(member_h.balance, ALLOCATION);
    assert_eq!(other.balance, 0);
}

#[test]
fn transfer_from_parks_in_the_owner_log() {
    let mut f = fixture();
    let (authority, refund) = (f.authority, f.refund);
    f.state.start_operations(&authority, T0).unwrap();

    let owner = Pubkey::new_unique();
    let spender = Pubkey::new_unique();
    let mut owner_h = holder(owner);
    owner_h.balance = 50;
    let mut grant = allowance(owner, spender, 30);
    let mut refund_h = holder(refund);
    let mut owner_log = log_for(owner);

    let outcome = f
        .state
        .transfer_from(
            &mut grant,
            &mut owner_h,
            &mut refund_h,
            Some(&mut owner_log),
            20,
            T0 + 7,
        )
        .unwrap();
    assert_eq!(outcome, TransferOutcome::Parked);
    assert_eq!(owner_log.records, vec![RefundRecord { amount: 20, timestamp: T0 + 7 }]);
    assert_eq!(grant.amount, 10);
    assert_eq!(owner_h.balance, 30);
    assert_eq!(refund_h.balance, 0);
    assert_eq!(f.state.parked_supply, 20);

    let mut spender_log = log_for(spender);
    assert!(matches!(
        f.state.transfer_from(
            &mut grant,
            &mut owner_h,
            &mut refund_h,
            Some(&mut spender_log),
            5,
            T0 + 8
        ),
        Err(TokenError::HolderMismatch)
    ));
    assert_eq!(grant.amount, 10);
}

#[test]
fn insufficient_allowance_moves_nothing() {
    let mut f = fixture();
    let authority = f.authority;
    f.state.start_operations(&authority, T0).unwrap();

    let owner = Pubkey::new_unique();
    let mut owner_h = holder(owner);
    owner_h.balance = 50;
    let mut to = holder(Pubkey::new_unique());
    let mut grant = allowance(owner, Pubkey::new_unique(), 5);
    let before = f.state.clone();

    assert!(matches!(
        f.state.transfer_from(&mut grant, &mut owner_h, &mut to, None, 6, T0),
        Err(TokenError::InsufficientAllowance)
    ));
    assert_eq!((owner_h.balance, to.balance, grant.amount), (50, 0, 5));
    assert_eq!(f.state, before);

    // A failed transfer leaves the allowance unspent.
    assert!(matches!(
        f.state.transfer_from(&mut grant, &mut owner_h, &mut to, None, 0, T0),
        Err(TokenError::InvalidAmount)
    ));
    assert_eq!(grant.amount, 5);

    f.state
        .transfer_from(&mut grant, &mut owner_h, &mut to, None, 5, T0)
        .unwrap();
    assert_eq!((owner_h.balance, to.balance, grant.amount), (45, 5, 0));
}
