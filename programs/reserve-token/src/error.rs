use anchor_lang::prelude::*;

/// Custom error codes for the reserve token program.
#[error_code]
pub enum TokenError {
    // Permission
    #[msg("Unauthorized: authority signature required")]
    UnauthorizedAuthority,

    #[msg("Unauthorized: approver signature required")]
    UnauthorizedApprover,

    #[msg("Unauthorized: authority or approver signature required")]
    UnauthorizedOperator,

    // Invalid argument
    #[msg("Invalid identity (default public key)")]
    InvalidIdentity,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Transaction id does not match the identifier hash")]
    InvalidIdentifier,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Duplicate roster member")]
    DuplicateMember,

    #[msg("Roster is full")]
    RosterFull,

    #[msg("Holder account does not belong to the expected owner")]
    HolderMismatch,

    #[msg("Roster holder accounts do not match the roster")]
    RosterAccountsMismatch,

    #[msg("Refund log account required for transfers to the refund address")]
    RefundLogRequired,

    #[msg("Sender and recipient are the same holder")]
    SelfTransfer,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    // Phase
    #[msg("Operating phase has already started")]
    AlreadyOperating,

    #[msg("Operating phase has not started")]
    NotOperating,

    #[msg("Roster must be full before distribution")]
    RosterIncomplete,

    #[msg("Roster distribution already performed")]
    DistributionConsumed,

    #[msg("Roster timelock has not elapsed")]
    TimelockActive,

    #[msg("Roster transfer restriction already lifted")]
    RestrictionAlreadyLifted,

    #[msg("Transfers are disabled")]
    TransfersDisabled,

    #[msg("Transfers are already enabled")]
    TransfersAlreadyEnabled,

    #[msg("Roster member transfers are locked")]
    MemberTransfersLocked,

    #[msg("A pending transaction already exists under this id")]
    TransactionPending,

    #[msg("Transaction already signed")]
    TransactionAlreadySigned,

    #[msg("Timestamp precedes operating start")]
    BeforeStart,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result of the pure state layer; converts into `anchor_lang::Result` via `?`.
pub type TokenResult<T> = core::result::Result<T, TokenError>;
