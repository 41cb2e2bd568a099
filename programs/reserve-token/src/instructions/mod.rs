pub mod initialize;
pub mod set_authority;
pub mod set_approver;
pub mod set_refund_address;
pub mod add_member;
pub mod distribute;
pub mod start_operations;
pub mod pause;
pub mod unpause;
pub mod lift_member_restriction;
pub mod open_holder;
pub mod open_refund_log;
pub mod transfer;
pub mod approve;
pub mod transfer_from;
pub mod create_transaction;
pub mod sign_transaction;
pub mod list_refunds;
pub mod clear_refunds;
pub mod withdraw_reserve;
pub mod deposit_reserve;
pub mod quote_reserve;

pub use initialize::*;
pub use set_authority::*;
pub use set_approver::*;
pub use set_refund_address::*;
pub use add_member::*;
pub use distribute::*;
pub use start_operations::*;
pub use pause::*;
pub use unpause::*;
pub use lift_member_restriction::*;
pub use open_holder::*;
pub use open_refund_log::*;
pub use transfer::*;
pub use approve::*;
pub use transfer_from::*;
pub use create_transaction::*;
pub use sign_transaction::*;
pub use list_refunds::*;
pub use clear_refunds::*;
pub use withdraw_reserve::*;
pub use deposit_reserve::*;
pub use quote_reserve::*;
