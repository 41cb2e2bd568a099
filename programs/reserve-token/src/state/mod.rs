pub mod access_gate;
pub mod holder;
pub mod refund_log;
pub mod reserve_pool;
pub mod roster;
pub mod token_state;
pub mod transaction;

pub use access_gate::*;
pub use holder::*;
pub use refund_log::*;
pub use reserve_pool::*;
pub use roster::*;
pub use token_state::*;
pub use transaction::*;

#[cfg(test)]
mod tests;
