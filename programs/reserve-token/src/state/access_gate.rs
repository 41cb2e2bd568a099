use anchor_lang::prelude::*;

use crate::error::{TokenError, TokenResult};

/// The two privileged identities. Every gated operation checks one of these
/// predicates against the instruction signer before touching state.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessGate {
    /// Creates transactions, manages the roster, reassigns roles.
    pub authority: Pubkey,
    /// Signs pending transactions and lifts the roster timelock.
    pub approver: Pubkey,
}

impl AccessGate {
    pub const SIZE: usize = 32 + 32;

    pub fn is_authority(&self, id: &Pubkey) -> bool {
        *id != Pubkey::default() && *id == self.authority
    }

    pub fn is_approver(&self, id: &Pubkey) -> bool {
        *id != Pubkey::default() && *id == self.approver
    }

    pub fn is_authority_or_approver(&self, id: &Pubkey) -> bool {
        self.is_authority(id) || self.is_approver(id)
    }

    pub fn require_authority(&self, id: &Pubkey) -> TokenResult<()> {
        if self.is_authority(id) {
            Ok(())
        } else {
            Err(TokenError::UnauthorizedAuthority)
        }
    }

    pub fn require_approver(&self, id: &Pubkey) -> TokenResult<()> {
        if self.is_approver(id) {
            Ok(())
        } else {
            Err(TokenError::UnauthorizedApprover)
        }
    }

    pub fn require_authority_or_approver(&self, id: &Pubkey) -> TokenResult<()> {
        if self.is_authority_or_approver(id) {
            Ok(())
        } else {
            Err(TokenError::UnauthorizedOperator)
        }
    }

    /// Hand the authority role to `new_authority`. Returns the previous holder.
    pub fn set_authority(
        &mut self,
        caller: &Pubkey,
        new_authority: Pubkey,
    ) -> TokenResult<Pubkey> {
        self.require_authority(caller)?;
        if new_authority == Pubkey::default() {
            return Err(TokenError::InvalidIdentity);
        }
        if new_authority == self.approver {
            return Err(TokenError::InvalidConfig);
        }
        Ok(core::mem::replace(&mut self.authority, new_authority))
    }

    /// Replace the approver. Returns the previous holder.
    pub fn set_approver(
        &mut self,
        caller: &Pubkey,
        new_approver: Pubkey,
    ) -> TokenResult<Pubkey> {
        self.require_authority(caller)?;
        if new_approver == Pubkey::default() {
            return Err(TokenError::InvalidIdentity);
        }
        // Dual authorization is meaningless if one key holds both roles.
        if new_approver == self.authority {
            return Err(TokenError::InvalidConfig);
        }
        Ok(core::mem::replace(&mut self.approver, new_approver))
    }
}
