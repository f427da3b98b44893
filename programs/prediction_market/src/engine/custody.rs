//! Token side effects consumed by the engine.
//!
//! On-chain these are SPL token CPIs signed by the market PDA; in tests they
//! are in-memory balances. Every call may fail, and the engine treats a
//! failure as terminal for the whole operation.

use anchor_lang::prelude::*;

use crate::state::Side;

/// Outcome tokens held in the market's custody accounts
pub trait OutcomeCustody {
    fn mint(&mut self, side: Side, amount: u64) -> Result<()>;
    fn burn(&mut self, side: Side, amount: u64) -> Result<()>;
}

/// Payment tokens held in the market's settlement vault
pub trait PaymentCustody {
    /// Current vault balance
    fn pool_balance(&self) -> u64;

    /// Moves `amount` from `from`'s wallet into the vault
    fn collect(&mut self, from: &Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` from the vault to `to`'s wallet
    fn pay_out(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}
