//! Per-holder outcome balances within one market.
//!
//! The `*_listed` flags are the holder-set membership marks: they are set the
//! first time a side is credited and never cleared, so each holder is counted
//! once per side no matter how often the balance drains and refills.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::state::Side;

/// Seeds: ["position", market.key(), owner.key()]
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Position {
    pub market: Pubkey,
    pub owner: Pubkey,
    pub yes_amount: u64,
    pub no_amount: u64,
    pub yes_listed: bool,
    pub no_listed: bool,
    pub bump: u8,
}

impl Position {
    pub const SEED: &'static [u8] = b"position";

    pub fn amount(&self, side: Side) -> u64 {
        match side {
            Side::Yes => self.yes_amount,
            Side::No => self.no_amount,
        }
    }

    pub fn is_listed(&self, side: Side) -> bool {
        match side {
            Side::Yes => self.yes_listed,
            Side::No => self.no_listed,
        }
    }

    /// Adds `amount` to `side`. Returns true when this is the holder's
    /// first acquisition of that side.
    pub fn credit(&mut self, side: Side, amount: u64) -> Result<bool> {
        let (balance, listed) = match side {
            Side::Yes => (&mut self.yes_amount, &mut self.yes_listed),
            Side::No => (&mut self.no_amount, &mut self.no_listed),
        };
        *balance = balance
            .checked_add(amount)
            .ok_or(MarketError::MathOverflow)?;

        let first = amount > 0 && !*listed;
        if first {
            *listed = true;
        }
        Ok(first)
    }

    pub fn debit(&mut self, side: Side, amount: u64) -> Result<()> {
        let balance = match side {
            Side::Yes => &mut self.yes_amount,
            Side::No => &mut self.no_amount,
        };
        *balance = balance
            .checked_sub(amount)
            .ok_or(MarketError::InsufficientPosition)?;
        Ok(())
    }

    /// Zeroes `side` and returns what was there.
    pub fn take(&mut self, side: Side) -> u64 {
        match side {
            Side::Yes => std::mem::take(&mut self.yes_amount),
            Side::No => std::mem::take(&mut self.no_amount),
        }
    }
}

/// Owners in `positions` that belong to the holder set of `side`.
pub fn holders<'a, I>(positions: I, side: Side) -> impl Iterator<Item = Pubkey> + 'a
where
    I: IntoIterator<Item = &'a Position>,
    I::IntoIter: 'a,
{
    positions
        .into_iter()
        .filter(move |position| position.is_listed(side))
        .map(|position| position.owner)
}
