//! Purchases and position bookkeeping.
//!
//! ```text
//! tokens_out = payment * 1e18 / price(side)
//! ```
//!
//! Payment is collected into the settlement vault and the purchased tokens
//! are minted into market custody; the buyer's claim on them lives in their
//! `Position`.

use anchor_lang::prelude::*;

use crate::amm::RatioCurve;
use crate::engine::{lifecycle, OutcomeCustody, PaymentCustody};
use crate::errors::MarketError;
use crate::state::{Market, Position, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub side: Side,
    pub payment: u64,
    pub price: u128,
    pub tokens_out: u64,
    pub first_acquisition: bool,
}

/// Buys `side` for `payment` on behalf of `position.owner`.
pub fn buy<O, P>(
    market: &mut Market,
    position: &mut Position,
    side: Side,
    payment: u64,
    now: i64,
    outcomes: &mut O,
    payments: &mut P,
) -> Result<Purchase>
where
    O: OutcomeCustody + ?Sized,
    P: PaymentCustody + ?Sized,
{
    lifecycle::ensure_open(market, now)?;

    let price = market.price(side);
    let tokens_out = RatioCurve::tokens_for_payment(payment, price)?;
    require!(tokens_out > 0, MarketError::ZeroAmount);
    check_credit(market, position, side, tokens_out)?;

    payments.collect(&position.owner, payment)?;
    outcomes.mint(side, tokens_out)?;

    let first_acquisition = credit(market, position, side, tokens_out)?;

    Ok(Purchase {
        side,
        payment,
        price,
        tokens_out,
        first_acquisition,
    })
}

/// Fails if crediting `amount` of `side` would overflow any counter.
pub(crate) fn check_credit(
    market: &Market,
    position: &Position,
    side: Side,
    amount: u64,
) -> Result<()> {
    market
        .supply(side)
        .checked_add(amount)
        .ok_or(MarketError::MathOverflow)?;
    position
        .amount(side)
        .checked_add(amount)
        .ok_or(MarketError::MathOverflow)?;
    if !position.is_listed(side) {
        market
            .holders(side)
            .checked_add(1)
            .ok_or(MarketError::MathOverflow)?;
    }
    Ok(())
}

/// Adds `amount` to both the aggregate supply and the position, listing the
/// holder on first acquisition.
pub(crate) fn credit(
    market: &mut Market,
    position: &mut Position,
    side: Side,
    amount: u64,
) -> Result<bool> {
    market.add_supply(side, amount)?;
    let first = position.credit(side, amount)?;
    if first {
        market.add_holder(side)?;
    }
    Ok(first)
}
