//! Outcome-to-outcome conversion.
//!
//! The exchange rate is the spot price of the *destination* side:
//!
//! ```text
//! YES → NO   tokens_out = tokens_in * price(NO)  / 1e18
//! NO  → YES  tokens_out = tokens_in * price(YES) / 1e18
//! ```
//!
//! Because each quote divides by the opposite supply, every conversion
//! shifts the ratio seen by the next one.

use anchor_lang::prelude::*;

use crate::amm::RatioCurve;
use crate::engine::{ledger, OutcomeCustody};
use crate::errors::MarketError;
use crate::state::{Market, MarketPhase, Position, Side, SwapPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub from: Side,
    pub to: Side,
    pub tokens_in: u64,
    pub rate: u128,
    pub tokens_out: u64,
}

/// Converts `tokens_in` of `from` held by `position` into the other side.
pub fn convert<O>(
    market: &mut Market,
    position: &mut Position,
    from: Side,
    tokens_in: u64,
    now: i64,
    policy: SwapPolicy,
    outcomes: &mut O,
) -> Result<Conversion>
where
    O: OutcomeCustody + ?Sized,
{
    require!(policy != SwapPolicy::Disabled, MarketError::SwapsDisabled);
    let phase = market.phase(now);
    require!(phase != MarketPhase::Resolved, MarketError::AlreadyResolved);
    require!(policy.permits(phase), MarketError::MarketNotOpen);

    require!(tokens_in > 0, MarketError::ZeroAmount);
    require!(
        position.amount(from) >= tokens_in,
        MarketError::InsufficientPosition
    );

    let to = from.opposite();
    let rate = market.price(to);
    let tokens_out = RatioCurve::tokens_for_conversion(tokens_in, rate)?;
    require!(tokens_out > 0, MarketError::ZeroAmount);
    ledger::check_credit(market, position, to, tokens_out)?;

    outcomes.burn(from, tokens_in)?;
    outcomes.mint(to, tokens_out)?;

    market.remove_supply(from, tokens_in)?;
    position.debit(from, tokens_in)?;
    ledger::credit(market, position, to, tokens_out)?;

    Ok(Conversion {
        from,
        to,
        tokens_in,
        rate,
        tokens_out,
    })
}
