//! # Ratio Pricing Curve
//!
//! The price of an outcome is its own aggregate supply divided by the
//! supply of the *opposite* outcome, expressed in 1e18 fixed point:
//!
//! ```text
//! price(own, other) = own * 1e18 / other      (both non-zero)
//! price(own, other) = 0.5e18                  (either side empty)
//! ```
//!
//! When both supplies are non-zero the two quotes are reciprocal,
//! `price_yes * price_no ≈ 1e36`. Integer division leaves a bounded
//! rounding gap which is tolerated rather than corrected.
//!
//! ## Purchases
//!
//! ```text
//! tokens_out = payment * 1e18 / price(side)
//! ```
//!
//! ## Conversions
//!
//! Converting `from → to` spends at the destination quote:
//!
//! ```text
//! tokens_out = tokens_in * price(to) / 1e18
//! ```

use anchor_lang::prelude::*;

use crate::state::Side;

/// Errors specific to the ratio curve
#[error_code(offset = 7000)]
pub enum CurveError {
    #[msg("Computed price is zero")]
    ZeroPrice,
    #[msg("Arithmetic overflow")]
    Overflow,
}

/// Fixed-point unit for prices (1.0 == 1e18)
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Quote returned while either side has no supply (maximal uncertainty)
pub const NEUTRAL_PRICE: u128 = PRICE_SCALE / 2;

/// Balance-ratio curve for two-outcome markets
pub struct RatioCurve;

impl RatioCurve {
    /// Price of the side holding `own_supply` against `other_supply`.
    ///
    /// Cannot divide by zero: an empty side short-circuits to the neutral
    /// quote. The result can still be zero when `own_supply` is tiny next to
    /// `other_supply`, so callers must check before dividing by it.
    pub fn price(own_supply: u64, other_supply: u64) -> u128 {
        if own_supply == 0 || other_supply == 0 {
            return NEUTRAL_PRICE;
        }

        // u64::MAX * 1e18 stays well below u128::MAX
        (own_supply as u128) * PRICE_SCALE / (other_supply as u128)
    }

    /// Price of `side` given both aggregate supplies
    pub fn price_of(side: Side, yes_supply: u64, no_supply: u64) -> u128 {
        match side {
            Side::Yes => Self::price(yes_supply, no_supply),
            Side::No => Self::price(no_supply, yes_supply),
        }
    }

    /// Get quotes for both sides
    ///
    /// # Returns
    /// * (yes_price, no_price) - both scaled by 1e18
    pub fn prices(yes_supply: u64, no_supply: u64) -> (u128, u128) {
        (
            Self::price(yes_supply, no_supply),
            Self::price(no_supply, yes_supply),
        )
    }

    /// Tokens bought by `payment` at `price`.
    ///
    /// May return zero (payment too small for the quote); the purchase path
    /// rejects that case.
    pub fn tokens_for_payment(payment: u64, price: u128) -> Result<u64> {
        require!(price > 0, CurveError::ZeroPrice);

        let tokens = (payment as u128)
            .checked_mul(PRICE_SCALE)
            .ok_or(CurveError::Overflow)?
            / price;

        u64::try_from(tokens).map_err(|_| error!(CurveError::Overflow))
    }

    /// Tokens received when converting `tokens_in` at the destination `rate`.
    pub fn tokens_for_conversion(tokens_in: u64, rate: u128) -> Result<u64> {
        let tokens = (tokens_in as u128)
            .checked_mul(rate)
            .ok_or(CurveError::Overflow)?
            / PRICE_SCALE;

        u64::try_from(tokens).map_err(|_| error!(CurveError::Overflow))
    }
}

// ============================================================================
// TESTS
// ============================================================================
