//! Prediction Market State
//!
//! Each market is a single yes/no question with its own outcome mints,
//! payment vault and settlement counter.

use anchor_lang::prelude::*;

use crate::amm::RatioCurve;
use crate::errors::MarketError;

/// Individual prediction market account
///
/// Seeds: ["market", market_id.to_le_bytes()]
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Market {
    /// Unique market identifier
    pub id: u64,

    /// Market creator's address, allowed to schedule the trading window
    pub creator: Pubkey,

    /// The prediction question
    /// Example: "Will ETH flip BTC by market cap in 2025?"
    #[max_len(256)]
    pub question: String,

    /// Unix timestamp when market was created
    pub created_at: i64,

    /// Unix timestamp when trading opens
    pub start_time: i64,

    /// Length of the trading window in seconds (0 = not configured)
    pub duration: i64,

    /// YES token mint address
    pub yes_mint: Pubkey,

    /// NO token mint address
    pub no_mint: Pubkey,

    /// Payment token mint address
    pub payment_mint: Pubkey,

    /// YES tokens held in custody on behalf of positions
    pub yes_supply: u64,

    /// NO tokens held in custody on behalf of positions
    pub no_supply: u64,

    /// Distinct holders that ever acquired YES
    pub yes_holders: u32,

    /// Distinct holders that ever acquired NO
    pub no_holders: u32,

    /// Winning outcome (only valid after resolution)
    pub outcome: Outcome,

    /// Unclaimed winning supply; snapshotted at resolution
    pub total_supply: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Market {
    pub const SEED: &'static [u8] = b"market";

    pub fn phase(&self, now: i64) -> MarketPhase {
        if self.outcome != Outcome::Undetermined {
            return MarketPhase::Resolved;
        }
        if self.duration <= 0 {
            return MarketPhase::Unconfigured;
        }
        if now < self.start_time {
            return MarketPhase::Scheduled;
        }
        if now <= self.closes_at() {
            MarketPhase::Open
        } else {
            MarketPhase::Closed
        }
    }

    pub fn is_open(&self, now: i64) -> bool {
        self.phase(now) == MarketPhase::Open
    }

    /// Last second of the trading window (inclusive)
    pub fn closes_at(&self) -> i64 {
        self.start_time.saturating_add(self.duration)
    }

    pub fn supply(&self, side: Side) -> u64 {
        match side {
            Side::Yes => self.yes_supply,
            Side::No => self.no_supply,
        }
    }

    pub fn holders(&self, side: Side) -> u32 {
        match side {
            Side::Yes => self.yes_holders,
            Side::No => self.no_holders,
        }
    }

    /// Spot price of `side`, scaled by 1e18
    pub fn price(&self, side: Side) -> u128 {
        RatioCurve::price_of(side, self.yes_supply, self.no_supply)
    }

    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            Outcome::Yes => Some(Side::Yes),
            Outcome::No => Some(Side::No),
            Outcome::Undetermined => None,
        }
    }

    pub fn add_supply(&mut self, side: Side, amount: u64) -> Result<()> {
        let supply = self.supply_mut(side);
        *supply = supply
            .checked_add(amount)
            .ok_or(MarketError::MathOverflow)?;
        Ok(())
    }

    pub fn remove_supply(&mut self, side: Side, amount: u64) -> Result<()> {
        let supply = self.supply_mut(side);
        *supply = supply
            .checked_sub(amount)
            .ok_or(MarketError::MathOverflow)?;
        Ok(())
    }

    pub fn add_holder(&mut self, side: Side) -> Result<()> {
        let holders = match side {
            Side::Yes => &mut self.yes_holders,
            Side::No => &mut self.no_holders,
        };
        *holders = holders
            .checked_add(1)
            .ok_or(MarketError::MathOverflow)?;
        Ok(())
    }

    fn supply_mut(&mut self, side: Side) -> &mut u64 {
        match side {
            Side::Yes => &mut self.yes_supply,
            Side::No => &mut self.no_supply,
        }
    }
}

/// Market lifecycle phase, derived from the schedule and the clock
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MarketPhase {
    /// No trading window configured yet
    Unconfigured,
    /// Window configured but not started
    Scheduled,
    /// Market is open for purchases and conversions
    Open,
    /// Trading ended, awaiting resolution
    Closed,
    /// Market has been resolved
    Resolved,
}

/// Prediction outcome
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum Outcome {
    /// Not yet determined
    #[default]
    Undetermined,
    /// YES outcome occurred
    Yes,
    /// NO outcome occurred
    No,
}

impl From<Side> for Outcome {
    fn from(side: Side) -> Self {
        match side {
            Side::Yes => Outcome::Yes,
            Side::No => Outcome::No,
        }
    }
}

/// One of the two outcome tokens
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Yes => Side::No,
            Side::No => Side::Yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(start_time: i64, duration: i64) -> Market {
        Market {
            start_time,
            duration,
            ..Market::default()
        }
    }

    #[test]
    fn test_fresh_market_is_unconfigured() {
        let market = Market::default();
        assert_eq!(market.phase(0), MarketPhase::Unconfigured);
        assert_eq!(market.phase(1_700_000_000), MarketPhase::Unconfigured);
        assert!(!market.is_open(0));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let market = scheduled(1_000, 100);
        assert_eq!(market.phase(999), MarketPhase::Scheduled);
        assert_eq!(market.phase(1_000), MarketPhase::Open);
        assert_eq!(market.phase(1_100), MarketPhase::Open);
        assert_eq!(market.phase(1_101), MarketPhase::Closed);
    }

    #[test]
    fn test_outcome_overrides_clock() {
        let mut market = scheduled(1_000, 100);
        market.outcome = Outcome::No;
        assert_eq!(market.phase(1_050), MarketPhase::Resolved);
        assert_eq!(market.winner(), Some(Side::No));
    }

    #[test]
    fn test_far_future_window_does_not_wrap() {
        let market = scheduled(i64::MAX - 10, i64::MAX);
        assert_eq!(market.closes_at(), i64::MAX);
        assert_eq!(market.phase(i64::MAX), MarketPhase::Open);
    }

    #[test]
    fn test_supply_bookkeeping() {
        let mut market = Market::default();
        market.add_supply(Side::Yes, 20).unwrap();
        market.add_supply(Side::No, 2000).unwrap();
        market.remove_supply(Side::No, 500).unwrap();

        assert_eq!(market.supply(Side::Yes), 20);
        assert_eq!(market.supply(Side::No), 1500);
        assert_eq!(market.price(Side::Yes), RatioCurve::price(20, 1500));

        assert!(market.remove_supply(Side::Yes, 21).is_err());
        assert!(market.add_supply(Side::No, u64::MAX).is_err());
        assert_eq!(market.supply(Side::No), 1500);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Yes.opposite(), Side::No);
        assert_eq!(Side::No.opposite().opposite(), Side::No);
        assert_eq!(Outcome::from(Side::Yes), Outcome::Yes);
    }
}
