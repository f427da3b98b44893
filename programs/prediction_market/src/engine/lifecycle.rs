//! Market schedule and phase gating.
//!
//! ```text
//! Unconfigured ─▶ Scheduled ─▶ Open ─▶ Closed ─▶ Resolved
//! ```
//!
//! The schedule may only be edited before the window opens.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::state::{Market, MarketPhase, Outcome};

/// Zeroes the trading state of a freshly created market.
pub fn initialize_market(market: &mut Market) -> Result<()> {
    require!(
        market.yes_supply == 0
            && market.no_supply == 0
            && market.outcome == Outcome::Undetermined,
        MarketError::AlreadyInitialized
    );

    market.start_time = 0;
    market.duration = 0;
    market.yes_holders = 0;
    market.no_holders = 0;
    market.total_supply = 0;
    Ok(())
}

pub fn set_start_time(market: &mut Market, start_time: i64, now: i64) -> Result<()> {
    ensure_unopened(market, now)?;
    require!(start_time >= 0, MarketError::InvalidSchedule);
    require!(
        start_time.checked_add(market.duration).is_some(),
        MarketError::InvalidSchedule
    );

    market.start_time = start_time;
    Ok(())
}

pub fn set_duration(market: &mut Market, duration: i64, now: i64) -> Result<()> {
    ensure_unopened(market, now)?;
    require!(duration > 0, MarketError::InvalidSchedule);
    require!(
        market.start_time.checked_add(duration).is_some(),
        MarketError::InvalidSchedule
    );

    market.duration = duration;
    Ok(())
}

/// Purchases require the trading window to be open.
pub fn ensure_open(market: &Market, now: i64) -> Result<()> {
    match market.phase(now) {
        MarketPhase::Open => Ok(()),
        MarketPhase::Resolved => err!(MarketError::AlreadyResolved),
        _ => err!(MarketError::MarketNotOpen),
    }
}

fn ensure_unopened(market: &Market, now: i64) -> Result<()> {
    match market.phase(now) {
        MarketPhase::Unconfigured | MarketPhase::Scheduled => Ok(()),
        _ => err!(MarketError::ScheduleLocked),
    }
}
