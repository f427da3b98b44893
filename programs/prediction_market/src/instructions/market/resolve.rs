//! Market Resolution
//!
//! The configured resolver fixes the winning side once the trading window
//! has closed. Resolution snapshots the winning supply that the settlement
//! pool is later divided over.

use anchor_lang::prelude::*;

use crate::engine::settlement;
use crate::errors::MarketError;
use crate::state::{Config, Market, Outcome, Side};

#[event]
pub struct MarketResolved {
    pub market_id: u64,
    pub outcome: Outcome,
    pub winning_supply: u64,
    pub resolver: Pubkey,
    pub timestamp: i64,
}

#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    /// Oracle authorized to resolve markets
    #[account(
        constraint = resolver.key() == config.resolver @ MarketError::Unauthorized
    )]
    pub resolver: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,
}

impl<'info> ResolveMarket<'info> {
    pub fn resolve_market(&mut self, outcome: Side) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let resolution = settlement::resolve(&mut self.market, outcome, now)?;

        emit!(MarketResolved {
            market_id: self.market.id,
            outcome: self.market.outcome,
            winning_supply: resolution.total_supply,
            resolver: self.resolver.key(),
            timestamp: now,
        });

        msg!(
            "Market {} resolved: {:?}",
            self.market.id,
            self.market.outcome
        );

        Ok(())
    }
}
