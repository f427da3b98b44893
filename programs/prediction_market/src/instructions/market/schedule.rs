//! Trading window configuration. Only the creator may schedule a market, and
//! only before it opens.

use anchor_lang::prelude::*;

use crate::engine::lifecycle;
use crate::errors::MarketError;
use crate::state::Market;

#[event]
pub struct MarketScheduled {
    pub market_id: u64,
    pub start_time: i64,
    pub duration: i64,
}

#[derive(Accounts)]
pub struct ScheduleMarket<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
        has_one = creator @ MarketError::Unauthorized,
    )]
    pub market: Account<'info, Market>,
}

impl<'info> ScheduleMarket<'info> {
    pub fn set_market_start_time(&mut self, start_time: i64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        lifecycle::set_start_time(&mut self.market, start_time, now)?;
        self.scheduled()
    }

    pub fn set_market_duration(&mut self, duration: i64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        lifecycle::set_duration(&mut self.market, duration, now)?;
        self.scheduled()
    }

    fn scheduled(&self) -> Result<()> {
        msg!(
            "Market {} window: start {} duration {}",
            self.market.id,
            self.market.start_time,
            self.market.duration
        );

        emit!(MarketScheduled {
            market_id: self.market.id,
            start_time: self.market.start_time,
            duration: self.market.duration,
        });
        Ok(())
    }
}
