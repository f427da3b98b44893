//! Read-only queries, answered through instruction return data.

use anchor_lang::prelude::*;

use crate::amm::RatioCurve;
use crate::errors::MarketError;
use crate::state::{holders, Market, Position, Side};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketBalances {
    pub yes_supply: u64,
    pub no_supply: u64,
    /// Unclaimed winning supply (zero before resolution)
    pub total_supply: u64,
    pub yes_holders: u32,
    pub no_holders: u32,
    /// Spot quotes, scaled by 1e18
    pub yes_price: u128,
    pub no_price: u128,
}

impl MarketBalances {
    pub fn of(market: &Market) -> Self {
        let (yes_price, no_price) = RatioCurve::prices(market.yes_supply, market.no_supply);
        Self {
            yes_supply: market.yes_supply,
            no_supply: market.no_supply,
            total_supply: market.total_supply,
            yes_holders: market.yes_holders,
            no_holders: market.no_holders,
            yes_price,
            no_price,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionBalances {
    pub yes_amount: u64,
    pub no_amount: u64,
}

#[derive(Accounts)]
pub struct ViewMarket<'info> {
    pub market: Account<'info, Market>,
}

impl<'info> ViewMarket<'info> {
    pub fn price(&self, side: Side) -> u128 {
        self.market.price(side)
    }

    pub fn is_open(&self) -> Result<bool> {
        let now = Clock::get()?.unix_timestamp;
        Ok(self.market.is_open(now))
    }

    pub fn balances(&self) -> MarketBalances {
        MarketBalances::of(&self.market)
    }

    /// Owners among `candidates` (position accounts passed as remaining
    /// accounts) that are in the holder set of `side`.
    pub fn holders(&self, side: Side, candidates: &[AccountInfo]) -> Result<Vec<Pubkey>> {
        let positions = load_positions(&self.market.key(), candidates)?;
        Ok(holders(&positions, side).collect())
    }
}

/// Deserializes position accounts, rejecting any that this program does not
/// own or that belong to another market.
pub fn load_positions(market: &Pubkey, candidates: &[AccountInfo]) -> Result<Vec<Position>> {
    let mut positions = Vec::with_capacity(candidates.len());

    for info in candidates {
        require_keys_eq!(*info.owner, crate::ID, MarketError::PositionMismatch);

        let data = info.try_borrow_data()?;
        let position = Position::try_deserialize(&mut &data[..])?;
        require_keys_eq!(position.market, *market, MarketError::PositionMismatch);

        positions.push(position);
    }

    Ok(positions)
}

#[derive(Accounts)]
pub struct ViewPosition<'info> {
    pub market: Account<'info, Market>,

    #[account(has_one = market)]
    pub position: Account<'info, Position>,
}

impl<'info> ViewPosition<'info> {
    pub fn balances(&self) -> PositionBalances {
        PositionBalances {
            yes_amount: self.position.yes_amount,
            no_amount: self.position.no_amount,
        }
    }
}
