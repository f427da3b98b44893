//! Liquidity incentive points.

use anchor_lang::prelude::*;

/// Seeds: ["points", provider.key()]
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct LiquidityPoints {
    pub provider: Pubkey,

    /// Sum of every reported liquidity delta magnitude
    pub points: u128,

    pub bump: u8,
}

impl LiquidityPoints {
    pub const SEED: &'static [u8] = b"points";

    /// Credits the magnitude of `liquidity_delta`; never fails.
    pub fn credit(&mut self, liquidity_delta: i128) -> u128 {
        self.points = self.points.saturating_add(liquidity_delta.unsigned_abs());
        self.points
    }
}
