//! Global Protocol Configuration
//!
//! This account stores protocol-wide settings that apply to all markets.

use anchor_lang::prelude::*;

use crate::state::MarketPhase;

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace, Debug)]
pub struct Config {
    /// Protocol administrator with special privileges
    pub admin: Pubkey,

    /// Oracle address authorized to resolve markets
    pub resolver: Pubkey,

    /// Exchange-integration signer allowed to report liquidity additions
    pub hook_authority: Pubkey,

    /// Payment token mint (e.g., USDC) used for purchases and payouts
    pub payment_mint: Pubkey,

    /// Whether and when outcome tokens may be converted into each other
    pub swap_policy: SwapPolicy,

    /// Total markets created (used as incrementing ID)
    pub market_count: u64,

    /// PDA bump seed
    pub bump: u8,

    /// Whether the protocol is paused
    pub paused: bool,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";
}

/// Conversion policy for swap requests coming from the exchange layer
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum SwapPolicy {
    /// Outcome tokens are purchasable only; every swap request is rejected
    Disabled,
    /// Swaps follow the same window as purchases
    #[default]
    WhileOpen,
    /// Swaps stay legal after the window closes, until resolution
    UntilResolved,
}

impl SwapPolicy {
    pub fn permits(&self, phase: MarketPhase) -> bool {
        match self {
            SwapPolicy::Disabled => false,
            SwapPolicy::WhileOpen => phase == MarketPhase::Open,
            SwapPolicy::UntilResolved => {
                matches!(phase, MarketPhase::Open | MarketPhase::Closed)
            }
        }
    }
}
