//! # Binary Market: Ratio-Priced YES/NO Prediction Markets
//!
//! Each market asks a single yes/no question. Traders pay into a settlement
//! vault to acquire YES or NO tokens, priced from the ratio of the two
//! outstanding supplies. After the trading window closes the resolver picks
//! the winning side and its holders split the vault pro rata.
//!
//! ## How it works
//! - `engine` holds the account-agnostic market logic, tested in memory.
//! - `instructions` adapts it to Anchor accounts and SPL token custody.
//! - `amm` is the ratio price curve.

use anchor_lang::prelude::*;

pub mod amm;
pub mod engine;
pub mod errors;
pub mod instructions;
pub mod state;

pub use amm::*;
pub use engine::SwapDirection;
pub use instructions::*;
pub use state::{Side, SwapPolicy};

// Replace with your deployed program ID
declare_id!("8NeEkxgPMV5AnZ8o5ksjPhqsHwkWXdvGCGyHmEt6tJTn");

#[program]
pub mod binary_market {
    use super::*;

    /// Initialize the protocol with global configuration
    pub fn initialize(
        ctx: Context<Initialize>,
        resolver: Pubkey,
        hook_authority: Pubkey,
        swap_policy: SwapPolicy,
    ) -> Result<()> {
        ctx.accounts
            .initialize(resolver, hook_authority, swap_policy, &ctx.bumps)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        resolver: Option<Pubkey>,
        hook_authority: Option<Pubkey>,
        swap_policy: Option<SwapPolicy>,
        paused: Option<bool>,
    ) -> Result<()> {
        ctx.accounts
            .update_config(resolver, hook_authority, swap_policy, paused)
    }

    /// Create market state (Step 1)
    pub fn create_market_state(ctx: Context<CreateMarketState>, question: String) -> Result<()> {
        ctx.accounts.create_market_state(question, &ctx.bumps)
    }

    /// Create YES/NO token mints (Step 2)
    pub fn create_market_mints(ctx: Context<CreateMarketMints>) -> Result<()> {
        ctx.accounts.create_market_mints()
    }

    /// Create the settlement vault and outcome custody accounts (Step 3)
    pub fn create_market_vaults(ctx: Context<CreateMarketVaults>) -> Result<()> {
        ctx.accounts.create_market_vaults()
    }

    pub fn set_market_start_time(ctx: Context<ScheduleMarket>, start_time: i64) -> Result<()> {
        ctx.accounts.set_market_start_time(start_time)
    }

    pub fn set_market_duration(ctx: Context<ScheduleMarket>, duration: i64) -> Result<()> {
        ctx.accounts.set_market_duration(duration)
    }

    /// Buy outcome tokens; returns the amount credited
    pub fn buy(ctx: Context<Buy>, side: Side, payment: u64) -> Result<u64> {
        ctx.accounts.buy(side, payment, &ctx.bumps)
    }

    /// Convert between YES and NO at the destination price
    pub fn swap(ctx: Context<Swap>, direction: SwapDirection, amount: u64) -> Result<u64> {
        ctx.accounts.swap(direction, amount)
    }

    /// Exchange-integration report of a liquidity addition
    pub fn notify_liquidity_added(
        ctx: Context<NotifyLiquidity>,
        liquidity_delta: i128,
    ) -> Result<u128> {
        ctx.accounts
            .notify_liquidity_added(liquidity_delta, &ctx.bumps)
    }

    pub fn fund_pool(ctx: Context<FundPool>, amount: u64) -> Result<()> {
        ctx.accounts.fund_pool(amount)
    }

    /// Resolve market outcome (resolver only)
    pub fn resolve_market(ctx: Context<ResolveMarket>, outcome: Side) -> Result<()> {
        ctx.accounts.resolve_market(outcome)
    }

    /// Claim a share of the settlement vault; returns the payout
    pub fn claim(ctx: Context<ClaimReward>) -> Result<u64> {
        ctx.accounts.claim()
    }

    pub fn price_yes(ctx: Context<ViewMarket>) -> Result<u128> {
        Ok(ctx.accounts.price(Side::Yes))
    }

    pub fn price_no(ctx: Context<ViewMarket>) -> Result<u128> {
        Ok(ctx.accounts.price(Side::No))
    }

    pub fn is_market_open(ctx: Context<ViewMarket>) -> Result<bool> {
        ctx.accounts.is_open()
    }

    pub fn market_balances(ctx: Context<ViewMarket>) -> Result<MarketBalances> {
        Ok(ctx.accounts.balances())
    }

    /// Holders of `side` among the position accounts passed as remaining accounts
    pub fn market_holders(ctx: Context<ViewMarket>, side: Side) -> Result<Vec<Pubkey>> {
        ctx.accounts.holders(side, ctx.remaining_accounts)
    }

    pub fn position_balances(ctx: Context<ViewPosition>) -> Result<PositionBalances> {
        Ok(ctx.accounts.balances())
    }
}
