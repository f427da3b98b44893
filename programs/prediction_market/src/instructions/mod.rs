//! Instruction handlers for the prediction market protocol
//!
//! - `initialize` / `update_config` - protocol configuration (admin)
//! - `market` - creation pipeline, scheduling and resolution
//! - `trade` - purchases and YES ⇄ NO swaps
//! - `liquidity` - liquidity points and settlement pool funding
//! - `claim` - pro-rata payout after resolution
//! - `views` - read-only queries

pub mod claim;
pub mod custody;
pub mod initialize;
pub mod liquidity;
pub mod market;
pub mod trade;
pub mod update_config;
pub mod views;

pub use claim::*;
pub use initialize::*;
pub use liquidity::*;
pub use market::*;
pub use trade::*;
pub use update_config::*;
pub use views::*;
