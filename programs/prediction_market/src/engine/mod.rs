//! # Market Engine
//!
//! Account-agnostic core of the protocol. Every operation takes the market
//! and position state by mutable reference, the current clock reading, and a
//! custody implementation for the token side effects:
//!
//! ```text
//! request ─▶ lifecycle gate ─▶ RatioCurve quote ─▶ custody CPI ─▶ ledger update
//! ```
//!
//! Ledger updates are applied only after every custody call of the operation
//! has succeeded, so a rejected transfer leaves the accounts untouched.
//!
//! - `lifecycle`  - schedule and phase gating
//! - `ledger`     - purchases and position bookkeeping
//! - `conversion` - YES ⇄ NO at the destination spot price
//! - `settlement` - resolution and pro-rata claims
//! - `hooks`      - exchange-integration events, one dispatch entry point

pub mod conversion;
pub mod custody;
pub mod hooks;
pub mod ledger;
pub mod lifecycle;
pub mod settlement;

#[cfg(test)]
pub(crate) mod testing;

pub use conversion::*;
pub use custody::*;
pub use hooks::*;
pub use ledger::*;
pub use lifecycle::*;
pub use settlement::*;
