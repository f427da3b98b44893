//! # Automated Market Maker (AMM) Module
//!
//! Prices YES/NO outcome tokens from the ratio of the two aggregate supplies.
//!
//! ```text
//!            price(YES) = YES / NO
//!            price(NO)  = NO / YES
//!
//!   ┌────────────────────────────────────────┐
//!   │  price ▲                               │
//!   │        │                 ╱             │
//!   │        │              ╱                │
//!   │  1.0 ──┼───────────╳───────────        │
//!   │        │        ╱                      │
//!   │  0.5 ──┼ ─ ─ (either side empty)       │
//!   │        └──────────────────▶ YES / NO   │
//!   └────────────────────────────────────────┘
//! ```
//!
//! There is no slippage formula: the quote only moves when purchases or
//! conversions change the supplies.

pub mod ratio_curve;

pub use ratio_curve::*;
