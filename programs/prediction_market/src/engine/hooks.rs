//! Exchange-integration events.
//!
//! The exchange layer reports three things: a pool (market) was
//! initialized, liquidity was added, or a trader asked to swap one outcome
//! for the other. Each event is paired with the state it acts on and routed
//! through [`dispatch`].

use anchor_lang::prelude::*;

use crate::engine::{conversion, lifecycle, Conversion, OutcomeCustody};
use crate::errors::MarketError;
use crate::state::{LiquidityPoints, Market, Position, Side, SwapPolicy};

/// Direction of a requested swap
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SwapDirection {
    YesToNo,
    NoToYes,
}

impl SwapDirection {
    /// Side given up by the trader
    pub fn source(self) -> Side {
        match self {
            SwapDirection::YesToNo => Side::Yes,
            SwapDirection::NoToYes => Side::No,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PoolEvent {
    Initialize,
    LiquidityAdded { liquidity_delta: i128 },
    SwapRequested { direction: SwapDirection, amount: u64 },
}

/// State an event acts on. Only a trader's swap is gated by the clock and
/// the swap policy, so those travel with that target alone.
pub enum HookTarget<'a> {
    Market(&'a mut Market),
    Provider(&'a mut LiquidityPoints),
    Trader {
        market: &'a mut Market,
        position: &'a mut Position,
        outcomes: &'a mut dyn OutcomeCustody,
        policy: SwapPolicy,
        now: i64,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HookReceipt {
    Initialized,
    PointsCredited { total: u128 },
    Swapped(Conversion),
}

pub fn dispatch(event: PoolEvent, target: HookTarget<'_>) -> Result<HookReceipt> {
    match (event, target) {
        (PoolEvent::Initialize, HookTarget::Market(market)) => {
            lifecycle::initialize_market(market)?;
            Ok(HookReceipt::Initialized)
        }
        (PoolEvent::LiquidityAdded { liquidity_delta }, HookTarget::Provider(points)) => {
            Ok(HookReceipt::PointsCredited {
                total: points.credit(liquidity_delta),
            })
        }
        (
            PoolEvent::SwapRequested { direction, amount },
            HookTarget::Trader {
                market,
                position,
                outcomes,
                policy,
                now,
            },
        ) => {
            let conversion = conversion::convert(
                market,
                position,
                direction.source(),
                amount,
                now,
                policy,
                outcomes,
            )?;
            Ok(HookReceipt::Swapped(conversion))
        }
        _ => err!(MarketError::HookTargetMismatch),
    }
}
