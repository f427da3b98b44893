//! In-memory custody and a multi-holder book for engine tests.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::engine::{
    claim, convert, ledger, resolve, Claim, Conversion, OutcomeCustody, PaymentCustody,
    Purchase, Resolution,
};
use crate::errors::MarketError;
use crate::state::{holders, Market, Position, Side, SwapPolicy};

pub const OPENS_AT: i64 = 1_000;
pub const DURATION: i64 = 100;

/// A clock reading inside the trading window
pub const DURING: i64 = OPENS_AT + 1;

/// A clock reading after the window closed
pub const AFTER: i64 = OPENS_AT + DURATION + 1;

#[derive(Debug, Default)]
pub struct MemoryOutcomes {
    pub yes_minted: u64,
    pub no_minted: u64,
    pub reject: bool,
}

impl MemoryOutcomes {
    pub fn minted(&self, side: Side) -> u64 {
        match side {
            Side::Yes => self.yes_minted,
            Side::No => self.no_minted,
        }
    }

    fn minted_mut(&mut self, side: Side) -> &mut u64 {
        match side {
            Side::Yes => &mut self.yes_minted,
            Side::No => &mut self.no_minted,
        }
    }
}

impl OutcomeCustody for MemoryOutcomes {
    fn mint(&mut self, side: Side, amount: u64) -> Result<()> {
        require!(!self.reject, MarketError::ExternalTransfer);
        let minted = self.minted_mut(side);
        *minted = minted.checked_add(amount).ok_or(MarketError::ExternalTransfer)?;
        Ok(())
    }

    fn burn(&mut self, side: Side, amount: u64) -> Result<()> {
        require!(!self.reject, MarketError::ExternalTransfer);
        let minted = self.minted_mut(side);
        *minted = minted.checked_sub(amount).ok_or(MarketError::ExternalTransfer)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryBank {
    pub pool: u64,
    pub wallets: BTreeMap<Pubkey, u64>,
    pub reject: bool,
}

impl MemoryBank {
    pub fn wallet(&self, owner: &Pubkey) -> u64 {
        self.wallets.get(owner).copied().unwrap_or_default()
    }
}

impl PaymentCustody for MemoryBank {
    fn pool_balance(&self) -> u64 {
        self.pool
    }

    fn collect(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.reject, MarketError::ExternalTransfer);
        let wallet = self.wallets.entry(*from).or_default();
        *wallet = wallet.checked_sub(amount).ok_or(MarketError::ExternalTransfer)?;
        self.pool += amount;
        Ok(())
    }

    fn pay_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.reject, MarketError::ExternalTransfer);
        self.pool = self.pool.checked_sub(amount).ok_or(MarketError::ExternalTransfer)?;
        *self.wallets.entry(*to).or_default() += amount;
        Ok(())
    }
}

/// One market, its positions and both custodies.
pub struct Book {
    pub market_key: Pubkey,
    pub market: Market,
    pub positions: BTreeMap<Pubkey, Position>,
    pub outcomes: MemoryOutcomes,
    pub bank: MemoryBank,
    pub policy: SwapPolicy,
}

impl Book {
    /// A market whose window is `[OPENS_AT, OPENS_AT + DURATION]`.
    pub fn open() -> Self {
        Self {
            market_key: Pubkey::new_unique(),
            market: Market {
                start_time: OPENS_AT,
                duration: DURATION,
                ..Market::default()
            },
            positions: BTreeMap::new(),
            outcomes: MemoryOutcomes::default(),
            bank: MemoryBank::default(),
            policy: SwapPolicy::WhileOpen,
        }
    }

    /// Registers a holder with `funds` in their payment wallet.
    pub fn holder(&mut self, funds: u64) -> Pubkey {
        let owner = Pubkey::new_unique();
        self.bank.wallets.insert(owner, funds);
        self.positions.insert(
            owner,
            Position {
                market: self.market_key,
                owner,
                ..Position::default()
            },
        );
        owner
    }

    pub fn position(&self, owner: &Pubkey) -> &Position {
        &self.positions[owner]
    }

    pub fn buy(&mut self, owner: &Pubkey, side: Side, payment: u64) -> Result<Purchase> {
        self.buy_at(owner, side, payment, DURING)
    }

    pub fn buy_at(&mut self, owner: &Pubkey, side: Side, payment: u64, now: i64) -> Result<Purchase> {
        let position = self.positions.get_mut(owner).expect("unknown holder");
        ledger::buy(
            &mut self.market,
            position,
            side,
            payment,
            now,
            &mut self.outcomes,
            &mut self.bank,
        )
    }

    pub fn convert(&mut self, owner: &Pubkey, from: Side, amount: u64) -> Result<Conversion> {
        self.convert_at(owner, from, amount, DURING)
    }

    pub fn convert_at(&mut self, owner: &Pubkey, from: Side, amount: u64, now: i64) -> Result<Conversion> {
        let position = self.positions.get_mut(owner).expect("unknown holder");
        convert(
            &mut self.market,
            position,
            from,
            amount,
            now,
            self.policy,
            &mut self.outcomes,
        )
    }

    pub fn resolve(&mut self, outcome: Side) -> Result<Resolution> {
        resolve(&mut self.market, outcome, AFTER)
    }

    pub fn claim(&mut self, owner: &Pubkey) -> Result<Claim> {
        let position = self.positions.get_mut(owner).expect("unknown holder");
        claim(&mut self.market, position, &mut self.outcomes, &mut self.bank)
    }

    /// Positions sum to the aggregate supplies, custody matches the ledger,
    /// and holder counters match the presence flags.
    pub fn assert_balanced(&self) {
        for side in [Side::Yes, Side::No] {
            let held: u64 = self.positions.values().map(|p| p.amount(side)).sum();
            assert_eq!(held, self.market.supply(side), "{side:?} positions vs supply");
            assert_eq!(held, self.outcomes.minted(side), "{side:?} positions vs custody");

            let listed = holders(self.positions.values(), side).count() as u32;
            assert_eq!(listed, self.market.holders(side), "{side:?} holder count");
        }
    }
}
