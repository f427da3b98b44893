//! Resolution and pro-rata claims.
//!
//! At resolution the winning aggregate supply is snapshotted into
//! `market.total_supply`. Each claim pays
//!
//! ```text
//! reward = amount * pool_balance / total_supply
//! ```
//!
//! and, when the reward is non-zero, removes `reward` from the pool and
//! `amount` from `total_supply`. Both quantities shrink by the same fraction
//! `amount / total_supply`, so `pool_balance / total_supply` is unchanged by
//! a paying claim:
//!
//! ```text
//! (P - aP/S) / (S - a) = P(S - a) / S(S - a) = P / S
//! ```
//!
//! A claim whose reward floors to zero touches neither quantity, so the
//! ratio is unchanged there too. Every claimant therefore receives
//! `amount * P0 / S0` regardless of claim order. Flooring only ever leaves
//! dust in the pool, which raises the ratio for later claimants; when every
//! claim paid out, the final claimant (amount == total_supply) takes
//! whatever remains, exhausting the pool.
//!
//! Claimed winning tokens are burned from custody and removed from the
//! aggregate supply whether or not anything was paid, so positions keep
//! summing to supply once the winning side is zeroed.

use anchor_lang::prelude::*;

use crate::engine::{OutcomeCustody, PaymentCustody};
use crate::errors::MarketError;
use crate::state::{Market, MarketPhase, Position, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Side,
    pub total_supply: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub side: Side,
    pub winning_amount: u64,
    pub pool_balance: u64,
    pub reward: u64,
    pub remaining_supply: u64,
}

/// Fixes the outcome of a closed market. Irreversible.
pub fn resolve(market: &mut Market, outcome: Side, now: i64) -> Result<Resolution> {
    match market.phase(now) {
        MarketPhase::Closed => {}
        MarketPhase::Resolved => return err!(MarketError::AlreadyResolved),
        _ => return err!(MarketError::MarketNotClosed),
    }

    market.outcome = outcome.into();
    market.total_supply = market.supply(outcome);

    Ok(Resolution {
        outcome,
        total_supply: market.total_supply,
    })
}

/// Pays `position.owner` their share of the pool and retires their winning
/// tokens. The winning side of the position is zeroed even when the reward
/// rounds down to nothing; `total_supply` only shrinks when something is paid.
pub fn claim<O, P>(
    market: &mut Market,
    position: &mut Position,
    outcomes: &mut O,
    payments: &mut P,
) -> Result<Claim>
where
    O: OutcomeCustody + ?Sized,
    P: PaymentCustody + ?Sized,
{
    let side = market.winner().ok_or(MarketError::NotResolved)?;
    require!(market.total_supply > 0, MarketError::NoSupply);

    let pool_balance = payments.pool_balance();
    let winning_amount = position.amount(side);
    let reward = reward_for(winning_amount, pool_balance, market.total_supply)?;
    let remaining_supply = if reward > 0 {
        market
            .total_supply
            .checked_sub(winning_amount)
            .ok_or(MarketError::MathOverflow)?
    } else {
        market.total_supply
    };

    if reward > 0 {
        payments.pay_out(&position.owner, reward)?;
    }
    if winning_amount > 0 {
        outcomes.burn(side, winning_amount)?;
    }

    market.total_supply = remaining_supply;
    market.remove_supply(side, winning_amount)?;
    position.take(side);

    Ok(Claim {
        side,
        winning_amount,
        pool_balance,
        reward,
        remaining_supply,
    })
}

/// `amount * pool_balance / total_supply`, floored.
pub fn reward_for(amount: u64, pool_balance: u64, total_supply: u64) -> Result<u64> {
    require!(total_supply > 0, MarketError::NoSupply);

    let reward = (amount as u128)
        .checked_mul(pool_balance as u128)
        .ok_or(MarketError::MathOverflow)?
        / (total_supply as u128);

    u64::try_from(reward).map_err(|_| error!(MarketError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::{Book, AFTER, DURING};

    /// Three YES holders of unequal size and one NO holder.
    fn closed_book(sizes: [u64; 3]) -> (Book, Vec<Pubkey>, Pubkey) {
        let mut book = Book::open();
        let winners: Vec<Pubkey> = sizes.iter().map(|_| book.holder(1_000_000)).collect();
        let loser = book.holder(1_000_000);

        // all YES purchases happen while NO is empty, so each buys at 0.5
        for (winner, size) in winners.iter().zip(sizes) {
            book.buy(winner, Side::Yes, size).unwrap();
        }
        book.buy(&loser, Side::No, 500).unwrap();
        (book, winners, loser)
    }

    fn permutations(n: usize) -> Vec<Vec<usize>> {
        if n == 1 {
            return vec![vec![0]];
        }
        let mut out = Vec::new();
        for rest in permutations(n - 1) {
            for slot in 0..n {
                let mut order = rest.clone();
                order.insert(slot, n - 1);
                out.push(order);
            }
        }
        out
    }

    #[test]
    fn test_resolve_requires_closed() {
        let (mut book, _, _) = closed_book([1, 2, 3]);

        let err = resolve(&mut book.market, Side::Yes, DURING).unwrap_err();
        assert_eq!(err, MarketError::MarketNotClosed.into());

        let resolution = book.resolve(Side::Yes).unwrap();
        assert_eq!(resolution.total_supply, 12);

        let err = book.resolve(Side::No).unwrap_err();
        assert_eq!(err, MarketError::AlreadyResolved.into());
        assert_eq!(book.market.winner(), Some(Side::Yes));
    }

    #[test]
    fn test_unconfigured_market_cannot_resolve() {
        let mut book = Book::open();
        book.market.duration = 0;
        let err = book.resolve(Side::No).unwrap_err();
        assert_eq!(err, MarketError::MarketNotClosed.into());
    }

    #[test]
    fn test_claim_before_resolution_fails() {
        let (mut book, winners, _) = closed_book([1, 2, 3]);
        let err = book.claim(&winners[0]).unwrap_err();
        assert_eq!(err, MarketError::NotResolved.into());
    }

    #[test]
    fn test_claim_without_winning_supply_fails() {
        let mut book = Book::open();
        let alice = book.holder(100);
        book.buy(&alice, Side::Yes, 10).unwrap();
        book.bank.pool += 1_000;

        // nobody bought NO
        let resolution = book.resolve(Side::No).unwrap();
        assert_eq!(resolution.total_supply, 0);

        let err = book.claim(&alice).unwrap_err();
        assert_eq!(err, MarketError::NoSupply.into());
        assert_eq!(book.position(&alice).yes_amount, 20);
    }

    #[test]
    fn test_claim_order_does_not_change_rewards() {
        // 10 / 30 / 60 YES out of 100, pool divisible by the supply
        let sizes = [5u64, 15, 30];
        let funding = 12_345 * 100;

        for order in permutations(3) {
            let (mut book, winners, _) = closed_book(sizes);
            book.resolve(Side::Yes).unwrap();
            book.bank.pool = funding;

            let mut rewards = vec![0u64; 3];
            for &i in &order {
                let ratio_before = (book.bank.pool, book.market.total_supply);
                let claim = book.claim(&winners[i]).unwrap();
                rewards[i] = claim.reward;

                // pool / supply is preserved exactly when the division is exact
                let (pool, supply) = (book.bank.pool, book.market.total_supply);
                assert_eq!(
                    pool as u128 * ratio_before.1 as u128,
                    ratio_before.0 as u128 * supply as u128
                );
                book.assert_balanced();
            }

            assert_eq!(rewards, vec![123_450, 370_350, 740_700]);
            assert_eq!(book.bank.pool, 0);
        }
    }

    #[test]
    fn test_rounding_dust_goes_to_later_claimants() {
        // 2 / 4 / 8 YES; every share is non-zero so each claim shrinks the supply
        let sizes = [1u64, 2, 4];
        let pool = 1_000;

        let mut totals = Vec::new();
        for order in permutations(3) {
            let (mut book, winners, _) = closed_book(sizes);
            book.resolve(Side::Yes).unwrap();
            book.bank.pool = pool;

            let mut paid = 0;
            for &i in &order {
                let before = book.bank.pool as u128 * 1_000_000 / book.market.total_supply as u128;
                let claim = book.claim(&winners[i]).unwrap();
                paid += claim.reward;

                // each reward is within one unit of the exact share
                let exact = claim.winning_amount as u128 * pool as u128 / 14;
                assert!((claim.reward as u128).abs_diff(exact) <= 1);

                // flooring never lowers the ratio for whoever is next
                if book.market.total_supply > 0 {
                    let after = book.bank.pool as u128 * 1_000_000 / book.market.total_supply as u128;
                    assert!(after >= before);
                }
            }
            totals.push(paid);
            assert_eq!(book.bank.pool, 0);
        }
        assert!(totals.iter().all(|&total| total == pool));
    }

    #[test]
    fn test_claim_zeroes_position_and_blocks_double_claim() {
        let (mut book, winners, _) = closed_book([10, 20, 30]);
        book.resolve(Side::Yes).unwrap();
        book.bank.pool = 1_200;

        let first = book.claim(&winners[0]).unwrap();
        assert_eq!(first.winning_amount, 20);
        assert_eq!(first.reward, 200);
        assert_eq!(book.position(&winners[0]).yes_amount, 0);

        let second = book.claim(&winners[0]).unwrap();
        assert_eq!(second.winning_amount, 0);
        assert_eq!(second.reward, 0);
        assert_eq!(book.bank.wallet(&winners[0]), 1_000_000 - 10 + 200);
        book.assert_balanced();
    }

    #[test]
    fn test_zero_reward_still_zeroes_position() {
        let (mut book, winners, _) = closed_book([1, 2, 3]);
        book.resolve(Side::Yes).unwrap();
        book.bank.pool = 0;

        let claim = book.claim(&winners[2]).unwrap();
        assert_eq!(claim.reward, 0);
        assert_eq!(claim.winning_amount, 6);
        assert_eq!(book.position(&winners[2]).yes_amount, 0);
        assert_eq!(claim.remaining_supply, 12);
        assert_eq!(book.market.total_supply, 12);
        assert_eq!(book.market.yes_supply, 6);
        book.assert_balanced();
    }

    #[test]
    fn test_unpayable_pool_is_not_swept_by_last_claimant() {
        // 2 / 2 / 2 YES against a pool of 1: nobody's share reaches a unit
        for order in permutations(3) {
            let (mut book, winners, _) = closed_book([1, 1, 1]);
            book.resolve(Side::Yes).unwrap();
            book.bank.pool = 1;

            let mut rewards = vec![u64::MAX; 3];
            for &i in &order {
                let claim = book.claim(&winners[i]).unwrap();
                rewards[i] = claim.reward;
                assert_eq!(claim.remaining_supply, 6);
                assert_eq!(book.position(&winners[i]).yes_amount, 0);
                book.assert_balanced();
            }

            assert_eq!(rewards, vec![0, 0, 0], "order {order:?}");
            assert_eq!(book.bank.pool, 1);
            assert_eq!(book.market.total_supply, 6);
        }
    }

    #[test]
    fn test_failed_payout_leaves_ledger_untouched() {
        let (mut book, winners, _) = closed_book([1, 2, 3]);
        book.resolve(Side::Yes).unwrap();
        book.bank.reject = true;

        let err = book.claim(&winners[1]).unwrap_err();
        assert_eq!(err, MarketError::ExternalTransfer.into());
        assert_eq!(book.position(&winners[1]).yes_amount, 4);
        assert_eq!(book.market.total_supply, 12);
        book.assert_balanced();
    }

    #[test]
    fn test_end_to_end_single_winner() {
        let mut book = Book::open();
        let alice = book.holder(10);
        let bob = book.holder(1_000);

        let purchase = book.buy(&alice, Side::Yes, 10).unwrap();
        assert_eq!(purchase.price, crate::amm::NEUTRAL_PRICE);
        assert_eq!(purchase.tokens_out, 20);
        let purchase = book.buy(&bob, Side::No, 1_000).unwrap();
        assert_eq!(purchase.tokens_out, 2_000);

        assert!(book.market.is_open(DURING));
        assert!(!book.market.is_open(AFTER));
        book.resolve(Side::Yes).unwrap();

        // external funding on top of the collected payments
        book.bank.pool += 4_990;
        let pool = book.bank.pool;
        assert_eq!(pool, 6_000);

        // bob held the losing side: nothing paid, NO balance untouched
        let claim = book.claim(&bob).unwrap();
        assert_eq!(claim.reward, 0);
        assert_eq!(claim.winning_amount, 0);
        assert_eq!(book.position(&bob).no_amount, 2_000);
        assert_eq!(book.bank.wallet(&bob), 0);

        let claim = book.claim(&alice).unwrap();
        assert_eq!(claim.reward, 20 * pool / 20);
        assert_eq!(book.bank.wallet(&alice), pool);
        assert_eq!(book.bank.pool, 0);

        // winning supply fully claimed
        let err = book.claim(&bob).unwrap_err();
        assert_eq!(err, MarketError::NoSupply.into());
        book.assert_balanced();
    }

    #[test]
    fn test_reward_for_math() {
        assert_eq!(reward_for(20, 6_000, 20).unwrap(), 6_000);
        assert_eq!(reward_for(1, 10, 3).unwrap(), 3);
        assert_eq!(reward_for(0, 10, 3).unwrap(), 0);
        assert_eq!(reward_for(u64::MAX, u64::MAX, u64::MAX).unwrap(), u64::MAX);
        assert_eq!(
            reward_for(1, 1, 0).unwrap_err(),
            MarketError::NoSupply.into()
        );
    }
}
