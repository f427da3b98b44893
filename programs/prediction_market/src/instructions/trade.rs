//! Token Trading
//!
//! Purchases of YES/NO tokens at the ratio price, and conversions between
//! the two sides routed through the exchange-integration dispatch.
//!
//! Outcome tokens never leave the market: they are minted into the market's
//! custody accounts and the trader's share is recorded on their `Position`.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::engine::{self, dispatch, HookReceipt, HookTarget, PoolEvent, SwapDirection};
use crate::errors::MarketError;
use crate::instructions::custody::{SplOutcomeCustody, SplPaymentCustody};
use crate::state::{Config, Market, Position, Side};

#[event]
pub struct OutcomePurchased {
    pub market_id: u64,
    pub buyer: Pubkey,
    pub side: Side,
    pub payment: u64,
    pub price: u128,
    pub tokens_out: u64,
    pub first_acquisition: bool,
}

#[event]
pub struct OutcomeConverted {
    pub market_id: u64,
    pub trader: Pubkey,
    pub from: Side,
    pub tokens_in: u64,
    pub rate: u128,
    pub tokens_out: u64,
}

/// Accounts for outcome purchases
#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        constraint = !config.paused @ MarketError::ProtocolPaused,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    /// Trader's ledger entry; created on first purchase
    #[account(
        init_if_needed,
        payer = trader,
        space = 8 + Position::INIT_SPACE,
        seeds = [Position::SEED, market.key().as_ref(), trader.key().as_ref()],
        bump,
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(address = market.payment_mint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = trader,
    )]
    pub trader_payment: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Settlement vault
    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = market,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, address = market.yes_mint)]
    pub yes_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut, address = market.no_mint)]
    pub no_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = yes_mint,
        associated_token::authority = market,
    )]
    pub yes_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = no_mint,
        associated_token::authority = market,
    )]
    pub no_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Buy<'info> {
    /// Spends `payment` on `side`; returns the tokens credited.
    pub fn buy(&mut self, side: Side, payment: u64, bumps: &BuyBumps) -> Result<u64> {
        let now = Clock::get()?.unix_timestamp;

        if self.position.owner == Pubkey::default() {
            self.position.market = self.market.key();
            self.position.owner = self.trader.key();
            self.position.bump = bumps.position;
        }

        let market_id = self.market.id.to_le_bytes();
        let market_bump = [self.market.bump];
        let seeds: &[&[u8]] = &[Market::SEED, &market_id, &market_bump];
        let signer_seeds = &[seeds];

        let mut outcomes = SplOutcomeCustody {
            token_program: self.token_program.to_account_info(),
            market: self.market.to_account_info(),
            yes_mint: self.yes_mint.to_account_info(),
            no_mint: self.no_mint.to_account_info(),
            yes_custody: self.yes_custody.to_account_info(),
            no_custody: self.no_custody.to_account_info(),
            signer_seeds,
        };
        let mut payments = SplPaymentCustody {
            token_program: self.token_program.to_account_info(),
            payment_mint: self.payment_mint.to_account_info(),
            decimals: self.payment_mint.decimals,
            market: self.market.to_account_info(),
            vault: self.vault.to_account_info(),
            vault_balance: self.vault.amount,
            holder: self.trader.key(),
            holder_wallet: self.trader_payment.to_account_info(),
            holder_authority: self.trader.to_account_info(),
            signer_seeds,
        };

        let purchase = engine::buy(
            &mut self.market,
            &mut self.position,
            side,
            payment,
            now,
            &mut outcomes,
            &mut payments,
        )?;

        emit!(OutcomePurchased {
            market_id: self.market.id,
            buyer: self.trader.key(),
            side,
            payment,
            price: purchase.price,
            tokens_out: purchase.tokens_out,
            first_acquisition: purchase.first_acquisition,
        });

        Ok(purchase.tokens_out)
    }
}

/// Accounts for YES ⇄ NO conversion
#[derive(Accounts)]
pub struct Swap<'info> {
    pub trader: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        constraint = !config.paused @ MarketError::ProtocolPaused,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(
        mut,
        seeds = [Position::SEED, market.key().as_ref(), trader.key().as_ref()],
        bump = position.bump,
        has_one = market,
        constraint = position.owner == trader.key() @ MarketError::Unauthorized,
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(mut, address = market.yes_mint)]
    pub yes_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut, address = market.no_mint)]
    pub no_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = yes_mint,
        associated_token::authority = market,
    )]
    pub yes_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = no_mint,
        associated_token::authority = market,
    )]
    pub no_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Swap<'info> {
    /// Converts `amount` of the direction's source side; returns the tokens
    /// credited on the other side.
    pub fn swap(&mut self, direction: SwapDirection, amount: u64) -> Result<u64> {
        let now = Clock::get()?.unix_timestamp;

        let market_id = self.market.id.to_le_bytes();
        let market_bump = [self.market.bump];
        let seeds: &[&[u8]] = &[Market::SEED, &market_id, &market_bump];
        let signer_seeds = &[seeds];

        let mut outcomes = SplOutcomeCustody {
            token_program: self.token_program.to_account_info(),
            market: self.market.to_account_info(),
            yes_mint: self.yes_mint.to_account_info(),
            no_mint: self.no_mint.to_account_info(),
            yes_custody: self.yes_custody.to_account_info(),
            no_custody: self.no_custody.to_account_info(),
            signer_seeds,
        };

        let receipt = dispatch(
            PoolEvent::SwapRequested { direction, amount },
            HookTarget::Trader {
                market: &mut self.market,
                position: &mut self.position,
                outcomes: &mut outcomes,
                policy: self.config.swap_policy,
                now,
            },
        )?;

        let HookReceipt::Swapped(conversion) = receipt else {
            return err!(MarketError::HookTargetMismatch);
        };

        emit!(OutcomeConverted {
            market_id: self.market.id,
            trader: self.trader.key(),
            from: conversion.from,
            tokens_in: conversion.tokens_in,
            rate: conversion.rate,
            tokens_out: conversion.tokens_out,
        });

        Ok(conversion.tokens_out)
    }
}
