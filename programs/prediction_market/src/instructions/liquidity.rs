//! Liquidity reporting and settlement pool funding.
//!
//! The exchange integration reports liquidity additions on behalf of
//! providers, who accumulate points. Anyone may top up a market's settlement
//! vault; those funds are shared among the winning side at claim time.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::engine::{dispatch, HookReceipt, HookTarget, PoolEvent};
use crate::errors::MarketError;
use crate::state::{Config, LiquidityPoints, Market};

#[event]
pub struct LiquidityCredited {
    pub provider: Pubkey,
    pub liquidity_delta: i128,
    pub total_points: u128,
}

#[event]
pub struct PoolFunded {
    pub market_id: u64,
    pub funder: Pubkey,
    pub amount: u64,
    pub pool_balance: u64,
}

#[derive(Accounts)]
pub struct NotifyLiquidity<'info> {
    #[account(mut)]
    pub hook_authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = hook_authority @ MarketError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    /// CHECK: only used as the owner key of the points account
    pub provider: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = hook_authority,
        space = 8 + LiquidityPoints::INIT_SPACE,
        seeds = [LiquidityPoints::SEED, provider.key().as_ref()],
        bump,
    )]
    pub points: Account<'info, LiquidityPoints>,

    pub system_program: Program<'info, System>,
}

impl<'info> NotifyLiquidity<'info> {
    /// Returns the provider's running total.
    pub fn notify_liquidity_added(
        &mut self,
        liquidity_delta: i128,
        bumps: &NotifyLiquidityBumps,
    ) -> Result<u128> {
        if self.points.provider == Pubkey::default() {
            self.points.provider = self.provider.key();
            self.points.bump = bumps.points;
        }

        let receipt = dispatch(
            PoolEvent::LiquidityAdded { liquidity_delta },
            HookTarget::Provider(&mut self.points),
        )?;

        let HookReceipt::PointsCredited { total } = receipt else {
            return err!(MarketError::HookTargetMismatch);
        };

        emit!(LiquidityCredited {
            provider: self.provider.key(),
            liquidity_delta,
            total_points: total,
        });

        Ok(total)
    }
}

#[derive(Accounts)]
pub struct FundPool<'info> {
    pub funder: Signer<'info>,

    #[account(
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(address = market.payment_mint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = funder,
    )]
    pub funder_payment: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = market,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> FundPool<'info> {
    pub fn fund_pool(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, MarketError::ZeroAmount);

        token_interface::transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.funder_payment.to_account_info(),
                    mint: self.payment_mint.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.funder.to_account_info(),
                },
            ),
            amount,
            self.payment_mint.decimals,
        )
        .map_err(|err| {
            msg!("Pool funding transfer failed: {}", err);
            error!(MarketError::ExternalTransfer)
        })?;

        let pool_balance = self
            .vault
            .amount
            .checked_add(amount)
            .ok_or(MarketError::MathOverflow)?;

        msg!("Market {} pool funded: {}", self.market.id, pool_balance);

        emit!(PoolFunded {
            market_id: self.market.id,
            funder: self.funder.key(),
            amount,
            pool_balance,
        });

        Ok(())
    }
}
