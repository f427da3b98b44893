//! Permissionless Market Creation Pipeline
//!
//! Creation is split into three steps that must be called in sequence, each
//! small enough to stay inside the BPF stack frame:
//!
//! Step 1: CreateMarketState - market PDA, reported to the engine as a pool initialization.
//! Step 2: CreateMarketMints - YES and NO mints, with the market PDA as mint authority.
//! Step 3: CreateMarketVaults - payment vault and the YES/NO custody accounts.
//!
//! A market created this way is Unconfigured until the creator sets its
//! start time and duration.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::engine::{dispatch, HookTarget, PoolEvent};
use crate::errors::MarketError;
use crate::state::{Config, Market};

const MAX_QUESTION_LEN: usize = 256;

// =============================================================================
// STEP 1: CREATE MARKET STATE
// =============================================================================

#[event]
pub struct MarketStateCreated {
    pub market_id: u64,
    pub creator: Pubkey,
    pub question: String,
}

#[derive(Accounts)]
pub struct CreateMarketState<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        constraint = !config.paused @ MarketError::ProtocolPaused,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = creator,
        space = 8 + Market::INIT_SPACE,
        seeds = [Market::SEED, config.market_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: Box<Account<'info, Market>>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarketState<'info> {
    pub fn create_market_state(
        &mut self,
        question: String,
        bumps: &CreateMarketStateBumps,
    ) -> Result<()> {
        require!(
            question.len() <= MAX_QUESTION_LEN,
            MarketError::QuestionTooLong
        );

        let now = Clock::get()?.unix_timestamp;
        let market_id = self.config.market_count;

        self.market.set_inner(Market {
            id: market_id,
            creator: self.creator.key(),
            question: question.clone(),
            created_at: now,
            payment_mint: self.config.payment_mint,
            bump: bumps.market,
            ..Market::default()
        });

        dispatch(
            PoolEvent::Initialize,
            HookTarget::Market(&mut self.market),
        )?;

        self.config.market_count = market_id
            .checked_add(1)
            .ok_or(MarketError::MathOverflow)?;

        msg!("Market {} created by {}", market_id, self.creator.key());

        emit!(MarketStateCreated {
            market_id,
            creator: self.creator.key(),
            question,
        });

        Ok(())
    }
}

// =============================================================================
// STEP 2: CREATE MARKET MINTS
// =============================================================================

#[event]
pub struct MarketMintsCreated {
    pub market_id: u64,
    pub yes_mint: Pubkey,
    pub no_mint: Pubkey,
}

#[derive(Accounts)]
pub struct CreateMarketMints<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        has_one = creator @ MarketError::Unauthorized,
        constraint = market.yes_mint == Pubkey::default() @ MarketError::AlreadyInitialized,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(address = market.payment_mint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        mint::decimals = payment_mint.decimals,
        mint::authority = market,
        seeds = [b"yes_mint", market.key().as_ref()],
        bump,
    )]
    pub yes_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        mint::decimals = payment_mint.decimals,
        mint::authority = market,
        seeds = [b"no_mint", market.key().as_ref()],
        bump,
    )]
    pub no_mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarketMints<'info> {
    pub fn create_market_mints(&mut self) -> Result<()> {
        self.market.yes_mint = self.yes_mint.key();
        self.market.no_mint = self.no_mint.key();

        emit!(MarketMintsCreated {
            market_id: self.market.id,
            yes_mint: self.yes_mint.key(),
            no_mint: self.no_mint.key(),
        });

        Ok(())
    }
}

// =============================================================================
// STEP 3: CREATE MARKET VAULTS
// =============================================================================

#[event]
pub struct MarketVaultsCreated {
    pub market_id: u64,
    pub vault: Pubkey,
    pub yes_custody: Pubkey,
    pub no_custody: Pubkey,
}

#[derive(Accounts)]
pub struct CreateMarketVaults<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        has_one = creator @ MarketError::Unauthorized,
        has_one = yes_mint,
        has_one = no_mint,
        has_one = payment_mint,
    )]
    pub market: Box<Account<'info, Market>>,

    pub yes_mint: Box<InterfaceAccount<'info, Mint>>,
    pub no_mint: Box<InterfaceAccount<'info, Mint>>,
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = payment_mint,
        associated_token::authority = market,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = yes_mint,
        associated_token::authority = market,
    )]
    pub yes_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = no_mint,
        associated_token::authority = market,
    )]
    pub no_custody: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarketVaults<'info> {
    pub fn create_market_vaults(&mut self) -> Result<()> {
        emit!(MarketVaultsCreated {
            market_id: self.market.id,
            vault: self.vault.key(),
            yes_custody: self.yes_custody.key(),
            no_custody: self.no_custody.key(),
        });
        Ok(())
    }
}
