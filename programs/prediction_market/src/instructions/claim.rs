//! Claim winnings after resolution.
//!
//! Each winning holder receives `amount * pool / remaining_supply` of the
//! settlement vault. Their winning tokens are burned from custody and the
//! remaining supply shrinks accordingly, so later claimants split what is
//! left in the same proportion.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::engine::settlement;
use crate::errors::MarketError;
use crate::instructions::custody::{SplOutcomeCustody, SplPaymentCustody};
use crate::state::{Market, Position, Side};

#[event]
pub struct RewardClaimed {
    pub market_id: u64,
    pub claimant: Pubkey,
    pub side: Side,
    pub winning_amount: u64,
    pub reward: u64,
    pub remaining_supply: u64,
}

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    pub claimant: Signer<'info>,

    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(
        mut,
        seeds = [Position::SEED, market.key().as_ref(), claimant.key().as_ref()],
        bump = position.bump,
        has_one = market,
        constraint = position.owner == claimant.key() @ MarketError::Unauthorized,
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(address = market.payment_mint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = claimant,
    )]
    pub claimant_payment: Box<InterfaceAccount<'info, TokenAccount>>,

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
}

impl<'info> ClaimReward<'info> {
    /// Returns the payment amount transferred to the claimant.
    pub fn claim(&mut self) -> Result<u64> {
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
            holder: self.claimant.key(),
            holder_wallet: self.claimant_payment.to_account_info(),
            holder_authority: self.claimant.to_account_info(),
            signer_seeds,
        };

        let claim = settlement::claim(
            &mut self.market,
            &mut self.position,
            &mut outcomes,
            &mut payments,
        )?;

        msg!(
            "Claimed {} for {} winning tokens",
            claim.reward,
            claim.winning_amount
        );

        emit!(RewardClaimed {
            market_id: self.market.id,
            claimant: self.claimant.key(),
            side: claim.side,
            winning_amount: claim.winning_amount,
            reward: claim.reward,
            remaining_supply: claim.remaining_supply,
        });

        Ok(claim.reward)
    }
}
