//! SPL token custody backing the engine's custody traits.
//!
//! Outcome tokens are minted into and burned from associated token accounts
//! owned by the market PDA; the market PDA is also the mint authority and the
//! owner of the payment vault.

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Burn, MintTo, TransferChecked};

use crate::engine::{OutcomeCustody, PaymentCustody};
use crate::errors::MarketError;
use crate::state::Side;

pub struct SplOutcomeCustody<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub market: AccountInfo<'info>,
    pub yes_mint: AccountInfo<'info>,
    pub no_mint: AccountInfo<'info>,
    pub yes_custody: AccountInfo<'info>,
    pub no_custody: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> SplOutcomeCustody<'a, 'info> {
    fn accounts(&self, side: Side) -> (AccountInfo<'info>, AccountInfo<'info>) {
        match side {
            Side::Yes => (self.yes_mint.clone(), self.yes_custody.clone()),
            Side::No => (self.no_mint.clone(), self.no_custody.clone()),
        }
    }
}

impl OutcomeCustody for SplOutcomeCustody<'_, '_> {
    fn mint(&mut self, side: Side, amount: u64) -> Result<()> {
        let (mint, custody) = self.accounts(side);
        token_interface::mint_to(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                MintTo {
                    mint,
                    to: custody,
                    authority: self.market.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )
        .map_err(rejected)
    }

    fn burn(&mut self, side: Side, amount: u64) -> Result<()> {
        let (mint, custody) = self.accounts(side);
        token_interface::burn(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Burn {
                    mint,
                    from: custody,
                    authority: self.market.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )
        .map_err(rejected)
    }
}

pub struct SplPaymentCustody<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub payment_mint: AccountInfo<'info>,
    pub decimals: u8,
    pub market: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    /// Vault balance as loaded, tracked across this instruction's transfers
    pub vault_balance: u64,
    pub holder: Pubkey,
    pub holder_wallet: AccountInfo<'info>,
    pub holder_authority: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl PaymentCustody for SplPaymentCustody<'_, '_> {
    fn pool_balance(&self) -> u64 {
        self.vault_balance
    }

    fn collect(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*from, self.holder, MarketError::CustodyMismatch);

        token_interface::transfer_checked(
            CpiContext::new(
                self.token_program.clone(),
                TransferChecked {
                    from: self.holder_wallet.clone(),
                    mint: self.payment_mint.clone(),
                    to: self.vault.clone(),
                    authority: self.holder_authority.clone(),
                },
            ),
            amount,
            self.decimals,
        )
        .map_err(rejected)?;

        self.vault_balance = self
            .vault_balance
            .checked_add(amount)
            .ok_or(MarketError::MathOverflow)?;
        Ok(())
    }

    fn pay_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.holder, MarketError::CustodyMismatch);

        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                TransferChecked {
                    from: self.vault.clone(),
                    mint: self.payment_mint.clone(),
                    to: self.holder_wallet.clone(),
                    authority: self.market.clone(),
                },
                self.signer_seeds,
            ),
            amount,
            self.decimals,
        )
        .map_err(rejected)?;

        self.vault_balance = self
            .vault_balance
            .checked_sub(amount)
            .ok_or(MarketError::MathOverflow)?;
        Ok(())
    }
}

fn rejected(err: Error) -> Error {
    msg!("Token program rejected the transfer: {}", err);
    error!(MarketError::ExternalTransfer)
}
