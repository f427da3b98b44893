//! Protocol Initialization
//!
//! Sets up the global configuration. Called once during deployment.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::state::{Config, SwapPolicy};

#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub resolver: Pubkey,
    pub hook_authority: Pubkey,
    pub payment_mint: Pubkey,
    pub swap_policy: SwapPolicy,
}

/// Accounts required for protocol initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Protocol administrator (becomes the admin)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration account (created)
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// Payment token mint (e.g., USDC)
    pub payment_mint: InterfaceAccount<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        resolver: Pubkey,
        hook_authority: Pubkey,
        swap_policy: SwapPolicy,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        self.config.set_inner(Config {
            admin: self.admin.key(),
            resolver,
            hook_authority,
            payment_mint: self.payment_mint.key(),
            swap_policy,
            market_count: 0,
            bump: bumps.config,
            paused: false,
        });

        msg!("Protocol initialized!");
        msg!("Admin: {}", self.admin.key());
        msg!("Resolver: {}", resolver);
        msg!("Swap policy: {:?}", swap_policy);

        emit!(ProtocolInitialized {
            admin: self.admin.key(),
            resolver,
            hook_authority,
            payment_mint: self.payment_mint.key(),
            swap_policy,
        });

        Ok(())
    }
}
