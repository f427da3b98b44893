use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::state::{Config, SwapPolicy};

#[event]
pub struct ConfigUpdated {
    pub resolver: Pubkey,
    pub hook_authority: Pubkey,
    pub swap_policy: SwapPolicy,
    pub paused: bool,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = admin @ MarketError::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    /// Patches the fields that are `Some`; the rest keep their value.
    pub fn update_config(
        &mut self,
        resolver: Option<Pubkey>,
        hook_authority: Option<Pubkey>,
        swap_policy: Option<SwapPolicy>,
        paused: Option<bool>,
    ) -> Result<()> {
        let config = &mut self.config;

        if let Some(resolver) = resolver {
            config.resolver = resolver;
        }
        if let Some(hook_authority) = hook_authority {
            config.hook_authority = hook_authority;
        }
        if let Some(swap_policy) = swap_policy {
            config.swap_policy = swap_policy;
        }
        if let Some(paused) = paused {
            config.paused = paused;
        }

        msg!("Config updated by {}", self.admin.key());

        emit!(ConfigUpdated {
            resolver: config.resolver,
            hook_authority: config.hook_authority,
            swap_policy: config.swap_policy,
            paused: config.paused,
        });

        Ok(())
    }
}
