use crate::{constants::*, entitlements::can_show_paywall, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

/// Read only. Checks whether the paywall cooldown has elapsed
#[derive(Accounts)]
pub struct CheckPaywall<'info> {
    pub user: Signer<'info>,

    /// Absent until the paywall is shown for the first time
    #[account(
        seeds = [PAYWALL_SEED.as_bytes(), user.key().as_ref()],
        bump,
        constraint = paywall_profile.user == user.key() @ ErrorCode::UnauthorizedUser
    )]
    pub paywall_profile: Option<Account<'info, PaywallProfile>>,
}

impl<'info> CheckPaywall<'info> {
    pub fn check_paywall(&self) -> Result<bool> {
        let current_time = Clock::get()?.unix_timestamp;
        let can_show = can_show_paywall(self.paywall_profile.as_deref(), current_time);

        match &self.paywall_profile {
            Some(profile) => msg!(
                "Paywall for user {}: {} (last shown: {:?}, shown today: {})",
                self.user.key(),
                if can_show { "ELIGIBLE" } else { "COOLDOWN" },
                profile.last_paywall_shown_at,
                profile.shows_today(current_time)
            ),
            None => msg!("Paywall never shown to user {}", self.user.key()),
        }

        Ok(can_show)
    }
}
