use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RecordPaywallShown<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + PaywallProfile::INIT_SPACE,
        seeds = [PAYWALL_SEED.as_bytes(), user.key().as_ref()],
        bump
    )]
    pub paywall_profile: Account<'info, PaywallProfile>,

    pub system_program: Program<'info, System>,
}

impl<'info> RecordPaywallShown<'info> {
    pub fn record_paywall_shown(&mut self, bumps: &RecordPaywallShownBumps) -> Result<()> {
        self.global_state.require_not_paused()?;

        let current_time = Clock::get()?.unix_timestamp;
        let paywall_profile = &mut self.paywall_profile;
        let cooldown_elapsed = paywall_profile.record_presentation(
            self.user.key(),
            current_time,
            bumps.paywall_profile,
        )?;

        if !cooldown_elapsed {
            msg!(
                "Paywall shown to user {} inside the {}s cooldown",
                self.user.key(),
                PAYWALL_COOLDOWN_SECONDS
            );
        }

        msg!(
            "Paywall shown to user {} at {} ({} today)",
            self.user.key(),
            current_time,
            paywall_profile.paywall_show_count_today
        );

        Ok(())
    }
}
