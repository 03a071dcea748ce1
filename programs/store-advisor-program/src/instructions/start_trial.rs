use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct StartTrial<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + Subscription::INIT_SPACE,
        seeds = [SUBSCRIPTION_SEED.as_bytes(), user.key().as_ref()],
        bump
    )]
    pub subscription: Account<'info, Subscription>,

    pub system_program: Program<'info, System>,
}

impl<'info> StartTrial<'info> {
    pub fn start_trial(&mut self, bumps: &StartTrialBumps) -> Result<()> {
        self.global_state.require_not_paused()?;

        let current_time = Clock::get()?.unix_timestamp;
        let trial_end = self.subscription.start_trial(
            self.user.key(),
            current_time,
            self.global_state.trial_duration_seconds,
            bumps.subscription,
        )?;

        let global_state = &mut self.global_state;
        global_state.total_trials_started = global_state
            .total_trials_started
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        msg!(
            "User {} started trial ending at {} ({} trials started)",
            self.user.key(),
            trial_end,
            global_state.total_trials_started
        );

        Ok(())
    }
}
