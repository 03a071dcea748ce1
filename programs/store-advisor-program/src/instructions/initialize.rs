use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + GlobalState::INIT_SPACE,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        trial_duration_seconds: Option<i64>,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        let trial_duration_seconds =
            trial_duration_seconds.unwrap_or(DEFAULT_TRIAL_DURATION_SECONDS);
        validate_trial_duration(trial_duration_seconds)?;

        let global_state = &mut self.global_state;

        global_state.authority = self.authority.key();
        global_state.is_paused = false;
        global_state.trial_duration_seconds = trial_duration_seconds;
        global_state.total_trials_started = 0;
        global_state.bump = bumps.global_state;

        msg!(
            "Store advisor initialized by authority: {}",
            self.authority.key()
        );
        msg!(
            "Trial duration: {} seconds ({} days)",
            trial_duration_seconds,
            trial_duration_seconds / SECONDS_PER_DAY
        );

        Ok(())
    }
}

pub(crate) fn validate_trial_duration(trial_duration_seconds: i64) -> Result<()> {
    require!(
        trial_duration_seconds > 0 && trial_duration_seconds <= MAX_TRIAL_DURATION_SECONDS,
        ErrorCode::InvalidTrialDuration
    );
    Ok(())
}
