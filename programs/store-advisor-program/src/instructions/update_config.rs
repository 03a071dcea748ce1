use crate::{constants::*, error::ErrorCode, instructions::validate_trial_duration, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_config(
        &mut self,
        trial_duration_seconds: Option<i64>,
        is_paused: Option<bool>,
    ) -> Result<()> {
        let global_state = &mut self.global_state;

        if let Some(trial_duration_seconds) = trial_duration_seconds {
            validate_trial_duration(trial_duration_seconds)?;
            global_state.trial_duration_seconds = trial_duration_seconds;
            msg!("Trial duration set to {} seconds", trial_duration_seconds);
        }

        if let Some(is_paused) = is_paused {
            global_state.is_paused = is_paused;
            msg!("Program {}", if is_paused { "PAUSED" } else { "RESUMED" });
        }

        Ok(())
    }
}
