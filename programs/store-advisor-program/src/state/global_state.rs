use crate::error::ErrorCode;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct GlobalState {
    pub authority: Pubkey, // Billing sync signer
    pub is_paused: bool,
    pub trial_duration_seconds: i64,
    pub total_trials_started: u64,
    pub bump: u8,
}

impl GlobalState {
    /// Gate for instructions a user may not run while the program is paused.
    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.is_paused, ErrorCode::ProgramPaused);
        Ok(())
    }
}
