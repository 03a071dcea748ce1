use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ConsumeAdvice<'info> {
    pub user: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [SUBSCRIPTION_SEED.as_bytes(), user.key().as_ref()],
        bump = subscription.bump,
        constraint = subscription.user == user.key() @ ErrorCode::UnauthorizedUser
    )]
    pub subscription: Account<'info, Subscription>,
}

impl<'info> ConsumeAdvice<'info> {
    pub fn consume_advice(&mut self) -> Result<()> {
        self.global_state.require_not_paused()?;

        let current_time = Clock::get()?.unix_timestamp;
        let consumed = self.subscription.consume_advice(current_time)?;

        if consumed {
            msg!(
                "User {} consumed trial advice (trial ends at {:?})",
                self.user.key(),
                self.subscription.trial_end
            );
        } else {
            // Paid plans have unlimited advice
            msg!(
                "User {} used advice on paid plan '{}'",
                self.user.key(),
                self.subscription.plan
            );
        }

        Ok(())
    }
}
