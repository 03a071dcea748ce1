use crate::{constants::*, entitlements::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

/// Read only. Reports what a user may currently do
#[derive(Accounts)]
pub struct CheckEntitlements<'info> {
    /// The user whose entitlements we're checking
    pub user: Signer<'info>,

    /// User's subscription account (optional - may not exist if user never started a trial)
    #[account(
        seeds = [SUBSCRIPTION_SEED.as_bytes(), user.key().as_ref()],
        bump,
        constraint = subscription.user == user.key() @ ErrorCode::UnauthorizedUser
    )]
    pub subscription: Option<Account<'info, Subscription>>,
}

impl<'info> CheckEntitlements<'info> {
    pub fn check_entitlements(&self) -> Result<Entitlements> {
        let current_time = Clock::get()?.unix_timestamp;
        let entitlements = evaluate(self.subscription.as_deref(), current_time);

        if let Some(subscription) = &self.subscription {
            msg!(
                "User {} subscription {:?} plan '{}': {}",
                self.user.key(),
                subscription.status,
                subscription.plan,
                if entitlements.is_paid { "PAID" } else { "UNPAID" }
            );
        } else {
            msg!("User {} has NO subscription", self.user.key());
        }

        msg!(
            "Entitlements for {}: scan={} coach={} full_issues={} rescan={} trial_active={} advice_remaining={}",
            self.user.key(),
            entitlements.can_scan,
            entitlements.can_use_coach,
            entitlements.can_see_full_issues,
            entitlements.can_rescan,
            entitlements.is_trial_active,
            entitlements.has_advice_remaining
        );

        Ok(entitlements)
    }
}
