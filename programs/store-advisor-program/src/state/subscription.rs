use crate::{constants::*, entitlements::evaluate, error::ErrorCode};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Trialing,
    Active,
    PastDue,
    Canceled,
}

impl anchor_lang::Space for SubscriptionStatus {
    const INIT_SPACE: usize = 1; // 1 byte for enum discriminator
}

#[account]
#[derive(InitSpace)]
pub struct Subscription {
    pub user: Pubkey,
    pub status: SubscriptionStatus,
    #[max_len(MAX_PLAN_LENGTH)]
    pub plan: String,
    pub trial_start: Option<i64>,
    pub trial_end: Option<i64>,
    pub advice_consumed: bool, // Single trial advice action used
    pub ends_at: Option<i64>,
    #[max_len(MAX_SOURCE_LENGTH)]
    pub source: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl Subscription {
    pub fn is_lifetime(&self) -> bool {
        self.status == SubscriptionStatus::Active && self.plan == LIFETIME_PLAN
    }

    /// Active subscription on one of the paid plans.
    pub fn is_paid(&self) -> bool {
        self.status == SubscriptionStatus::Active && PAID_PLANS.contains(&self.plan.as_str())
    }

    /// A trial with no recorded end counts as expired.
    pub fn is_trial_active(&self, now: i64) -> bool {
        self.status == SubscriptionStatus::Trialing
            && self.trial_end.is_some_and(|trial_end| now < trial_end)
    }

    pub fn has_advice_remaining(&self) -> bool {
        !self.advice_consumed
    }

    /// Opens the one trial a user gets, running `[now, now + trial_duration_seconds)`.
    /// Returns the trial end.
    pub fn start_trial(
        &mut self,
        user: Pubkey,
        now: i64,
        trial_duration_seconds: i64,
        bump: u8,
    ) -> Result<i64> {
        require!(user != Pubkey::default(), ErrorCode::UnauthorizedUser);
        require!(
            self.user == Pubkey::default(),
            ErrorCode::SubscriptionAlreadyExists
        );

        let trial_end = now
            .checked_add(trial_duration_seconds)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        *self = Subscription {
            user,
            status: SubscriptionStatus::Trialing,
            plan: TRIAL_PLAN.to_string(),
            trial_start: Some(now),
            trial_end: Some(trial_end),
            advice_consumed: false,
            ends_at: None,
            source: SIGNUP_SOURCE.to_string(),
            created_at: now,
            updated_at: now,
            bump,
        };

        Ok(trial_end)
    }

    /// Spends the advice action. Only trial users are marked; paid plans are unlimited.
    /// Returns whether the trial advice was consumed.
    pub fn consume_advice(&mut self, now: i64) -> Result<bool> {
        let entitlements = evaluate(Some(&*self), now);
        require!(entitlements.can_scan, ErrorCode::ScanNotPermitted);

        if entitlements.is_paid || entitlements.is_lifetime {
            return Ok(false);
        }

        self.advice_consumed = true;
        self.updated_at = now;
        Ok(true)
    }
}

/// Rejects windows whose end is not strictly after their start.
pub fn validate_trial_window(trial_start: Option<i64>, trial_end: Option<i64>) -> Result<()> {
    if let (Some(start), Some(end)) = (trial_start, trial_end) {
        require!(end > start, ErrorCode::InvalidTrialWindow);
    }
    Ok(())
}
