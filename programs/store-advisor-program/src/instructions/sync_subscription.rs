use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

/// Billing provider snapshot relayed by the program authority.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SyncSubscriptionArgs {
    pub status: SubscriptionStatus,
    pub plan: String,
    pub trial_start: Option<i64>,
    pub trial_end: Option<i64>,
    pub ends_at: Option<i64>,
    pub source: String,
    pub advice_consumed: Option<bool>, // None keeps the stored flag
}

impl SyncSubscriptionArgs {
    pub fn validate(&self) -> Result<()> {
        require!(self.plan.len() <= MAX_PLAN_LENGTH, ErrorCode::PlanTooLong);
        require!(
            self.source.len() <= MAX_SOURCE_LENGTH,
            ErrorCode::SourceTooLong
        );
        validate_trial_window(self.trial_start, self.trial_end)
    }

    /// Writes this snapshot into `subscription` for `user`, initializing it on first sync.
    pub fn apply(
        self,
        subscription: &mut Subscription,
        user: Pubkey,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        self.validate()?;
        require!(user != Pubkey::default(), ErrorCode::UnauthorizedUser);

        // Initialize subscription if this is the first sync for the user
        if subscription.user == Pubkey::default() {
            subscription.user = user;
            subscription.advice_consumed = false;
            subscription.created_at = now;
            subscription.bump = bump;
        }
        require!(subscription.user == user, ErrorCode::UnauthorizedUser);

        subscription.status = self.status;
        subscription.plan = self.plan;
        subscription.trial_start = self.trial_start;
        subscription.trial_end = self.trial_end;
        subscription.ends_at = self.ends_at;
        subscription.source = self.source;
        if let Some(advice_consumed) = self.advice_consumed {
            subscription.advice_consumed = advice_consumed;
        }
        subscription.updated_at = now;

        Ok(())
    }
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct SyncSubscription<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Subscription::INIT_SPACE,
        seeds = [SUBSCRIPTION_SEED.as_bytes(), user.as_ref()],
        bump
    )]
    pub subscription: Account<'info, Subscription>,

    pub system_program: Program<'info, System>,
}

impl<'info> SyncSubscription<'info> {
    pub fn sync_subscription(
        &mut self,
        user: Pubkey,
        args: SyncSubscriptionArgs,
        bumps: &SyncSubscriptionBumps,
    ) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;
        let subscription = &mut self.subscription;

        args.apply(subscription, user, current_time, bumps.subscription)?;

        msg!(
            "Subscription for user {} synced: status {:?}, plan '{}', source '{}'",
            user,
            subscription.status,
            subscription.plan,
            subscription.source
        );

        Ok(())
    }
}
