pub mod constants;
pub mod entitlements;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use entitlements::*;
pub use instructions::*;
pub use state::*;

declare_id!("7qtji8T6ish4Ce3qkRL2ATusEAYVSGbRVpkiis2BeaY1");

#[program]
pub mod store_advisor_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, trial_duration_seconds: Option<i64>) -> Result<()> {
        ctx.accounts.initialize(trial_duration_seconds, &ctx.bumps)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        trial_duration_seconds: Option<i64>,
        is_paused: Option<bool>,
    ) -> Result<()> {
        ctx.accounts.update_config(trial_duration_seconds, is_paused)
    }

    pub fn start_trial(ctx: Context<StartTrial>) -> Result<()> {
        ctx.accounts.start_trial(&ctx.bumps)
    }

    pub fn sync_subscription(
        ctx: Context<SyncSubscription>,
        user: Pubkey,
        args: SyncSubscriptionArgs,
    ) -> Result<()> {
        ctx.accounts.sync_subscription(user, args, &ctx.bumps)
    }

    pub fn consume_advice(ctx: Context<ConsumeAdvice>) -> Result<()> {
        ctx.accounts.consume_advice()
    }

    pub fn check_entitlements(ctx: Context<CheckEntitlements>) -> Result<Entitlements> {
        ctx.accounts.check_entitlements()
    }

    pub fn check_paywall(ctx: Context<CheckPaywall>) -> Result<bool> {
        ctx.accounts.check_paywall()
    }

    pub fn record_paywall_shown(ctx: Context<RecordPaywallShown>) -> Result<()> {
        ctx.accounts.record_paywall_shown(&ctx.bumps)
    }
}
