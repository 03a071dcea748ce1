use anchor_lang::prelude::*;

// Global seeds
pub const GLOBAL_STATE_SEED: &str = "global_state";

// User related seeds
pub const SUBSCRIPTION_SEED: &str = "subscription";
pub const PAYWALL_SEED: &str = "paywall";

// Plans that unlock the full capability set while the subscription is active
pub const LIFETIME_PLAN: &str = "lifetime";
pub const PAID_PLANS: [&str; 6] = ["create", "starter", "pro", "elite", "business", LIFETIME_PLAN];

// Values written by start_trial
pub const TRIAL_PLAN: &str = "trial";
pub const SIGNUP_SOURCE: &str = "signup";

// Maximum string lengths
pub const MAX_PLAN_LENGTH: usize = 32;
pub const MAX_SOURCE_LENGTH: usize = 32;

// Time
pub const SECONDS_PER_DAY: i64 = 86400;
#[constant]
pub const PAYWALL_COOLDOWN_SECONDS: i64 = 86400; // 24 hours

// Program configuration
pub const DEFAULT_TRIAL_DURATION_SECONDS: i64 = 3 * SECONDS_PER_DAY;
pub const MAX_TRIAL_DURATION_SECONDS: i64 = 90 * SECONDS_PER_DAY;
