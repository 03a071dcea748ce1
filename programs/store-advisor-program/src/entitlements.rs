use crate::state::*;
use anchor_lang::prelude::*;

/// Capabilities granted to a user at a point in time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Entitlements {
    pub is_trial_active: bool,
    pub has_advice_remaining: bool,
    pub is_paid: bool,
    pub is_lifetime: bool,
    pub trial_ends_at: Option<i64>, // Only reported while the trial is active
    pub can_scan: bool,
    pub can_use_coach: bool,
    pub can_see_full_issues: bool,
    pub can_rescan: bool,
}

/// Classifies a subscription snapshot at `now`.
///
/// Total and side-effect free. A missing subscription maps to the most
/// restrictive set, and a trial without a recorded end is treated as expired.
pub fn evaluate(subscription: Option<&Subscription>, now: i64) -> Entitlements {
    let Some(subscription) = subscription else {
        return Entitlements::default();
    };

    let is_lifetime = subscription.is_lifetime();
    let is_paid = subscription.is_paid();

    if is_lifetime || is_paid {
        return Entitlements {
            is_trial_active: false,
            has_advice_remaining: true,
            is_paid,
            is_lifetime,
            trial_ends_at: None,
            can_scan: true,
            can_use_coach: true,
            can_see_full_issues: true,
            can_rescan: true,
        };
    }

    let is_trial_active = subscription.is_trial_active(now);
    let has_advice_remaining = subscription.has_advice_remaining();

    Entitlements {
        is_trial_active,
        has_advice_remaining,
        is_paid: false,
        is_lifetime: false,
        trial_ends_at: if is_trial_active {
            subscription.trial_end
        } else {
            None
        },
        can_scan: is_trial_active && has_advice_remaining,
        can_use_coach: false,
        can_see_full_issues: false,
        can_rescan: false,
    }
}

/// Whether the paywall may be presented at `now`. A user never shown one is always eligible.
pub fn can_show_paywall(profile: Option<&PaywallProfile>, now: i64) -> bool {
    profile.map_or(true, |profile| profile.can_show(now))
}
