pub mod check_entitlements;
pub mod check_paywall;
pub mod consume_advice;
pub mod initialize;
pub mod record_paywall_shown;
pub mod start_trial;
pub mod sync_subscription;
pub mod update_config;

pub use check_entitlements::*;
pub use check_paywall::*;
pub use consume_advice::*;
pub use initialize::*;
pub use record_paywall_shown::*;
pub use start_trial::*;
pub use sync_subscription::*;
pub use update_config::*;
