pub mod global_state;
pub mod paywall_profile;
pub mod subscription;

pub use global_state::*;
pub use paywall_profile::*;
pub use subscription::*;
