use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Validation errors
    #[msg("Plan identifier is too long")]
    PlanTooLong,
    #[msg("Subscription source is too long")]
    SourceTooLong,
    #[msg("Trial end must be later than trial start")]
    InvalidTrialWindow,
    #[msg("Invalid trial duration")]
    InvalidTrialDuration,

    // Authorization errors
    #[msg("Unauthorized user")]
    UnauthorizedUser,
    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,

    // Subscription errors
    #[msg("Subscription already exists")]
    SubscriptionAlreadyExists,
    #[msg("Scan not permitted by current entitlements")]
    ScanNotPermitted,

    // Protocol errors
    #[msg("Program is paused")]
    ProgramPaused,

    // Math errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
