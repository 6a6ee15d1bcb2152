use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Caller is not the administrator")]
    Unauthorized,

    #[msg("Caller is not an authorized pauser")]
    NotAPauser,

    #[msg("Ledger is paused")]
    ContractPaused,

    #[msg("Violation id does not reference an existing violation")]
    InvalidViolationId,

    #[msg("Violation type is outside the valid catalog")]
    InvalidViolationType,

    #[msg("Location is required")]
    LocationRequired,

    #[msg("Location exceeds the maximum length")]
    LocationTooLong,

    #[msg("Violation has already been paid")]
    AlreadyPaid,

    #[msg("Violation has already been processed")]
    AlreadyProcessed,

    #[msg("Identity is already a pauser")]
    AlreadyPauser,

    #[msg("Amount must be greater than zero")]
    AmountMustBePositive,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Violation type name is required")]
    TypeNameRequired,

    #[msg("Violation type name exceeds the maximum length")]
    TypeNameTooLong,

    #[msg("Violation type description exceeds the maximum length")]
    DescriptionTooLong,

    #[msg("Violation type is not active")]
    TypeInactive,

    #[msg("Violation type is already active")]
    TypeAlreadyActive,

    #[msg("Violation type is already inactive")]
    TypeAlreadyInactive,
}
