// ============================================================================
// SEEDS FOR PDA DERIVATION
// ============================================================================

pub const LEDGER_SEED: &[u8] = b"ledger";

pub const VIOLATION_SEED: &[u8] = b"violation";

pub const REPORTER_SEED: &[u8] = b"reporter";

pub const TYPE_REGISTRY_SEED: &[u8] = b"type_registry";

pub const VIOLATION_TYPE_SEED: &[u8] = b"violation_type";

// ============================================================================
// VIOLATION KIND CATALOG
// ============================================================================

/// Number of kinds in the static catalog (kinds are 1-based).
pub const VIOLATION_KIND_COUNT: usize = 5;

pub const KIND_SPEEDING: u8 = 1;
pub const KIND_ILLEGAL_PARKING: u8 = 2;
pub const KIND_RED_LIGHT: u8 = 3;
pub const KIND_NO_SEATBELT: u8 = 4;
pub const KIND_RECKLESS_DRIVING: u8 = 5;

/// Default base fines in lamports, indexed by `kind - 1`.
pub const DEFAULT_BASE_FINES: [u64; VIOLATION_KIND_COUNT] = [
    100_000_000, // speeding
    50_000_000,  // illegal parking
    200_000_000, // red light
    75_000_000,  // no seatbelt
    150_000_000, // reckless driving
];

/// Severity is a percentage surcharge on top of the base fine.
pub const SEVERITY_BASE: u64 = 100;

/// Repeat offenders pay this multiple of the severity-adjusted fine.
pub const REPEAT_OFFENDER_MULTIPLIER: u64 = 2;

// ============================================================================
// ACCOUNT SIZE LIMITS
// ============================================================================

pub const MAX_LOCATION_LEN: usize = 64;

/// Pauser slots allocated with the ledger; each further pauser grows the account
pub const INITIAL_PAUSER_SLOTS: usize = 1;

/// Violation ids returned by one reporter query (return data is capped at 1 KiB)
pub const MAX_REPORTER_IDS_PER_QUERY: usize = 100;

pub const MAX_TYPE_NAME_LEN: usize = 32;

pub const MAX_TYPE_DESCRIPTION_LEN: usize = 128;
