use anchor_lang::prelude::*;

use crate::constants::*;

// ============================================================================
// LEDGER STATE - Global configuration and treasury account
// ============================================================================

#[account]
#[derive(InitSpace, Default)]
pub struct LedgerState {
    /// Administrator who owns the fine schedule and pauser set
    pub admin: Pubkey,

    /// Global pause switch for state-changing instructions
    pub paused: bool,

    /// Highest violation id allocated so far (0 = none)
    pub violation_count: u64,

    /// Base fine per kind, indexed by `kind - 1`
    pub base_fines: [u64; VIOLATION_KIND_COUNT],

    /// Identities allowed to toggle the pause switch
    #[max_len(INITIAL_PAUSER_SLOTS)]
    pub pausers: Vec<Pubkey>,

    /// Sequence number of the last emitted audit event
    pub audit_sequence: u64,

    /// Timestamp when the ledger was initialized
    pub created_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl LedgerState {
    /// Account size (discriminator included) holding `pauser_count` pausers.
    pub const fn space_for(pauser_count: usize) -> usize {
        let extra = pauser_count.saturating_sub(INITIAL_PAUSER_SLOTS);
        8 + Self::INIT_SPACE + extra * 32
    }
}

// ============================================================================
// VIOLATION - One record per report, append-only
// ============================================================================

#[account]
#[derive(InitSpace, Default)]
pub struct Violation {
    /// Sequential id, starting at 1
    pub id: u64,

    /// Account that submitted the report
    pub reporter: Pubkey,

    /// Opaque license plate commitment (not interpreted on-chain)
    pub license_plate: [u8; 32],

    /// Kind from the static catalog (1..=5)
    pub kind: u8,

    /// Percentage surcharge applied to the base fine
    pub severity: u8,

    pub is_repeat_offender: bool,

    #[max_len(MAX_LOCATION_LEN)]
    pub location: String,

    pub created_at: i64,

    /// Fine frozen at creation time
    pub fine_amount: u64,

    pub is_paid: bool,

    /// Terminal flag, set exactly once by the administrator
    pub is_processed: bool,

    /// Reference supplied with the latest payment
    pub payment_reference: [u8; 32],

    /// Latest submitted payment (last write wins)
    pub payment_submitted_amount: u64,

    pub payment_submitted_at: i64,

    pub payment_verified: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

// ============================================================================
// REPORTER INDEX - Violation ids submitted by one reporter
// ============================================================================

/// Grows by one id per report; see `ReporterIndex::space_for`.
#[account]
#[derive(Default)]
pub struct ReporterIndex {
    pub reporter: Pubkey,

    pub violation_ids: Vec<u64>,

    pub bump: u8,
}

impl ReporterIndex {
    /// Account size (discriminator included) holding `id_count` violation ids.
    pub const fn space_for(id_count: usize) -> usize {
        8 + 32 + 4 + id_count * 8 + 1
    }
}

// ============================================================================
// TYPE REGISTRY - Dynamic violation type catalog
// ============================================================================

#[account]
#[derive(InitSpace, Default)]
pub struct TypeRegistry {
    /// Administrator of the type catalog (independent of the ledger admin)
    pub admin: Pubkey,

    /// Number of registered types
    pub type_count: u64,

    /// Sequence number of the last emitted registry event
    pub audit_sequence: u64,

    pub bump: u8,
}

#[account]
#[derive(InitSpace, Default)]
pub struct ViolationType {
    pub type_id: u16,

    #[max_len(MAX_TYPE_NAME_LEN)]
    pub name: String,

    #[max_len(MAX_TYPE_DESCRIPTION_LEN)]
    pub description: String,

    pub base_fine: u64,

    pub is_active: bool,

    /// Reports recorded against this type
    pub report_count: u64,

    pub created_at: i64,

    pub updated_at: i64,

    pub bump: u8,
}

// ============================================================================
// VIEWS - Return data for read-only instructions
// ============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ViolationInfo {
    pub id: u64,
    pub reporter: Pubkey,
    pub license_plate: [u8; 32],
    pub kind: u8,
    pub severity: u8,
    pub is_repeat_offender: bool,
    pub location: String,
    pub created_at: i64,
    pub fine_amount: u64,
    pub is_paid: bool,
    pub is_processed: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PaymentStatus {
    pub is_paid: bool,
    pub is_processed: bool,
    pub fine_amount: u64,
    pub submitted_amount: u64,
    pub submitted_at: i64,
    pub verified: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ViolationTypeInfo {
    pub type_id: u16,
    pub name: String,
    pub description: String,
    pub base_fine: u64,
    pub is_active: bool,
    pub report_count: u64,
}

// ============================================================================
// EVENTS - Sequenced audit trail for off-chain indexing
// ============================================================================

#[event]
pub struct ViolationReported {
    pub sequence: u64,
    pub violation_id: u64,
    pub reporter: Pubkey,
    pub location: String,
    pub fine_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PaymentSubmitted {
    pub sequence: u64,
    pub violation_id: u64,
    pub payer: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct ViolationProcessed {
    pub sequence: u64,
    pub violation_id: u64,
    pub is_paid: bool,
    pub timestamp: i64,
}

#[event]
pub struct FineAmountUpdated {
    pub sequence: u64,
    pub kind: u8,
    pub old_amount: u64,
    pub new_amount: u64,
}

#[event]
pub struct PauserAdded {
    pub sequence: u64,
    pub pauser: Pubkey,
    pub pauser_count: u64,
}

#[event]
pub struct PauserRemoved {
    pub sequence: u64,
    pub pauser: Pubkey,
    pub pauser_count: u64,
}

#[event]
pub struct PauseToggled {
    pub sequence: u64,
    pub by: Pubkey,
    pub paused: bool,
}

#[event]
pub struct FundsWithdrawn {
    pub sequence: u64,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ViolationTypeAdded {
    pub sequence: u64,
    pub type_id: u16,
    pub name: String,
    pub base_fine: u64,
}

#[event]
pub struct ViolationTypeStatusChanged {
    pub sequence: u64,
    pub type_id: u16,
    pub is_active: bool,
}

#[event]
pub struct ViolationTypeFineUpdated {
    pub sequence: u64,
    pub type_id: u16,
    pub old_fine: u64,
    pub new_fine: u64,
}

#[event]
pub struct ViolationTypeReported {
    pub sequence: u64,
    pub type_id: u16,
    pub report_count: u64,
}
