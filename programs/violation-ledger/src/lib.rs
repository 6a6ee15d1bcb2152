pub mod account_io;
pub mod constants;
pub mod contexts;
pub mod error;
pub mod fine;
pub mod instructions;
pub mod ledger;
pub mod registry;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::VIOLATION_KIND_COUNT;
pub use contexts::*;
pub use error::*;
pub use ledger::ViolationReport;
pub use state::*;

declare_id!("6oVDv4tDruHKUsyM1bNp3h5BmhnNeZLZgLsFM92Rvbf5");

/// Violation Ledger: on-chain "report, pay, process" registry
///
/// - Anyone may report a violation; its fine is computed once from the
///   base fine schedule, the severity surcharge and the repeat-offender flag
/// - Anyone may submit a payment; only the latest submission counts
/// - The administrator processes each violation exactly once, which settles
///   whether it was paid
/// - Authorized pausers can freeze every state-changing instruction
///
/// Records are append-only; every mutation emits a sequenced audit event.
#[program]
pub mod violation_ledger {
    use super::*;

    /// Initialize the ledger; the signer becomes administrator and first pauser
    pub fn initialize(
        ctx: Context<Initialize>,
        base_fines: Option<[u64; VIOLATION_KIND_COUNT]>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, base_fines)
    }

    /// Report a violation and return its id
    pub fn report_violation(
        ctx: Context<ReportViolation>,
        license_plate: [u8; 32],
        kind: u8,
        severity: u8,
        is_repeat_offender: bool,
        location: String,
    ) -> Result<u64> {
        instructions::report_violation::handler(
            ctx,
            license_plate,
            kind,
            severity,
            is_repeat_offender,
            location,
        )
    }

    /// Submit a payment for a violation (validated at processing time)
    pub fn submit_payment(
        ctx: Context<SubmitPayment>,
        violation_id: u64,
        payment_reference: [u8; 32],
        amount: u64,
    ) -> Result<()> {
        instructions::submit_payment::handler(ctx, violation_id, payment_reference, amount)
    }

    /// Settle a violation against its latest payment (admin-only, one-shot)
    pub fn process_payment(ctx: Context<ProcessPayment>, violation_id: u64) -> Result<()> {
        instructions::process_payment::handler(ctx, violation_id)
    }

    /// Change the base fine of a kind for future reports (admin-only)
    pub fn update_violation_fine(ctx: Context<ManageLedger>, kind: u8, new_amount: u64) -> Result<()> {
        instructions::update_violation_fine::handler(ctx, kind, new_amount)
    }

    /// Grant pause rights (admin-only)
    pub fn add_pauser(ctx: Context<AddPauser>, pauser: Pubkey) -> Result<()> {
        instructions::add_pauser::handler(ctx, pauser)
    }

    /// Revoke pause rights (admin-only)
    pub fn remove_pauser(ctx: Context<ManageLedger>, pauser: Pubkey) -> Result<()> {
        instructions::remove_pauser::handler(ctx, pauser)
    }

    /// Flip the global pause switch (any pauser)
    pub fn toggle_pause(ctx: Context<ManageLedger>) -> Result<()> {
        instructions::toggle_pause::handler(ctx)
    }

    /// Send accumulated payments to the administrator (admin-only)
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    pub fn get_violation_info(ctx: Context<ReadViolation>, violation_id: u64) -> Result<ViolationInfo> {
        instructions::queries::get_violation_info(ctx, violation_id)
    }

    pub fn get_payment_status(ctx: Context<ReadViolation>, violation_id: u64) -> Result<PaymentStatus> {
        instructions::queries::get_payment_status(ctx, violation_id)
    }

    /// First page of a reporter's violation ids (the full list for most reporters)
    pub fn get_reporter_violations(ctx: Context<ReadReporterViolations>, reporter: Pubkey) -> Result<Vec<u64>> {
        instructions::queries::get_reporter_violations(ctx, reporter, 0)
    }

    /// A reporter's violation ids starting at `offset`
    pub fn get_reporter_violations_page(
        ctx: Context<ReadReporterViolations>,
        reporter: Pubkey,
        offset: u32,
    ) -> Result<Vec<u64>> {
        instructions::queries::get_reporter_violations(ctx, reporter, offset)
    }

    pub fn get_base_fine(ctx: Context<ReadLedger>, kind: u8) -> Result<u64> {
        instructions::queries::get_base_fine(ctx, kind)
    }

    pub fn get_total_violations(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::queries::get_total_violations(ctx)
    }

    pub fn is_pauser(ctx: Context<ReadLedger>, identity: Pubkey) -> Result<bool> {
        instructions::queries::is_pauser(ctx, identity)
    }

    pub fn pauser_count(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::queries::pauser_count(ctx)
    }

    /// Initialize the dynamic violation type registry
    pub fn initialize_type_registry(ctx: Context<InitializeTypeRegistry>) -> Result<()> {
        instructions::initialize_type_registry::handler(ctx)
    }

    /// Register a new violation type (registry admin-only)
    pub fn add_violation_type(
        ctx: Context<AddViolationType>,
        type_id: u16,
        name: String,
        description: String,
        base_fine: u64,
    ) -> Result<()> {
        instructions::add_violation_type::handler(ctx, type_id, name, description, base_fine)
    }

    pub fn deactivate_violation_type(ctx: Context<ManageViolationType>, type_id: u16) -> Result<()> {
        instructions::set_violation_type_status::deactivate(ctx, type_id)
    }

    pub fn reactivate_violation_type(ctx: Context<ManageViolationType>, type_id: u16) -> Result<()> {
        instructions::set_violation_type_status::reactivate(ctx, type_id)
    }

    pub fn update_type_fine(ctx: Context<ManageViolationType>, type_id: u16, new_fine: u64) -> Result<()> {
        instructions::update_type_fine::handler(ctx, type_id, new_fine)
    }

    /// Count a report against an active type (registry admin-only)
    pub fn record_type_report(ctx: Context<ManageViolationType>, type_id: u16) -> Result<()> {
        instructions::record_type_report::handler(ctx, type_id)
    }

    pub fn get_violation_type(ctx: Context<ReadViolationType>, type_id: u16) -> Result<ViolationTypeInfo> {
        instructions::queries::get_violation_type(ctx, type_id)
    }
}
