use anchor_lang::prelude::*;
use crate::{
    account_io,
    contexts::ManageViolationType,
    error::LedgerError,
    state::{ViolationType, ViolationTypeReported},
};

/// Count a report against a registry type.
///
/// The registry has its own administrator and is not consulted by
/// `report_violation`, so its counter moves only through this instruction,
/// when the registry admin reconciles reports filed under the type.
pub fn handler(ctx: Context<ManageViolationType>, type_id: u16) -> Result<()> {
    let type_info = ctx.accounts.violation_type.to_account_info();
    let type_registry = &mut ctx.accounts.type_registry;
    let clock = Clock::get()?;

    let mut violation_type: ViolationType = account_io::load(&type_info, LedgerError::InvalidViolationType)?;
    let report_count = violation_type.record_report(type_id, clock.unix_timestamp)?;
    account_io::store(&violation_type, &type_info)?;

    let sequence = type_registry.next_audit_sequence()?;
    emit!(ViolationTypeReported {
        sequence,
        type_id,
        report_count,
    });

    msg!("Violation type {} report count: {}", type_id, report_count);

    Ok(())
}
