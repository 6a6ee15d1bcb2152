use anchor_lang::prelude::*;
use crate::{
    account_io,
    constants::REPORTER_SEED,
    contexts::ReportViolation,
    ledger::ViolationReport,
    state::{ReporterIndex, ViolationReported},
};

pub fn handler(
    ctx: Context<ReportViolation>,
    license_plate: [u8; 32],
    kind: u8,
    severity: u8,
    is_repeat_offender: bool,
    location: String,
) -> Result<u64> {
    let reporter = ctx.accounts.reporter.key();
    let index_info = ctx.accounts.reporter_index.to_account_info();
    let index_bump = ctx.bumps.reporter_index;
    let ledger = &mut ctx.accounts.ledger;
    let violation = &mut ctx.accounts.violation;
    let clock = Clock::get()?;

    let mut reporter_index: ReporterIndex = account_io::load_optional(&index_info)?.unwrap_or_default();
    reporter_index.bind(reporter, index_bump);

    let violation_id = ledger.report_violation(
        reporter,
        ViolationReport {
            license_plate,
            kind,
            severity,
            is_repeat_offender,
            location,
        },
        violation,
        &mut reporter_index,
        clock.unix_timestamp,
    )?;
    violation.bump = ctx.bumps.violation;

    account_io::ensure_space(
        &index_info,
        &ctx.accounts.reporter.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        ReporterIndex::space_for(reporter_index.violation_ids.len()),
        &[REPORTER_SEED, reporter.as_ref(), &[index_bump]],
    )?;
    account_io::store(&reporter_index, &index_info)?;

    let sequence = ledger.next_audit_sequence()?;
    emit!(ViolationReported {
        sequence,
        violation_id,
        reporter,
        location: violation.location.clone(),
        fine_amount: violation.fine_amount,
        timestamp: clock.unix_timestamp,
    });

    msg!("🚨 Violation #{} reported", violation_id);
    msg!("   Kind: {} Severity: {} Repeat: {}", kind, severity, is_repeat_offender);
    msg!("   Fine: {}", violation.fine_amount);
    msg!("   Reporter total: {}", reporter_index.violation_ids.len());

    Ok(violation_id)
}
