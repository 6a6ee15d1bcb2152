//! Read-only instructions. None of these are gated by the pause switch.

use anchor_lang::prelude::*;
use crate::{
    account_io,
    contexts::{ReadLedger, ReadReporterViolations, ReadViolation, ReadViolationType},
    error::LedgerError,
    state::{PaymentStatus, ReporterIndex, Violation, ViolationInfo, ViolationType, ViolationTypeInfo},
};

pub fn get_violation_info(ctx: Context<ReadViolation>, violation_id: u64) -> Result<ViolationInfo> {
    let violation: Violation = account_io::load(&ctx.accounts.violation, LedgerError::InvalidViolationId)?;
    Ok(ctx.accounts.ledger.violation_info(&violation, violation_id)?)
}

pub fn get_payment_status(ctx: Context<ReadViolation>, violation_id: u64) -> Result<PaymentStatus> {
    let violation: Violation = account_io::load(&ctx.accounts.violation, LedgerError::InvalidViolationId)?;
    Ok(ctx.accounts.ledger.payment_status(&violation, violation_id)?)
}

/// Reporters without an index account have filed nothing yet.
pub fn get_reporter_violations(
    ctx: Context<ReadReporterViolations>,
    _reporter: Pubkey,
    offset: u32,
) -> Result<Vec<u64>> {
    let index: Option<ReporterIndex> = account_io::load_optional(&ctx.accounts.reporter_index)?;
    Ok(index.map(|index| index.page(offset)).unwrap_or_default())
}

pub fn get_base_fine(ctx: Context<ReadLedger>, kind: u8) -> Result<u64> {
    Ok(ctx.accounts.ledger.base_fine(kind)?)
}

pub fn get_total_violations(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.ledger.violation_count)
}

pub fn is_pauser(ctx: Context<ReadLedger>, identity: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.ledger.is_pauser(&identity))
}

pub fn pauser_count(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.ledger.pauser_count())
}

pub fn get_violation_type(ctx: Context<ReadViolationType>, type_id: u16) -> Result<ViolationTypeInfo> {
    let violation_type: ViolationType =
        account_io::load(&ctx.accounts.violation_type, LedgerError::InvalidViolationType)?;
    Ok(violation_type.info(type_id)?)
}
