use anchor_lang::prelude::*;
use crate::{
    account_io,
    contexts::ProcessPayment,
    error::LedgerError,
    state::{Violation, ViolationProcessed},
};

pub fn handler(ctx: Context<ProcessPayment>, violation_id: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let violation_info = ctx.accounts.violation.to_account_info();
    let ledger = &mut ctx.accounts.ledger;
    let clock = Clock::get()?;

    ledger.ensure_admin(&admin)?;
    ledger.ensure_not_paused()?;
    let mut violation: Violation = account_io::load(&violation_info, LedgerError::InvalidViolationId)?;

    let is_paid = ledger.process_payment(&admin, &mut violation, violation_id)?;
    account_io::store(&violation, &violation_info)?;

    let sequence = ledger.next_audit_sequence()?;
    emit!(ViolationProcessed {
        sequence,
        violation_id,
        is_paid,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "✅ Violation #{} processed: {} (submitted {} / fine {})",
        violation_id,
        if is_paid { "paid" } else { "unpaid" },
        violation.payment_submitted_amount,
        violation.fine_amount
    );

    Ok(())
}
