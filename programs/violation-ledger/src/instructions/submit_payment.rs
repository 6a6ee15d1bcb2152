use anchor_lang::{prelude::*, system_program};
use crate::{
    account_io,
    contexts::SubmitPayment,
    error::LedgerError,
    state::{PaymentSubmitted, Violation},
};

/// Record a payment and move the tendered lamports into the ledger account.
///
/// Under- and overpayments are both accepted here; whether the payment
/// covers the fine is decided by `process_payment`.
pub fn handler(
    ctx: Context<SubmitPayment>,
    violation_id: u64,
    payment_reference: [u8; 32],
    amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let violation_info = ctx.accounts.violation.to_account_info();

    ctx.accounts.ledger.ensure_not_paused()?;
    let mut violation: Violation = account_io::load(&violation_info, LedgerError::InvalidViolationId)?;

    ctx.accounts.ledger.submit_payment(
        &mut violation,
        violation_id,
        payment_reference,
        amount,
        clock.unix_timestamp,
    )?;
    account_io::store(&violation, &violation_info)?;

    if amount > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.ledger.to_account_info(),
                },
            ),
            amount,
        )?;
    }

    let sequence = ctx.accounts.ledger.next_audit_sequence()?;
    emit!(PaymentSubmitted {
        sequence,
        violation_id,
        payer: ctx.accounts.payer.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "💸 Payment of {} submitted for violation #{} (fine: {})",
        amount,
        violation_id,
        violation.fine_amount
    );

    Ok(())
}
