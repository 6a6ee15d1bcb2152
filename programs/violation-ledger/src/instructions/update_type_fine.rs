use anchor_lang::prelude::*;
use crate::{
    account_io,
    contexts::ManageViolationType,
    error::LedgerError,
    state::{ViolationType, ViolationTypeFineUpdated},
};

pub fn handler(ctx: Context<ManageViolationType>, type_id: u16, new_fine: u64) -> Result<()> {
    let type_info = ctx.accounts.violation_type.to_account_info();
    let type_registry = &mut ctx.accounts.type_registry;
    let clock = Clock::get()?;

    let mut violation_type: ViolationType = account_io::load(&type_info, LedgerError::InvalidViolationType)?;
    let old_fine = violation_type.update_fine(type_id, new_fine, clock.unix_timestamp)?;
    account_io::store(&violation_type, &type_info)?;

    let sequence = type_registry.next_audit_sequence()?;
    emit!(ViolationTypeFineUpdated {
        sequence,
        type_id,
        old_fine,
        new_fine,
    });

    msg!("📝 Violation type {} fine updated: {} → {}", type_id, old_fine, new_fine);

    Ok(())
}
