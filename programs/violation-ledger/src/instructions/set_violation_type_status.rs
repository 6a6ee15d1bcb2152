use anchor_lang::prelude::*;
use crate::{
    account_io,
    contexts::ManageViolationType,
    error::LedgerError,
    state::{ViolationType, ViolationTypeStatusChanged},
};

pub fn deactivate(ctx: Context<ManageViolationType>, type_id: u16) -> Result<()> {
    set_status(ctx, type_id, false)
}

pub fn reactivate(ctx: Context<ManageViolationType>, type_id: u16) -> Result<()> {
    set_status(ctx, type_id, true)
}

fn set_status(ctx: Context<ManageViolationType>, type_id: u16, is_active: bool) -> Result<()> {
    let type_info = ctx.accounts.violation_type.to_account_info();
    let type_registry = &mut ctx.accounts.type_registry;
    let clock = Clock::get()?;

    let mut violation_type: ViolationType = account_io::load(&type_info, LedgerError::InvalidViolationType)?;
    if is_active {
        violation_type.reactivate(type_id, clock.unix_timestamp)?;
    } else {
        violation_type.deactivate(type_id, clock.unix_timestamp)?;
    }
    account_io::store(&violation_type, &type_info)?;

    let sequence = type_registry.next_audit_sequence()?;
    emit!(ViolationTypeStatusChanged {
        sequence,
        type_id,
        is_active,
    });

    msg!(
        "Violation type {} {}",
        type_id,
        if is_active { "reactivated" } else { "deactivated" }
    );

    Ok(())
}
