use anchor_lang::prelude::*;
use crate::{contexts::AddViolationType, state::ViolationTypeAdded};

pub fn handler(
    ctx: Context<AddViolationType>,
    type_id: u16,
    name: String,
    description: String,
    base_fine: u64,
) -> Result<()> {
    let type_registry = &mut ctx.accounts.type_registry;
    let violation_type = &mut ctx.accounts.violation_type;
    let clock = Clock::get()?;

    type_registry.register_type(
        violation_type,
        type_id,
        name,
        description,
        base_fine,
        clock.unix_timestamp,
    )?;
    violation_type.bump = ctx.bumps.violation_type;

    let sequence = type_registry.next_audit_sequence()?;
    emit!(ViolationTypeAdded {
        sequence,
        type_id,
        name: violation_type.name.clone(),
        base_fine,
    });

    msg!("✅ Violation type {} added: {}", type_id, violation_type.name);
    msg!("   Registered types: {}", type_registry.type_count);

    Ok(())
}
