use anchor_lang::prelude::*;
use crate::contexts::InitializeTypeRegistry;

pub fn handler(ctx: Context<InitializeTypeRegistry>) -> Result<()> {
    let type_registry = &mut ctx.accounts.type_registry;

    type_registry.initialize(ctx.accounts.admin.key(), ctx.bumps.type_registry);

    msg!("✅ Violation type registry initialized!");
    msg!("   Admin: {}", type_registry.admin);

    Ok(())
}
