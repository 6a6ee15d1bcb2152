use anchor_lang::prelude::*;
use crate::{constants::VIOLATION_KIND_COUNT, contexts::Initialize};

pub fn handler(
    ctx: Context<Initialize>,
    base_fines: Option<[u64; VIOLATION_KIND_COUNT]>,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let clock = Clock::get()?;

    ledger.initialize(
        ctx.accounts.admin.key(),
        base_fines,
        clock.unix_timestamp,
        ctx.bumps.ledger,
    )?;

    msg!("✅ Violation ledger initialized!");
    msg!("   Admin: {}", ledger.admin);
    msg!("   Base fines: {:?}", ledger.base_fines);

    Ok(())
}
