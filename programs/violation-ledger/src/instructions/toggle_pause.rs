use anchor_lang::prelude::*;
use crate::{contexts::ManageLedger, state::PauseToggled};

pub fn handler(ctx: Context<ManageLedger>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let by = ctx.accounts.authority.key();

    let paused = ledger.toggle_pause(&by)?;

    let sequence = ledger.next_audit_sequence()?;
    emit!(PauseToggled { sequence, by, paused });

    msg!("{} Ledger {} by {}", if paused { "⏸" } else { "▶" }, if paused { "paused" } else { "resumed" }, by);

    Ok(())
}
