use anchor_lang::prelude::*;
use crate::{contexts::ManageLedger, state::PauserRemoved};

pub fn handler(ctx: Context<ManageLedger>, pauser: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    ledger.remove_pauser(&ctx.accounts.authority.key(), &pauser)?;

    let sequence = ledger.next_audit_sequence()?;
    emit!(PauserRemoved {
        sequence,
        pauser,
        pauser_count: ledger.pauser_count(),
    });

    msg!("Pauser removed: {} (total: {})", pauser, ledger.pauser_count());

    Ok(())
}
