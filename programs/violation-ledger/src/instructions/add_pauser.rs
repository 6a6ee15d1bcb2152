use anchor_lang::prelude::*;
use crate::{contexts::AddPauser, state::PauserAdded};

/// The ledger account was already grown by one slot in `AddPauser`.
pub fn handler(ctx: Context<AddPauser>, pauser: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    ledger.add_pauser(&ctx.accounts.authority.key(), pauser)?;

    let sequence = ledger.next_audit_sequence()?;
    emit!(PauserAdded {
        sequence,
        pauser,
        pauser_count: ledger.pauser_count(),
    });

    msg!("Pauser added: {} (total: {})", pauser, ledger.pauser_count());

    Ok(())
}
