use anchor_lang::prelude::*;
use crate::{contexts::ManageLedger, state::FineAmountUpdated};

/// Replace a base fine. Violations already on the ledger keep their fine.
pub fn handler(ctx: Context<ManageLedger>, kind: u8, new_amount: u64) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    let old_amount = ledger.update_fine(&ctx.accounts.authority.key(), kind, new_amount)?;

    let sequence = ledger.next_audit_sequence()?;
    emit!(FineAmountUpdated {
        sequence,
        kind,
        old_amount,
        new_amount,
    });

    msg!("📝 Base fine for kind {} updated: {} → {}", kind, old_amount, new_amount);

    Ok(())
}
