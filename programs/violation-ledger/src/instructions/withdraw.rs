use anchor_lang::prelude::*;
use crate::{contexts::Withdraw, error::LedgerError, state::FundsWithdrawn};

/// Move everything the ledger holds above its rent-exempt minimum to the admin.
/// An empty treasury is a successful no-op.
pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let ledger_info = ctx.accounts.ledger.to_account_info();
    let admin_info = ctx.accounts.admin.to_account_info();

    let rent_minimum = Rent::get()?.minimum_balance(ledger_info.data_len());
    let amount = ctx
        .accounts
        .ledger
        .withdrawable(&admin, ledger_info.lamports(), rent_minimum)?;
    if amount == 0 {
        msg!("🏦 Nothing to withdraw");
        return Ok(());
    }

    let remaining = ledger_info
        .lamports()
        .checked_sub(amount)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    let credited = admin_info
        .lamports()
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    **ledger_info.try_borrow_mut_lamports()? = remaining;
    **admin_info.try_borrow_mut_lamports()? = credited;

    let sequence = ctx.accounts.ledger.next_audit_sequence()?;
    emit!(FundsWithdrawn {
        sequence,
        to: admin,
        amount,
    });

    msg!("🏦 Withdrew {} lamports to {}", amount, admin);

    Ok(())
}
