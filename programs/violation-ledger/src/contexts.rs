use anchor_lang::prelude::*;
use crate::{constants::*, state::*};

/// Initialize the violation ledger
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Administrator who will own the fine schedule and pauser set
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Ledger state PDA (also holds submitted payments)
    #[account(
        init,
        payer = admin,
        space = LedgerState::space_for(INITIAL_PAUSER_SLOTS),
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, LedgerState>,

    pub system_program: Program<'info, System>,
}

/// Report a violation (anyone)
#[derive(Accounts)]
pub struct ReportViolation<'info> {
    #[account(mut)]
    pub reporter: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,

    /// Violation PDA for the next sequential id
    #[account(
        init,
        payer = reporter,
        space = 8 + Violation::INIT_SPACE,
        seeds = [VIOLATION_SEED, &ledger.violation_count.saturating_add(1).to_le_bytes()],
        bump
    )]
    pub violation: Account<'info, Violation>,

    /// CHECK: per-reporter id list PDA. Created on the first report and
    /// grown by one id per report in `account_io::ensure_space`.
    #[account(
        mut,
        seeds = [REPORTER_SEED, reporter.key().as_ref()],
        bump
    )]
    pub reporter_index: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Submit a payment against a violation (anyone)
#[derive(Accounts)]
#[instruction(violation_id: u64)]
pub struct SubmitPayment<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Ledger state, receives the payment lamports
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,

    /// CHECK: PDA of the requested id; empty when the id was never allocated.
    /// Loaded by `account_io::load`.
    #[account(
        mut,
        seeds = [VIOLATION_SEED, &violation_id.to_le_bytes()],
        bump
    )]
    pub violation: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Process the latest payment of a violation (admin-only)
#[derive(Accounts)]
#[instruction(violation_id: u64)]
pub struct ProcessPayment<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,

    /// CHECK: PDA of the requested id; loaded by `account_io::load`.
    #[account(
        mut,
        seeds = [VIOLATION_SEED, &violation_id.to_le_bytes()],
        bump
    )]
    pub violation: UncheckedAccount<'info>,
}

/// Ledger mutation by an administrator or pauser
/// (fine schedule, pauser set, pause switch)
#[derive(Accounts)]
pub struct ManageLedger<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,
}

/// Grant pause rights (admin-only); the ledger grows by one pauser slot
#[derive(Accounts)]
pub struct AddPauser<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        realloc = LedgerState::space_for(ledger.pausers.len() + 1),
        realloc::payer = authority,
        realloc::zero = false
    )]
    pub ledger: Account<'info, LedgerState>,

    pub system_program: Program<'info, System>,
}

/// Withdraw accumulated payments (admin-only)
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,
}

/// Read-only access to the ledger state
#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,
}

/// Read-only access to a single violation
#[derive(Accounts)]
#[instruction(violation_id: u64)]
pub struct ReadViolation<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,

    /// CHECK: PDA of the requested id; loaded by `account_io::load`.
    #[account(
        seeds = [VIOLATION_SEED, &violation_id.to_le_bytes()],
        bump
    )]
    pub violation: UncheckedAccount<'info>,
}

/// Read-only access to a reporter's index (absent = no reports)
#[derive(Accounts)]
#[instruction(reporter: Pubkey)]
pub struct ReadReporterViolations<'info> {
    /// CHECK: PDA of the reporter's index; empty until their first report.
    /// Loaded by `account_io::load_optional`.
    #[account(
        seeds = [REPORTER_SEED, reporter.as_ref()],
        bump
    )]
    pub reporter_index: UncheckedAccount<'info>,
}

// ============================================================================
// VIOLATION TYPE REGISTRY
// ============================================================================

/// Initialize the violation type registry
#[derive(Accounts)]
pub struct InitializeTypeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + TypeRegistry::INIT_SPACE,
        seeds = [TYPE_REGISTRY_SEED],
        bump
    )]
    pub type_registry: Account<'info, TypeRegistry>,

    pub system_program: Program<'info, System>,
}

/// Add a violation type (admin-only)
#[derive(Accounts)]
#[instruction(type_id: u16)]
pub struct AddViolationType<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [TYPE_REGISTRY_SEED],
        bump = type_registry.bump,
        constraint = type_registry.is_admin(&admin.key()) @ crate::error::LedgerError::Unauthorized
    )]
    pub type_registry: Account<'info, TypeRegistry>,

    #[account(
        init,
        payer = admin,
        space = 8 + ViolationType::INIT_SPACE,
        seeds = [VIOLATION_TYPE_SEED, &type_id.to_le_bytes()],
        bump
    )]
    pub violation_type: Account<'info, ViolationType>,

    pub system_program: Program<'info, System>,
}

/// Mutate an existing violation type (admin-only)
#[derive(Accounts)]
#[instruction(type_id: u16)]
pub struct ManageViolationType<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [TYPE_REGISTRY_SEED],
        bump = type_registry.bump,
        constraint = type_registry.is_admin(&admin.key()) @ crate::error::LedgerError::Unauthorized
    )]
    pub type_registry: Account<'info, TypeRegistry>,

    /// CHECK: PDA of the requested type; loaded by `account_io::load`.
    #[account(
        mut,
        seeds = [VIOLATION_TYPE_SEED, &type_id.to_le_bytes()],
        bump
    )]
    pub violation_type: UncheckedAccount<'info>,
}

/// Read-only access to a violation type
#[derive(Accounts)]
#[instruction(type_id: u16)]
pub struct ReadViolationType<'info> {
    /// CHECK: PDA of the requested type; loaded by `account_io::load`.
    #[account(
        seeds = [VIOLATION_TYPE_SEED, &type_id.to_le_bytes()],
        bump
    )]
    pub violation_type: UncheckedAccount<'info>,
}
