//! Violation lifecycle state machine.
//!
//! Every operation validates all of its preconditions before it touches any
//! field, so a failed call leaves the ledger, the violation and the reporter
//! index exactly as they were.

use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_BASE_FINES, MAX_LOCATION_LEN, MAX_REPORTER_IDS_PER_QUERY, VIOLATION_KIND_COUNT},
    error::LedgerError,
    fine::{calculate_fine, kind_index},
    state::{LedgerState, PaymentStatus, ReporterIndex, Violation, ViolationInfo},
};

/// Fields supplied by the reporter when filing a violation.
#[derive(Clone, Debug)]
pub struct ViolationReport {
    pub license_plate: [u8; 32],
    pub kind: u8,
    pub severity: u8,
    pub is_repeat_offender: bool,
    pub location: String,
}

impl LedgerState {
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        base_fines: Option<[u64; VIOLATION_KIND_COUNT]>,
        now: i64,
        bump: u8,
    ) -> std::result::Result<(), LedgerError> {
        let base_fines = base_fines.unwrap_or(DEFAULT_BASE_FINES);
        if base_fines.iter().any(|fine| *fine == 0) {
            return Err(LedgerError::AmountMustBePositive);
        }

        self.admin = admin;
        self.paused = false;
        self.violation_count = 0;
        self.base_fines = base_fines;
        self.pausers = vec![admin];
        self.audit_sequence = 0;
        self.created_at = now;
        self.bump = bump;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Guards
    // ------------------------------------------------------------------

    pub fn ensure_admin(&self, caller: &Pubkey) -> std::result::Result<(), LedgerError> {
        if self.admin != *caller {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    pub fn ensure_pauser(&self, caller: &Pubkey) -> std::result::Result<(), LedgerError> {
        if !self.is_pauser(caller) {
            return Err(LedgerError::NotAPauser);
        }
        Ok(())
    }

    pub fn ensure_not_paused(&self) -> std::result::Result<(), LedgerError> {
        if self.paused {
            return Err(LedgerError::ContractPaused);
        }
        Ok(())
    }

    /// The id must be allocated and must match the record it is used with.
    pub fn ensure_violation(
        &self,
        violation: &Violation,
        violation_id: u64,
    ) -> std::result::Result<(), LedgerError> {
        if violation_id == 0 || violation_id > self.violation_count || violation.id != violation_id {
            return Err(LedgerError::InvalidViolationId);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Violation lifecycle
    // ------------------------------------------------------------------

    /// File a new violation and return its id.
    pub fn report_violation(
        &mut self,
        reporter: Pubkey,
        report: ViolationReport,
        violation: &mut Violation,
        index: &mut ReporterIndex,
        now: i64,
    ) -> std::result::Result<u64, LedgerError> {
        self.ensure_not_paused()?;
        if report.location.is_empty() {
            return Err(LedgerError::LocationRequired);
        }
        if report.location.len() > MAX_LOCATION_LEN {
            return Err(LedgerError::LocationTooLong);
        }
        let base = self.base_fine(report.kind)?;
        let fine_amount = calculate_fine(base, report.severity, report.is_repeat_offender)?;
        let id = self
            .violation_count
            .checked_add(1)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        violation.id = id;
        violation.reporter = reporter;
        violation.license_plate = report.license_plate;
        violation.kind = report.kind;
        violation.severity = report.severity;
        violation.is_repeat_offender = report.is_repeat_offender;
        violation.location = report.location;
        violation.created_at = now;
        violation.fine_amount = fine_amount;
        violation.is_paid = false;
        violation.is_processed = false;
        violation.payment_reference = [0u8; 32];
        violation.payment_submitted_amount = 0;
        violation.payment_submitted_at = 0;
        violation.payment_verified = false;

        index.violation_ids.push(id);
        self.violation_count = id;
        Ok(id)
    }

    /// Record a payment. Validity against the fine is judged at processing.
    pub fn submit_payment(
        &self,
        violation: &mut Violation,
        violation_id: u64,
        payment_reference: [u8; 32],
        amount: u64,
        now: i64,
    ) -> std::result::Result<(), LedgerError> {
        self.ensure_not_paused()?;
        self.ensure_violation(violation, violation_id)?;
        // A paid violation is always processed; report the terminal state first.
        if violation.is_processed {
            return Err(LedgerError::AlreadyProcessed);
        }
        if violation.is_paid {
            return Err(LedgerError::AlreadyPaid);
        }

        violation.payment_reference = payment_reference;
        violation.payment_submitted_amount = amount;
        violation.payment_submitted_at = now;
        Ok(())
    }

    /// Finalize a violation. Returns whether the latest payment covered the fine.
    pub fn process_payment(
        &self,
        caller: &Pubkey,
        violation: &mut Violation,
        violation_id: u64,
    ) -> std::result::Result<bool, LedgerError> {
        self.ensure_admin(caller)?;
        self.ensure_not_paused()?;
        self.ensure_violation(violation, violation_id)?;
        if violation.is_processed {
            return Err(LedgerError::AlreadyProcessed);
        }

        let is_paid = violation.payment_submitted_amount >= violation.fine_amount;
        violation.is_paid = is_paid;
        violation.payment_verified = is_paid;
        violation.is_processed = true;
        Ok(is_paid)
    }

    // ------------------------------------------------------------------
    // Administration
    // ------------------------------------------------------------------

    /// Replace the base fine for `kind`, returning the previous amount.
    pub fn update_fine(
        &mut self,
        caller: &Pubkey,
        kind: u8,
        new_amount: u64,
    ) -> std::result::Result<u64, LedgerError> {
        self.ensure_not_paused()?;
        self.ensure_admin(caller)?;
        if new_amount == 0 {
            return Err(LedgerError::AmountMustBePositive);
        }
        let index = kind_index(kind)?;

        let old_amount = self.base_fines[index];
        self.base_fines[index] = new_amount;
        Ok(old_amount)
    }

    pub fn add_pauser(&mut self, caller: &Pubkey, identity: Pubkey) -> std::result::Result<(), LedgerError> {
        self.ensure_admin(caller)?;
        if self.is_pauser(&identity) {
            return Err(LedgerError::AlreadyPauser);
        }
        self.pausers.push(identity);
        Ok(())
    }

    pub fn remove_pauser(&mut self, caller: &Pubkey, identity: &Pubkey) -> std::result::Result<(), LedgerError> {
        self.ensure_admin(caller)?;
        let position = self
            .pausers
            .iter()
            .position(|pauser| pauser == identity)
            .ok_or(LedgerError::NotAPauser)?;
        self.pausers.remove(position);
        Ok(())
    }

    /// Flip the pause switch and return the new state.
    pub fn toggle_pause(&mut self, caller: &Pubkey) -> std::result::Result<bool, LedgerError> {
        self.ensure_pauser(caller)?;
        self.paused = !self.paused;
        Ok(self.paused)
    }

    /// Lamports held above the rent-exempt minimum, all of which go to the admin.
    /// Zero when nothing has accumulated.
    pub fn withdrawable(
        &self,
        caller: &Pubkey,
        balance: u64,
        rent_minimum: u64,
    ) -> std::result::Result<u64, LedgerError> {
        self.ensure_admin(caller)?;
        Ok(balance.saturating_sub(rent_minimum))
    }

    pub fn next_audit_sequence(&mut self) -> std::result::Result<u64, LedgerError> {
        self.audit_sequence = self
            .audit_sequence
            .checked_add(1)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        Ok(self.audit_sequence)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn base_fine(&self, kind: u8) -> std::result::Result<u64, LedgerError> {
        Ok(self.base_fines[kind_index(kind)?])
    }

    pub fn is_pauser(&self, identity: &Pubkey) -> bool {
        self.pausers.contains(identity)
    }

    pub fn pauser_count(&self) -> u64 {
        self.pausers.len() as u64
    }

    pub fn violation_info(
        &self,
        violation: &Violation,
        violation_id: u64,
    ) -> std::result::Result<ViolationInfo, LedgerError> {
        self.ensure_violation(violation, violation_id)?;
        Ok(ViolationInfo {
            id: violation.id,
            reporter: violation.reporter,
            license_plate: violation.license_plate,
            kind: violation.kind,
            severity: violation.severity,
            is_repeat_offender: violation.is_repeat_offender,
            location: violation.location.clone(),
            created_at: violation.created_at,
            fine_amount: violation.fine_amount,
            is_paid: violation.is_paid,
            is_processed: violation.is_processed,
        })
    }

    pub fn payment_status(
        &self,
        violation: &Violation,
        violation_id: u64,
    ) -> std::result::Result<PaymentStatus, LedgerError> {
        self.ensure_violation(violation, violation_id)?;
        Ok(PaymentStatus {
            is_paid: violation.is_paid,
            is_processed: violation.is_processed,
            fine_amount: violation.fine_amount,
            submitted_amount: violation.payment_submitted_amount,
            submitted_at: violation.payment_submitted_at,
            verified: violation.payment_verified,
        })
    }
}

impl ReporterIndex {
    /// Attach a freshly created index to its reporter. No-op once bound.
    pub fn bind(&mut self, reporter: Pubkey, bump: u8) {
        if self.reporter == Pubkey::default() {
            self.reporter = reporter;
            self.bump = bump;
        }
    }

    /// Up to one query's worth of ids, starting at `offset`.
    pub fn page(&self, offset: u32) -> Vec<u64> {
        self.violation_ids
            .iter()
            .skip(offset as usize)
            .take(MAX_REPORTER_IDS_PER_QUERY)
            .copied()
            .collect()
    }
}
