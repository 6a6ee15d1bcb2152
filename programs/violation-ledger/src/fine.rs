use crate::{
    constants::{REPEAT_OFFENDER_MULTIPLIER, SEVERITY_BASE, VIOLATION_KIND_COUNT},
    error::LedgerError,
};

/// Map a 1-based violation kind onto its slot in the fine schedule.
pub fn kind_index(kind: u8) -> Result<usize, LedgerError> {
    let index = usize::from(kind)
        .checked_sub(1)
        .ok_or(LedgerError::InvalidViolationType)?;
    if index >= VIOLATION_KIND_COUNT {
        return Err(LedgerError::InvalidViolationType);
    }
    Ok(index)
}

/// Fine owed for a violation: `base * (100 + severity) / 100`, truncated,
/// then doubled for repeat offenders.
pub fn calculate_fine(base: u64, severity: u8, is_repeat_offender: bool) -> Result<u64, LedgerError> {
    let adjusted = base
        .checked_mul(SEVERITY_BASE + u64::from(severity))
        .ok_or(LedgerError::ArithmeticOverflow)?
        / SEVERITY_BASE;

    if is_repeat_offender {
        adjusted
            .checked_mul(REPEAT_OFFENDER_MULTIPLIER)
            .ok_or(LedgerError::ArithmeticOverflow)
    } else {
        Ok(adjusted)
    }
}
