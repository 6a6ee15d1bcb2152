use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_TYPE_DESCRIPTION_LEN, MAX_TYPE_NAME_LEN},
    error::LedgerError,
    state::{TypeRegistry, ViolationType, ViolationTypeInfo},
};

impl TypeRegistry {
    pub fn initialize(&mut self, admin: Pubkey, bump: u8) {
        self.admin = admin;
        self.type_count = 0;
        self.audit_sequence = 0;
        self.bump = bump;
    }

    pub fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    /// Validate and store a new type, then bump the catalog size.
    pub fn register_type(
        &mut self,
        violation_type: &mut ViolationType,
        type_id: u16,
        name: String,
        description: String,
        base_fine: u64,
        now: i64,
    ) -> std::result::Result<(), LedgerError> {
        if type_id == 0 {
            return Err(LedgerError::InvalidViolationType);
        }
        if name.is_empty() {
            return Err(LedgerError::TypeNameRequired);
        }
        if name.len() > MAX_TYPE_NAME_LEN {
            return Err(LedgerError::TypeNameTooLong);
        }
        if description.len() > MAX_TYPE_DESCRIPTION_LEN {
            return Err(LedgerError::DescriptionTooLong);
        }
        if base_fine == 0 {
            return Err(LedgerError::AmountMustBePositive);
        }
        let type_count = self
            .type_count
            .checked_add(1)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        violation_type.type_id = type_id;
        violation_type.name = name;
        violation_type.description = description;
        violation_type.base_fine = base_fine;
        violation_type.is_active = true;
        violation_type.report_count = 0;
        violation_type.created_at = now;
        violation_type.updated_at = now;
        self.type_count = type_count;
        Ok(())
    }

    pub fn next_audit_sequence(&mut self) -> std::result::Result<u64, LedgerError> {
        self.audit_sequence = self
            .audit_sequence
            .checked_add(1)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        Ok(self.audit_sequence)
    }
}

impl ViolationType {
    pub fn ensure_exists(&self, type_id: u16) -> std::result::Result<(), LedgerError> {
        if type_id == 0 || self.type_id != type_id {
            return Err(LedgerError::InvalidViolationType);
        }
        Ok(())
    }

    pub fn deactivate(&mut self, type_id: u16, now: i64) -> std::result::Result<(), LedgerError> {
        self.ensure_exists(type_id)?;
        if !self.is_active {
            return Err(LedgerError::TypeAlreadyInactive);
        }
        self.is_active = false;
        self.updated_at = now;
        Ok(())
    }

    pub fn reactivate(&mut self, type_id: u16, now: i64) -> std::result::Result<(), LedgerError> {
        self.ensure_exists(type_id)?;
        if self.is_active {
            return Err(LedgerError::TypeAlreadyActive);
        }
        self.is_active = true;
        self.updated_at = now;
        Ok(())
    }

    /// Returns the previous base fine.
    pub fn update_fine(
        &mut self,
        type_id: u16,
        new_fine: u64,
        now: i64,
    ) -> std::result::Result<u64, LedgerError> {
        self.ensure_exists(type_id)?;
        if new_fine == 0 {
            return Err(LedgerError::AmountMustBePositive);
        }
        let old_fine = self.base_fine;
        self.base_fine = new_fine;
        self.updated_at = now;
        Ok(old_fine)
    }

    /// Count one more report against an active type.
    pub fn record_report(&mut self, type_id: u16, now: i64) -> std::result::Result<u64, LedgerError> {
        self.ensure_exists(type_id)?;
        if !self.is_active {
            return Err(LedgerError::TypeInactive);
        }
        self.report_count = self
            .report_count
            .checked_add(1)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        self.updated_at = now;
        Ok(self.report_count)
    }

    pub fn info(&self, type_id: u16) -> std::result::Result<ViolationTypeInfo, LedgerError> {
        self.ensure_exists(type_id)?;
        Ok(ViolationTypeInfo {
            type_id: self.type_id,
            name: self.name.clone(),
            description: self.description.clone(),
            base_fine: self.base_fine,
            is_active: self.is_active,
            report_count: self.report_count,
        })
    }
}
