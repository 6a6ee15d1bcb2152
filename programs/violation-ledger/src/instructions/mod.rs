pub mod add_pauser;
pub mod add_violation_type;
pub mod initialize;
pub mod initialize_type_registry;
pub mod process_payment;
pub mod queries;
pub mod record_type_report;
pub mod remove_pauser;
pub mod report_violation;
pub mod set_violation_type_status;
pub mod submit_payment;
pub mod toggle_pause;
pub mod update_type_fine;
pub mod update_violation_fine;
pub mod withdraw;
