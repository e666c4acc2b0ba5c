//! Domain Policies
//!
//! Business rules applied at the boundary, before records reach the engine.

pub mod validator;

pub use validator::{
    check_issuance, check_option_grant, check_safe, check_security_class, check_stakeholder,
    validate_snapshot, Severity, ValidationIssue, ValidationReport,
};
