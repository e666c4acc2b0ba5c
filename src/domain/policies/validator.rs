//! Snapshot validator
//!
//! Checks the invariants the calculation engine assumes but never enforces:
//! positive quantities and prices, sane vesting schedules, resolvable
//! references and authorized share limits. Problems are collected into a
//! report instead of failing fast, so callers can show every issue at once.
//!
//! The per-record checks are public so the repository can reject a bad
//! record at insert time; `validate_snapshot` adds the cross-record checks.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::domain::entities::{Issuance, OptionGrant, Safe, SecurityClass, Snapshot, Stakeholder};
use crate::domain::value_objects::{RecordRef, SecurityClassId};
use crate::error::{CapTableError, CapTableResult};

/// How serious a validation issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but computable
    Warning,
    /// Breaks an engine invariant
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One problem found in a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub record: RecordRef,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.record, self.field, self.message)
    }
}

/// All issues found in a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// True when nothing would break the engine
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Treat every warning as an error (strict mode)
    pub fn promote_warnings(mut self) -> Self {
        for issue in &mut self.issues {
            issue.severity = Severity::Error;
        }
        self
    }

    /// `Ok(self)` when there are no errors, else `CapTableError::Validation`
    pub fn into_result(self) -> CapTableResult<Self> {
        let first = self.errors().next().map(ToString::to_string);
        match first {
            None => Ok(self),
            Some(first) => Err(CapTableError::Validation {
                count: self.error_count(),
                first,
            }),
        }
    }

    fn push(
        &mut self,
        severity: Severity,
        record: RecordRef,
        field: &str,
        message: impl Into<String>,
    ) {
        self.issues.push(ValidationIssue {
            severity,
            record,
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn error(&mut self, record: RecordRef, field: &str, message: impl Into<String>) {
        self.push(Severity::Error, record, field, message);
    }

    fn warn(&mut self, record: RecordRef, field: &str, message: impl Into<String>) {
        self.push(Severity::Warning, record, field, message);
    }
}

pub fn check_stakeholder(stakeholder: &Stakeholder, report: &mut ValidationReport) {
    let record = stakeholder.id.record_ref();
    if stakeholder.id.as_str().is_empty() {
        report.error(record.clone(), "id", "must not be empty");
    }
    if stakeholder.name.trim().is_empty() {
        report.error(record, "name", "must not be empty");
    }
}

pub fn check_security_class(class: &SecurityClass, report: &mut ValidationReport) {
    let record = class.id.record_ref();
    if class.id.as_str().is_empty() {
        report.error(record.clone(), "id", "must not be empty");
    }
    if let Some(par) = class.par_value {
        if !par.is_finite() || par < 0.0 {
            report.error(record, "parValue", format!("must be zero or positive, got {par}"));
        }
    }
}

pub fn check_issuance(issuance: &Issuance, report: &mut ValidationReport) {
    let record = issuance.id.record_ref();
    if issuance.quantity == 0 {
        report.error(record.clone(), "quantity", "must be positive");
    }
    if let Some(price) = issuance.price_per_share {
        if !price.is_finite() || price < 0.0 {
            report.error(record, "pricePerShare", format!("must be zero or positive, got {price}"));
        }
    }
}

pub fn check_option_grant(grant: &OptionGrant, report: &mut ValidationReport) {
    let record = grant.id.record_ref();
    if grant.quantity == 0 {
        report.error(record.clone(), "quantity", "must be positive");
    }
    if !(grant.exercise_price.is_finite() && grant.exercise_price > 0.0) {
        report.error(
            record.clone(),
            "exercisePrice",
            format!("must be positive, got {}", grant.exercise_price),
        );
    }

    let Some(vesting) = &grant.vesting else {
        return;
    };
    if vesting.months_total == 0 {
        report.error(record.clone(), "vesting.monthsTotal", "must be positive");
    }
    if vesting.cliff_months > vesting.months_total {
        report.error(
            record.clone(),
            "vesting.cliffMonths",
            format!(
                "({}) must not exceed monthsTotal ({})",
                vesting.cliff_months, vesting.months_total
            ),
        );
    }
    if vesting.start < grant.grant_date {
        report.warn(
            record,
            "vesting.start",
            format!("({}) precedes grant date ({})", vesting.start, grant.grant_date),
        );
    }
}

pub fn check_safe(safe: &Safe, report: &mut ValidationReport) {
    let record = safe.id.record_ref();
    if !(safe.amount.is_finite() && safe.amount > 0.0) {
        report.error(record.clone(), "amount", format!("must be positive, got {}", safe.amount));
    }
    if let Some(cap) = safe.cap {
        if !(cap.is_finite() && cap > 0.0) {
            report.error(record.clone(), "cap", format!("must be positive, got {cap}"));
        }
    }
    if let Some(discount) = safe.discount {
        if !(discount > 0.0 && discount <= 1.0) {
            report.error(
                record.clone(),
                "discount",
                format!("must be in (0, 1], got {discount}"),
            );
        }
    }
    if safe.cap.is_none() && safe.discount.is_none() {
        report.warn(record, "cap", "and discount are both absent; converts at the round price");
    }
}

/// Validate every record and the references between them.
pub fn validate_snapshot(snapshot: &Snapshot) -> ValidationReport {
    let mut report = ValidationReport::new();

    for stakeholder in &snapshot.stakeholders {
        check_stakeholder(stakeholder, &mut report);
    }
    for class in &snapshot.security_classes {
        check_security_class(class, &mut report);
    }
    for issuance in &snapshot.issuances {
        check_issuance(issuance, &mut report);
    }
    for grant in &snapshot.option_grants {
        check_option_grant(grant, &mut report);
    }
    for safe in &snapshot.safes {
        check_safe(safe, &mut report);
    }

    check_duplicate_ids(snapshot, &mut report);
    check_references(snapshot, &mut report);
    check_authorized_limits(snapshot, &mut report);
    check_pool_capacity(snapshot, &mut report);

    report
}

fn check_duplicate_ids(snapshot: &Snapshot, report: &mut ValidationReport) {
    let refs = snapshot
        .stakeholders
        .iter()
        .map(|r| r.id.record_ref())
        .chain(snapshot.security_classes.iter().map(|r| r.id.record_ref()))
        .chain(snapshot.issuances.iter().map(|r| r.id.record_ref()))
        .chain(snapshot.option_grants.iter().map(|r| r.id.record_ref()))
        .chain(snapshot.safes.iter().map(|r| r.id.record_ref()));

    let mut seen = HashSet::new();
    for record in refs {
        if !seen.insert(record.clone()) {
            report.error(record, "id", "is used by more than one record");
        }
    }
}

fn check_references(snapshot: &Snapshot, report: &mut ValidationReport) {
    let holders = snapshot
        .issuances
        .iter()
        .map(|i| (i.id.record_ref(), &i.stakeholder_id))
        .chain(snapshot.option_grants.iter().map(|g| (g.id.record_ref(), &g.stakeholder_id)))
        .chain(snapshot.safes.iter().map(|s| (s.id.record_ref(), &s.stakeholder_id)));

    for (record, stakeholder_id) in holders {
        if snapshot.stakeholder(stakeholder_id).is_none() {
            report.error(
                record,
                "stakeholderId",
                format!("references unknown stakeholder '{stakeholder_id}'"),
            );
        }
    }

    for issuance in &snapshot.issuances {
        match snapshot.security_class(&issuance.security_class_id) {
            None => report.error(
                issuance.id.record_ref(),
                "securityClassId",
                format!("references unknown security class '{}'", issuance.security_class_id),
            ),
            Some(class) if class.kind.is_option_pool() => report.warn(
                issuance.id.record_ref(),
                "securityClassId",
                format!("issues into option pool '{}'; ignored by the cap table", class.id),
            ),
            Some(_) => {}
        }
    }
}

fn check_authorized_limits(snapshot: &Snapshot, report: &mut ValidationReport) {
    let mut issued: BTreeMap<&SecurityClassId, u64> = BTreeMap::new();
    for issuance in &snapshot.issuances {
        let total = issued.entry(&issuance.security_class_id).or_default();
        *total = total.saturating_add(issuance.quantity);
    }

    for class in &snapshot.security_classes {
        let total = issued.get(&class.id).copied().unwrap_or(0);
        if total > class.authorized {
            report.error(
                class.id.record_ref(),
                "authorized",
                format!("({}) is below issued quantity ({total})", class.authorized),
            );
        }
    }
}

fn check_pool_capacity(snapshot: &Snapshot, report: &mut ValidationReport) {
    let pool_authorized = snapshot.pool_authorized();
    let mut granted = 0u64;
    for grant in &snapshot.option_grants {
        let before = granted;
        granted = granted.saturating_add(grant.quantity);
        if before <= pool_authorized && granted > pool_authorized {
            report.warn(
                grant.id.record_ref(),
                "quantity",
                format!(
                    "brings granted options to {granted}, above the option pool's {pool_authorized}"
                ),
            );
        }
    }
}
