//! In-memory cap table repository
//!
//! Owns record lifecycle: records live in id-keyed maps, every mutation is
//! checked (field rules and references) before it lands, and the engine only
//! ever sees an immutable `Snapshot` produced from the maps.

use std::collections::BTreeMap;

use crate::domain::entities::{Issuance, OptionGrant, Safe, SecurityClass, Snapshot, Stakeholder};
use crate::domain::policies::{
    check_issuance, check_option_grant, check_safe, check_security_class, check_stakeholder,
    ValidationReport,
};
use crate::domain::ports::SnapshotSource;
use crate::domain::value_objects::{
    IssuanceId, OptionGrantId, RecordKind, RecordRef, SafeId, SecurityClassId, StakeholderId,
};
use crate::error::{CapTableError, CapTableResult};

/// Id-keyed arena of cap table records
///
/// Records added with an empty id get a sequential one (`sh-1`, `sc-1`,
/// `is-1`, `og-1`, `safe-1`). Explicit ids are kept as given.
#[derive(Debug, Clone, Default)]
pub struct CapTableRepository {
    stakeholders: BTreeMap<StakeholderId, Stakeholder>,
    security_classes: BTreeMap<SecurityClassId, SecurityClass>,
    issuances: BTreeMap<IssuanceId, Issuance>,
    option_grants: BTreeMap<OptionGrantId, OptionGrant>,
    safes: BTreeMap<SafeId, Safe>,
    counters: BTreeMap<RecordKind, u64>,
}

impl CapTableRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a repository from a snapshot, checking every record.
    ///
    /// Id counters continue after the highest numeric suffix seen.
    pub fn from_snapshot(snapshot: Snapshot) -> CapTableResult<Self> {
        let mut repo = Self::new();
        for stakeholder in snapshot.stakeholders {
            repo.add_stakeholder(stakeholder)?;
        }
        for class in snapshot.security_classes {
            repo.add_security_class(class)?;
        }
        for issuance in snapshot.issuances {
            repo.add_issuance(issuance)?;
        }
        for grant in snapshot.option_grants {
            repo.add_option_grant(grant)?;
        }
        for safe in snapshot.safes {
            repo.add_safe(safe)?;
        }
        tracing::debug!(records = repo.len(), "repository rebuilt from snapshot");
        Ok(repo)
    }

    /// Immutable copy of every record, each kind in id order
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stakeholders: self.stakeholders.values().cloned().collect(),
            security_classes: self.security_classes.values().cloned().collect(),
            issuances: self.issuances.values().cloned().collect(),
            option_grants: self.option_grants.values().cloned().collect(),
            safes: self.safes.values().cloned().collect(),
        }
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.stakeholders.len()
            + self.security_classes.len()
            + self.issuances.len()
            + self.option_grants.len()
            + self.safes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stakeholder(&self, id: &StakeholderId) -> Option<&Stakeholder> {
        self.stakeholders.get(id)
    }

    pub fn security_class(&self, id: &SecurityClassId) -> Option<&SecurityClass> {
        self.security_classes.get(id)
    }

    pub fn issuance(&self, id: &IssuanceId) -> Option<&Issuance> {
        self.issuances.get(id)
    }

    pub fn option_grant(&self, id: &OptionGrantId) -> Option<&OptionGrant> {
        self.option_grants.get(id)
    }

    pub fn safe(&self, id: &SafeId) -> Option<&Safe> {
        self.safes.get(id)
    }

    // --- stakeholders ---

    pub fn add_stakeholder(
        &mut self,
        mut stakeholder: Stakeholder,
    ) -> CapTableResult<StakeholderId> {
        stakeholder.id = self.next_id(RecordKind::Stakeholder, stakeholder.id.as_str())?.into();
        let mut report = ValidationReport::new();
        check_stakeholder(&stakeholder, &mut report);
        reject_errors(report, stakeholder.id.record_ref())?;

        let id = stakeholder.id.clone();
        self.commit_id(RecordKind::Stakeholder, id.as_str());
        tracing::debug!(id = %id, "stakeholder added");
        self.stakeholders.insert(id.clone(), stakeholder);
        Ok(id)
    }

    pub fn update_stakeholder(&mut self, stakeholder: Stakeholder) -> CapTableResult<()> {
        self.require_stakeholder(&stakeholder.id)?;
        let mut report = ValidationReport::new();
        check_stakeholder(&stakeholder, &mut report);
        reject_errors(report, stakeholder.id.record_ref())?;
        self.stakeholders.insert(stakeholder.id.clone(), stakeholder);
        Ok(())
    }

    /// Remove a stakeholder that holds nothing
    pub fn remove_stakeholder(&mut self, id: &StakeholderId) -> CapTableResult<Stakeholder> {
        let holding = self
            .issuances
            .values()
            .filter(|i| &i.stakeholder_id == id)
            .map(|i| i.id.record_ref())
            .chain(
                self.option_grants
                    .values()
                    .filter(|g| &g.stakeholder_id == id)
                    .map(|g| g.id.record_ref()),
            )
            .chain(
                self.safes
                    .values()
                    .filter(|s| &s.stakeholder_id == id)
                    .map(|s| s.id.record_ref()),
            )
            .next();
        if let Some(referenced_by) = holding {
            return Err(CapTableError::RecordInUse {
                record: id.record_ref(),
                referenced_by,
            });
        }

        self.stakeholders
            .remove(id)
            .ok_or_else(|| CapTableError::NotFound {
                record: id.record_ref(),
            })
    }

    // --- security classes ---

    pub fn add_security_class(
        &mut self,
        mut class: SecurityClass,
    ) -> CapTableResult<SecurityClassId> {
        class.id = self.next_id(RecordKind::SecurityClass, class.id.as_str())?.into();
        let mut report = ValidationReport::new();
        check_security_class(&class, &mut report);
        reject_errors(report, class.id.record_ref())?;

        let id = class.id.clone();
        self.commit_id(RecordKind::SecurityClass, id.as_str());
        tracing::debug!(
            id = %id,
            kind = %class.kind,
            authorized = class.authorized,
            "security class added"
        );
        self.security_classes.insert(id.clone(), class);
        Ok(id)
    }

    pub fn update_security_class(&mut self, class: SecurityClass) -> CapTableResult<()> {
        self.require_security_class(&class.id)?;
        let mut report = ValidationReport::new();
        check_security_class(&class, &mut report);
        reject_errors(report, class.id.record_ref())?;
        self.security_classes.insert(class.id.clone(), class);
        Ok(())
    }

    /// Remove a security class nothing has been issued from
    pub fn remove_security_class(&mut self, id: &SecurityClassId) -> CapTableResult<SecurityClass> {
        if let Some(issuance) = self.issuances.values().find(|i| &i.security_class_id == id) {
            return Err(CapTableError::RecordInUse {
                record: id.record_ref(),
                referenced_by: issuance.id.record_ref(),
            });
        }

        self.security_classes
            .remove(id)
            .ok_or_else(|| CapTableError::NotFound {
                record: id.record_ref(),
            })
    }

    // --- issuances ---

    pub fn add_issuance(&mut self, mut issuance: Issuance) -> CapTableResult<IssuanceId> {
        self.check_issuance_refs(&issuance)?;
        issuance.id = self.next_id(RecordKind::Issuance, issuance.id.as_str())?.into();
        let mut report = ValidationReport::new();
        check_issuance(&issuance, &mut report);
        reject_errors(report, issuance.id.record_ref())?;

        let id = issuance.id.clone();
        self.commit_id(RecordKind::Issuance, id.as_str());
        tracing::debug!(
            id = %id,
            stakeholder = %issuance.stakeholder_id,
            quantity = issuance.quantity,
            "issuance added"
        );
        self.issuances.insert(id.clone(), issuance);
        Ok(id)
    }

    pub fn update_issuance(&mut self, issuance: Issuance) -> CapTableResult<()> {
        if !self.issuances.contains_key(&issuance.id) {
            return Err(CapTableError::NotFound {
                record: issuance.id.record_ref(),
            });
        }
        self.check_issuance_refs(&issuance)?;
        let mut report = ValidationReport::new();
        check_issuance(&issuance, &mut report);
        reject_errors(report, issuance.id.record_ref())?;
        self.issuances.insert(issuance.id.clone(), issuance);
        Ok(())
    }

    pub fn remove_issuance(&mut self, id: &IssuanceId) -> CapTableResult<Issuance> {
        self.issuances.remove(id).ok_or_else(|| CapTableError::NotFound {
            record: id.record_ref(),
        })
    }

    // --- option grants ---

    pub fn add_option_grant(&mut self, mut grant: OptionGrant) -> CapTableResult<OptionGrantId> {
        self.require_stakeholder(&grant.stakeholder_id)?;
        grant.id = self.next_id(RecordKind::OptionGrant, grant.id.as_str())?.into();
        let mut report = ValidationReport::new();
        check_option_grant(&grant, &mut report);
        reject_errors(report, grant.id.record_ref())?;

        let id = grant.id.clone();
        self.commit_id(RecordKind::OptionGrant, id.as_str());
        tracing::debug!(
            id = %id,
            stakeholder = %grant.stakeholder_id,
            quantity = grant.quantity,
            "option grant added"
        );
        self.option_grants.insert(id.clone(), grant);
        Ok(id)
    }

    pub fn update_option_grant(&mut self, grant: OptionGrant) -> CapTableResult<()> {
        if !self.option_grants.contains_key(&grant.id) {
            return Err(CapTableError::NotFound {
                record: grant.id.record_ref(),
            });
        }
        self.require_stakeholder(&grant.stakeholder_id)?;
        let mut report = ValidationReport::new();
        check_option_grant(&grant, &mut report);
        reject_errors(report, grant.id.record_ref())?;
        self.option_grants.insert(grant.id.clone(), grant);
        Ok(())
    }

    pub fn remove_option_grant(&mut self, id: &OptionGrantId) -> CapTableResult<OptionGrant> {
        self.option_grants
            .remove(id)
            .ok_or_else(|| CapTableError::NotFound {
                record: id.record_ref(),
            })
    }

    // --- SAFEs ---

    pub fn add_safe(&mut self, mut safe: Safe) -> CapTableResult<SafeId> {
        self.require_stakeholder(&safe.stakeholder_id)?;
        safe.id = self.next_id(RecordKind::Safe, safe.id.as_str())?.into();
        let mut report = ValidationReport::new();
        check_safe(&safe, &mut report);
        reject_errors(report, safe.id.record_ref())?;

        let id = safe.id.clone();
        self.commit_id(RecordKind::Safe, id.as_str());
        tracing::debug!(
            id = %id,
            stakeholder = %safe.stakeholder_id,
            amount = safe.amount,
            "SAFE added"
        );
        self.safes.insert(id.clone(), safe);
        Ok(id)
    }

    pub fn update_safe(&mut self, safe: Safe) -> CapTableResult<()> {
        if !self.safes.contains_key(&safe.id) {
            return Err(CapTableError::NotFound {
                record: safe.id.record_ref(),
            });
        }
        self.require_stakeholder(&safe.stakeholder_id)?;
        let mut report = ValidationReport::new();
        check_safe(&safe, &mut report);
        reject_errors(report, safe.id.record_ref())?;
        self.safes.insert(safe.id.clone(), safe);
        Ok(())
    }

    pub fn remove_safe(&mut self, id: &SafeId) -> CapTableResult<Safe> {
        self.safes.remove(id).ok_or_else(|| CapTableError::NotFound {
            record: id.record_ref(),
        })
    }

    // --- helpers ---

    fn contains(&self, kind: RecordKind, id: &str) -> bool {
        match kind {
            RecordKind::Stakeholder => self.stakeholders.contains_key(id),
            RecordKind::SecurityClass => self.security_classes.contains_key(id),
            RecordKind::Issuance => self.issuances.contains_key(id),
            RecordKind::OptionGrant => self.option_grants.contains_key(id),
            RecordKind::Safe => self.safes.contains_key(id),
        }
    }

    /// Accept an explicit id if unused, or pick the next free sequential one.
    ///
    /// Does not touch the counter; `commit_id` does once the record is stored.
    fn next_id(&self, kind: RecordKind, requested: &str) -> CapTableResult<String> {
        if requested.is_empty() {
            let mut n = self.counters.get(&kind).copied().unwrap_or(0);
            loop {
                n += 1;
                let id = format!("{}-{}", kind.id_prefix(), n);
                if !self.contains(kind, &id) {
                    return Ok(id);
                }
            }
        }

        if self.contains(kind, requested) {
            return Err(CapTableError::DuplicateId {
                record: RecordRef::new(kind, requested),
            });
        }
        Ok(requested.to_string())
    }

    /// Advance the counter past `id` when it has the `<prefix>-<n>` shape
    fn commit_id(&mut self, kind: RecordKind, id: &str) {
        let suffix = id
            .strip_prefix(kind.id_prefix())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|n| n.parse::<u64>().ok());
        if let Some(n) = suffix {
            let counter = self.counters.entry(kind).or_default();
            *counter = (*counter).max(n);
        }
    }

    fn require_stakeholder(&self, id: &StakeholderId) -> CapTableResult<()> {
        if self.stakeholders.contains_key(id) {
            Ok(())
        } else {
            Err(CapTableError::NotFound {
                record: id.record_ref(),
            })
        }
    }

    fn require_security_class(&self, id: &SecurityClassId) -> CapTableResult<()> {
        if self.security_classes.contains_key(id) {
            Ok(())
        } else {
            Err(CapTableError::NotFound {
                record: id.record_ref(),
            })
        }
    }

    fn check_issuance_refs(&self, issuance: &Issuance) -> CapTableResult<()> {
        self.require_stakeholder(&issuance.stakeholder_id)?;
        self.require_security_class(&issuance.security_class_id)
    }
}

/// Turn the first error in `report` into `InvalidRecord`
fn reject_errors(report: ValidationReport, record: RecordRef) -> CapTableResult<()> {
    match report.errors().next() {
        Some(issue) => Err(CapTableError::InvalidRecord {
            record,
            message: format!("{} {}", issue.field, issue.message),
        }),
        None => Ok(()),
    }
}

impl SnapshotSource for CapTableRepository {
    fn load_snapshot(&self) -> CapTableResult<Snapshot> {
        Ok(self.snapshot())
    }

    fn describe(&self) -> String {
        format!("in-memory repository ({} records)", self.len())
    }
}
