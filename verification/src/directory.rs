//! Visitor directory: the pre-authorized visitors known to the gate.

use crate::error::DirectoryError;
use serde::{Deserialize, Serialize};
use society_types::{PurposeKind, Timestamp, VisitPurpose, VisitorId, VisitorStatus};
use std::collections::HashMap;

/// A visitor as registered by a resident.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub id: VisitorId,
    /// Name shown to the operator and used in notifications.
    pub name: String,
    /// Flat being visited, e.g. `A-210`.
    pub flat_no: String,
    #[serde(default)]
    pub purpose: VisitPurpose,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    /// Entry pass token carried in the visitor's QR code.
    #[serde(default)]
    pub access_code: Option<String>,
    #[serde(default = "default_status")]
    pub status: VisitorStatus,
    /// Expected (or actual) entry time.
    #[serde(default)]
    pub expected_at: Option<Timestamp>,
    /// Exit time, once the visitor has left.
    #[serde(default)]
    pub exit_at: Option<Timestamp>,
}

fn default_status() -> VisitorStatus {
    VisitorStatus::Upcoming
}

impl VisitorRecord {
    pub fn new(id: impl Into<VisitorId>, name: impl Into<String>, flat_no: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            flat_no: flat_no.into(),
            purpose: VisitPurpose::default(),
            vehicle_number: None,
            access_code: None,
            status: VisitorStatus::Upcoming,
            expected_at: None,
            exit_at: None,
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<VisitPurpose>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn with_access_code(mut self, code: impl Into<String>) -> Self {
        self.access_code = Some(code.into());
        self
    }

    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle_number = Some(vehicle.into());
        self
    }

    pub fn with_status(mut self, status: VisitorStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_expected_at(mut self, at: Timestamp) -> Self {
        self.expected_at = Some(at);
        self
    }

    pub fn with_exit_at(mut self, at: Timestamp) -> Self {
        self.exit_at = Some(at);
        self
    }

    /// Case-insensitive match of `code` against the access code or vehicle number.
    pub fn matches_code(&self, code: &str) -> bool {
        let code = code.to_lowercase();
        [&self.access_code, &self.vehicle_number]
            .into_iter()
            .flatten()
            .any(|candidate| candidate.to_lowercase() == code)
    }
}

/// Filter for the visitor log.
#[derive(Clone, Debug, Default)]
pub struct VisitorQuery {
    /// Substring matched case-insensitively against name, flat, vehicle and
    /// purpose label.
    pub text: Option<String>,
    /// Only visits of this kind.
    pub purpose: Option<PurposeKind>,
    /// Inclusive lower bound on `expected_at`.
    pub from: Option<Timestamp>,
    /// Inclusive upper bound on `expected_at`.
    pub until: Option<Timestamp>,
}

impl VisitorQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn purpose(mut self, kind: PurposeKind) -> Self {
        self.purpose = Some(kind);
        self
    }

    pub fn between(mut self, from: Option<Timestamp>, until: Option<Timestamp>) -> Self {
        self.from = from;
        self.until = until;
        self
    }

    fn accepts(&self, record: &VisitorRecord) -> bool {
        let text_ok = match self.text.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let q = q.to_lowercase();
                record.name.to_lowercase().contains(&q)
                    || record.flat_no.to_lowercase().contains(&q)
                    || record.purpose.label().to_lowercase().contains(&q)
                    || record
                        .vehicle_number
                        .as_ref()
                        .is_some_and(|v| v.to_lowercase().contains(&q))
            }
        };
        if !text_ok {
            return false;
        }
        if self.purpose.is_some_and(|kind| record.purpose.kind() != kind) {
            return false;
        }
        if self.from.is_none() && self.until.is_none() {
            return true;
        }
        let Some(at) = record.expected_at else {
            return false;
        };
        self.from.map_or(true, |from| at >= from) && self.until.map_or(true, |until| at <= until)
    }
}

/// The session's visitor records, in load order.
///
/// Records are created elsewhere and loaded once; the gate never adds or
/// removes any. Load order is the tie-break order for lookups.
#[derive(Clone, Debug, Default)]
pub struct VisitorDirectory {
    records: Vec<VisitorRecord>,
    index: HashMap<VisitorId, usize>,
}

impl VisitorDirectory {
    /// Build a directory, enforcing unique ids and unique access codes across
    /// `Upcoming` records (compared case-insensitively).
    pub fn load(records: impl IntoIterator<Item = VisitorRecord>) -> Result<Self, DirectoryError> {
        let mut directory = Self::default();
        let mut upcoming_codes: HashMap<String, VisitorId> = HashMap::new();

        for record in records {
            if !record.id.is_valid() {
                return Err(DirectoryError::BlankId);
            }
            if directory.index.contains_key(&record.id) {
                return Err(DirectoryError::DuplicateId(record.id));
            }
            if record.status.is_pre_authorized() {
                if let Some(code) = &record.access_code {
                    let key = code.to_lowercase();
                    if let Some(first) = upcoming_codes.get(&key) {
                        return Err(DirectoryError::DuplicateAccessCode {
                            code: code.clone(),
                            first: first.clone(),
                            second: record.id,
                        });
                    }
                    upcoming_codes.insert(key, record.id.clone());
                }
            }
            directory.index.insert(record.id.clone(), directory.records.len());
            directory.records.push(record);
        }

        Ok(directory)
    }

    pub fn get(&self, id: &VisitorId) -> Option<&VisitorRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisitorRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Move a visitor to a new lifecycle status.
    pub fn set_status(&mut self, id: &VisitorId, status: VisitorStatus) -> Result<(), DirectoryError> {
        let &i = self
            .index
            .get(id)
            .ok_or_else(|| DirectoryError::UnknownVisitor(id.clone()))?;
        self.records[i].status = status;
        Ok(())
    }

    /// Visitor log search, in load order.
    pub fn search(&self, query: &VisitorQuery) -> Vec<&VisitorRecord> {
        self.records.iter().filter(|r| query.accepts(r)).collect()
    }
}
