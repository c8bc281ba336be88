//! Patient models.

use serde::{Deserialize, Serialize};

/// Patient identifier, issued sequentially by the facility.
pub type PatientId = u32;

/// Severity score. Lower values denote higher clinical priority.
pub type Severity = u32;

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    /// Facility-issued ID
    pub id: PatientId,
    /// Patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Baseline severity recorded at registration
    pub severity: Severity,
}

impl Patient {
    /// Create a new patient record.
    pub fn new(id: PatientId, name: impl Into<String>, age: u32, severity: Severity) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            severity,
        }
    }
}
