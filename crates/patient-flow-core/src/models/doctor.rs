//! Doctor models.

use serde::{Deserialize, Serialize};

/// Doctor identifier. Assigned by setup, not by the facility counters.
pub type DoctorId = u32;

/// A doctor known to the facility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    /// Specialization (e.g., "General", "Cardiology")
    pub specialization: String,
}

impl Doctor {
    pub fn new(id: DoctorId, name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialization: specialization.into(),
        }
    }
}
