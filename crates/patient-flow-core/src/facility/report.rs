//! Read-only facility report.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::{DoctorId, SlotId, SLOT_TIME_FORMAT};

/// Snapshot of schedules and waiting lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacilityReport {
    /// Generation timestamp (RFC 3339)
    pub generated_at: String,
    /// One entry per doctor schedule, ordered by doctor id
    pub doctors: Vec<DoctorSummary>,
    /// Patients served since startup
    pub served_total: u64,
    /// Tokens in the routine queue
    pub pending_routine: usize,
    /// Entries in triage
    pub pending_emergency: usize,
}

/// Per-doctor schedule summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorSummary {
    pub doctor_id: DoctorId,
    /// `None` when the schedule has no registry entry
    pub doctor_name: Option<String>,
    pub booked_slots: usize,
    /// First free slot in schedule order
    pub next_free: Option<FreeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreeSlot {
    pub slot_id: SlotId,
    pub start: NaiveTime,
}

impl FacilityReport {
    pub fn pending_total(&self) -> usize {
        self.pending_routine + self.pending_emergency
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for FacilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Doctor Schedules and Pending Counts ---")?;
        for doctor in &self.doctors {
            write!(f, "Doctor {}", doctor.doctor_id)?;
            if let Some(name) = &doctor.doctor_name {
                write!(f, " ({})", name)?;
            }
            write!(f, ": {} booked slots. Next Free Slot: ", doctor.booked_slots)?;
            match &doctor.next_free {
                Some(slot) => writeln!(
                    f,
                    "Slot {} at {}",
                    slot.slot_id,
                    slot.start.format(SLOT_TIME_FORMAT)
                )?,
                None => writeln!(f, "N/A")?,
            }
        }
        writeln!(f)?;
        writeln!(f, "--- Summary ---")?;
        writeln!(f, "Total Served Patients: {}", self.served_total)?;
        write!(f, "Total Pending Patients: {}", self.pending_total())
    }
}
