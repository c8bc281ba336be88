//! Facility configuration and seed data.
//!
//! Loaded from JSON. Every field is optional; anything missing falls back to
//! the stock two-doctor seed.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{parse_slot_time, DoctorId, PatientId, SlotId, TokenId};
use crate::queue::DEFAULT_ROUTINE_CAPACITY;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

pub const DEFAULT_FIRST_PATIENT_ID: PatientId = 1001;
pub const DEFAULT_FIRST_TOKEN_ID: TokenId = 1;
pub const DEFAULT_FIRST_SLOT_ID: SlotId = 101;

/// Facility configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FacilityConfig {
    /// Maximum routine tokens waiting at once
    pub routine_capacity: usize,
    /// First patient id issued
    pub first_patient_id: PatientId,
    /// First token id issued
    pub first_token_id: TokenId,
    /// First slot id issued
    pub first_slot_id: SlotId,
    /// Doctors and their initial slots
    pub doctors: Vec<DoctorSeed>,
}

/// A doctor to seed at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorSeed {
    pub id: DoctorId,
    pub name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub slots: Vec<SlotSeed>,
}

/// A slot to seed, with `HH:MM` times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotSeed {
    pub start: String,
    pub end: String,
}

impl SlotSeed {
    fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            routine_capacity: DEFAULT_ROUTINE_CAPACITY,
            first_patient_id: DEFAULT_FIRST_PATIENT_ID,
            first_token_id: DEFAULT_FIRST_TOKEN_ID,
            first_slot_id: DEFAULT_FIRST_SLOT_ID,
            doctors: vec![
                DoctorSeed {
                    id: 1,
                    name: "Dr. Smith".into(),
                    specialization: "General".into(),
                    slots: vec![SlotSeed::new("09:00", "10:00"), SlotSeed::new("10:00", "11:00")],
                },
                DoctorSeed {
                    id: 2,
                    name: "Dr. Jones".into(),
                    specialization: "Cardiology".into(),
                    slots: vec![SlotSeed::new("09:30", "10:30"), SlotSeed::new("10:30", "11:30")],
                },
            ],
        }
    }
}

impl FacilityConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.routine_capacity == 0 {
            return Err(ConfigError::Invalid(
                "routine_capacity must be at least 1".into(),
            ));
        }

        let seeded_slots: u64 = self.doctors.iter().map(|d| d.slots.len() as u64).sum();
        if seeded_slots > 0
            && u64::from(self.first_slot_id) + seeded_slots - 1 > u64::from(u32::MAX)
        {
            return Err(ConfigError::Invalid(format!(
                "first_slot_id {} leaves no room for {} seeded slots",
                self.first_slot_id, seeded_slots
            )));
        }

        let mut seen = HashSet::new();
        for doctor in &self.doctors {
            if !seen.insert(doctor.id) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate doctor id {}",
                    doctor.id
                )));
            }
            for slot in &doctor.slots {
                for raw in [&slot.start, &slot.end] {
                    parse_slot_time(raw).map_err(|e| {
                        ConfigError::Invalid(format!(
                            "doctor {}: bad slot time {:?}: {}",
                            doctor.id, raw, e
                        ))
                    })?;
                }
            }
        }

        Ok(())
    }
}
