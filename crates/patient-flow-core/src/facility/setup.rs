//! Building a facility from configuration.

use crate::config::{ConfigError, FacilityConfig};
use crate::models::{parse_slot_time, Doctor};
use crate::queue::RoutineQueue;

use super::{FacilityCoordinator, FacilityResult};

impl FacilityCoordinator {
    /// Build a facility from a validated config, seeding its doctors and
    /// slots. Seeding does not touch the undo log.
    pub fn from_config(config: &FacilityConfig) -> FacilityResult<Self> {
        config.validate()?;

        let routine = RoutineQueue::with_capacity(config.routine_capacity)?;
        let mut facility = Self::with_parts(
            routine,
            config.first_patient_id,
            config.first_token_id,
            config.first_slot_id,
        );

        for seed in &config.doctors {
            facility.add_doctor(Doctor::new(
                seed.id,
                seed.name.clone(),
                seed.specialization.clone(),
            ));
            for slot in &seed.slots {
                let start = parse_slot_time(&slot.start)
                    .map_err(|e| ConfigError::Invalid(format!("slot start: {e}")))?;
                let end = parse_slot_time(&slot.end)
                    .map_err(|e| ConfigError::Invalid(format!("slot end: {e}")))?;
                facility.add_slot(seed.id, start, end)?;
            }
        }

        tracing::info!(
            doctors = config.doctors.len(),
            routine_capacity = config.routine_capacity,
            "Facility seeded"
        );
        Ok(facility)
    }

    /// Facility with the stock two-doctor seed.
    pub fn seeded() -> FacilityResult<Self> {
        Self::from_config(&FacilityConfig::default())
    }
}
