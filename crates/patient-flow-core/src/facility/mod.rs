//! Facility coordinator.
//!
//! Owns the patient index, every doctor's schedule, both waiting lines and
//! the undo log, plus the id counters. It is the only writer of any of them,
//! so each operation either completes or compensates what it already changed
//! before returning an error.
//!
//! The booking rollback touches a schedule and the routine queue one after
//! the other. That is only safe because operations never interleave; a
//! shared facility must sit behind a single lock.

mod outcome;
mod report;
mod setup;

pub use outcome::*;
pub use report::*;

use std::collections::BTreeMap;

use chrono::NaiveTime;
use thiserror::Error;

use crate::config::{
    ConfigError, DEFAULT_FIRST_PATIENT_ID, DEFAULT_FIRST_SLOT_ID, DEFAULT_FIRST_TOKEN_ID,
};
use crate::index::{IndexError, PatientIndex};
use crate::models::{
    Doctor, DoctorId, Patient, PatientId, ServiceKind, Severity, Slot, SlotId, SlotStatus, Token,
    TokenId, UndoAction,
};
use crate::queue::{QueueError, RoutineQueue, TriageQueue};
use crate::schedule::SlotSchedule;
use crate::undo::ActionLog;

/// Facility errors.
#[derive(Error, Debug)]
pub enum FacilityError {
    #[error("Patient not found.")]
    PatientNotFound(PatientId),

    #[error("Doctor not found.")]
    DoctorNotFound(DoctorId),

    #[error("No free slots for Doctor {0}")]
    NoFreeSlots(DoctorId),

    #[error("Slot {slot_id} not found for Doctor {doctor_id}")]
    SlotNotFound { doctor_id: DoctorId, slot_id: SlotId },

    #[error("Booking failed due to queue overflow.")]
    QueueFull { capacity: usize },

    #[error("No {0} ids left to issue")]
    IdsExhausted(&'static str),

    #[error("Patient id {0} is already registered")]
    DuplicatePatient(PatientId),

    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<IndexError> for FacilityError {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::NotFound(id) => FacilityError::PatientNotFound(id),
        }
    }
}

pub type FacilityResult<T> = Result<T, FacilityError>;

/// Sequential id source. Issues `u32::MAX` once, then reports exhaustion
/// instead of wrapping.
#[derive(Debug, Clone, Copy)]
struct IdCounter {
    next: Option<u32>,
    kind: &'static str,
}

impl IdCounter {
    fn starting_at(first: u32, kind: &'static str) -> Self {
        Self {
            next: Some(first),
            kind,
        }
    }

    fn issue(&mut self) -> FacilityResult<u32> {
        let id = self.next.ok_or(FacilityError::IdsExhausted(self.kind))?;
        self.next = id.checked_add(1);
        Ok(id)
    }
}

/// Single-facility patient-flow engine.
#[derive(Debug)]
pub struct FacilityCoordinator {
    patients: PatientIndex,
    doctors: BTreeMap<DoctorId, Doctor>,
    schedules: BTreeMap<DoctorId, SlotSchedule>,
    routine: RoutineQueue,
    triage: TriageQueue,
    log: ActionLog,
    patient_ids: IdCounter,
    token_ids: IdCounter,
    slot_ids: IdCounter,
    served_count: u64,
}

impl Default for FacilityCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl FacilityCoordinator {
    /// Create an empty facility (no doctors) with default capacity and
    /// id bases.
    pub fn new() -> Self {
        Self::with_parts(
            RoutineQueue::default(),
            DEFAULT_FIRST_PATIENT_ID,
            DEFAULT_FIRST_TOKEN_ID,
            DEFAULT_FIRST_SLOT_ID,
        )
    }

    fn with_parts(
        routine: RoutineQueue,
        first_patient_id: PatientId,
        first_token_id: TokenId,
        first_slot_id: SlotId,
    ) -> Self {
        Self {
            patients: PatientIndex::new(),
            doctors: BTreeMap::new(),
            schedules: BTreeMap::new(),
            routine,
            triage: TriageQueue::new(),
            log: ActionLog::new(),
            patient_ids: IdCounter::starting_at(first_patient_id, "patient"),
            token_ids: IdCounter::starting_at(first_token_id, "token"),
            slot_ids: IdCounter::starting_at(first_slot_id, "slot"),
            served_count: 0,
        }
    }

    // =========================================================================
    // Doctors and schedules
    // =========================================================================

    /// Register a doctor, creating an empty schedule if none exists yet.
    /// Returns the replaced registry entry, if any.
    pub fn add_doctor(&mut self, doctor: Doctor) -> Option<Doctor> {
        self.schedules.entry(doctor.id).or_default();
        self.doctors.insert(doctor.id, doctor)
    }

    pub fn doctor(&self, doctor_id: DoctorId) -> Option<&Doctor> {
        self.doctors.get(&doctor_id)
    }

    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> + '_ {
        self.doctors.values()
    }

    /// Add a free slot to a doctor's schedule, creating the schedule on
    /// demand. Not recorded in the undo log.
    pub fn add_slot(
        &mut self,
        doctor_id: DoctorId,
        start: NaiveTime,
        end: NaiveTime,
    ) -> FacilityResult<SlotId> {
        let slot_id = self.slot_ids.issue()?;

        self.schedules
            .entry(doctor_id)
            .or_default()
            .insert(slot_id, start, end);
        Ok(slot_id)
    }

    /// Remove a slot from a doctor's schedule and record a `cancel` action.
    pub fn cancel_slot(&mut self, doctor_id: DoctorId, slot_id: SlotId) -> FacilityResult<Slot> {
        let schedule = self
            .schedules
            .get_mut(&doctor_id)
            .ok_or(FacilityError::DoctorNotFound(doctor_id))?;
        let slot = schedule
            .cancel(slot_id)
            .ok_or(FacilityError::SlotNotFound { doctor_id, slot_id })?;

        tracing::info!(doctor_id, slot_id, status = %slot.status, "Slot cancelled");
        self.log.push(UndoAction::Cancel { doctor_id, slot_id });
        Ok(slot)
    }

    pub fn schedule(&self, doctor_id: DoctorId) -> Option<&SlotSchedule> {
        self.schedules.get(&doctor_id)
    }

    // =========================================================================
    // Patients
    // =========================================================================

    /// Register a new patient and record a `register` action.
    ///
    /// Fails only when the id space is exhausted; nothing is logged then.
    pub fn register_patient(
        &mut self,
        name: impl Into<String>,
        age: u32,
        severity: Severity,
    ) -> FacilityResult<PatientId> {
        let patient_id = self.patient_ids.issue()?;

        if !self
            .patients
            .create(Patient::new(patient_id, name, age, severity))
        {
            tracing::warn!(patient_id, "Issued patient id already in the index");
            return Err(FacilityError::DuplicatePatient(patient_id));
        }

        tracing::info!(patient_id, "Patient registered");
        self.log.push(UndoAction::Register { patient_id });
        Ok(patient_id)
    }

    /// Replace a patient's record. Not recorded in the undo log.
    pub fn update_patient(
        &mut self,
        patient_id: PatientId,
        name: impl Into<String>,
        age: u32,
        severity: Severity,
    ) -> FacilityResult<()> {
        self.patients
            .update(patient_id, Patient::new(patient_id, name, age, severity))?;
        tracing::info!(patient_id, "Patient updated");
        Ok(())
    }

    pub fn patient(&self, patient_id: PatientId) -> Option<&Patient> {
        self.patients.read(patient_id)
    }

    pub fn patients(&self) -> &PatientIndex {
        &self.patients
    }

    // =========================================================================
    // Booking and triage
    // =========================================================================

    /// Book the doctor's next free slot and queue a routine token.
    ///
    /// If the routine queue is full the slot goes back to `Free` and nothing
    /// is logged. The token id drawn for the failed attempt is not reused.
    pub fn book_appointment(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
    ) -> FacilityResult<Booking> {
        if !self.patients.contains(patient_id) {
            return Err(FacilityError::PatientNotFound(patient_id));
        }

        let schedule = self
            .schedules
            .get_mut(&doctor_id)
            .ok_or(FacilityError::DoctorNotFound(doctor_id))?;
        let slot_id = schedule
            .find_next_free()
            .map(|slot| slot.id)
            .ok_or(FacilityError::NoFreeSlots(doctor_id))?;

        // Draw the token id before touching the slot
        let token_id = self.token_ids.issue()?;
        schedule.update_status(slot_id, SlotStatus::Booked);

        let token = Token {
            id: token_id,
            patient_id,
            doctor_id,
            slot_id,
        };

        if let Err(e) = self.routine.enqueue(token) {
            schedule.update_status(slot_id, SlotStatus::Free);
            tracing::warn!(patient_id, doctor_id, slot_id, "Booking rolled back: {e}");
            return Err(match e {
                QueueError::Full { capacity } => FacilityError::QueueFull { capacity },
                other => other.into(),
            });
        }

        tracing::info!(patient_id, doctor_id, slot_id, token_id, "Appointment booked");
        self.log.push(UndoAction::Book { token_id });
        Ok(Booking {
            token_id,
            patient_id,
            doctor_id,
            slot_id,
        })
    }

    /// Admit a registered patient to triage.
    ///
    /// `doctor_id` is accepted for interface compatibility but is neither
    /// validated nor stored; doctor assignment happens outside triage.
    pub fn emergency_in(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        severity: Severity,
    ) -> FacilityResult<TriageAdmission> {
        if !self.patients.contains(patient_id) {
            return Err(FacilityError::PatientNotFound(patient_id));
        }

        self.triage.insert(patient_id, severity);
        tracing::debug!(doctor_id, triage_size = self.triage.size(), "Triage doctor ignored");
        tracing::info!(patient_id, severity, "Emergency triaged");
        self.log.push(UndoAction::Triage {
            patient_id,
            severity,
        });
        Ok(TriageAdmission {
            patient_id,
            severity,
        })
    }

    // =========================================================================
    // Service
    // =========================================================================

    /// Serve the next patient. Triage always goes before the routine queue.
    pub fn serve_next_patient(&mut self) -> ServeOutcome {
        if let Some(entry) = self.triage.extract_min() {
            let patient_name = self.patient_name(entry.patient_id);
            self.served_count += 1;

            tracing::info!(
                patient_id = entry.patient_id,
                severity = entry.severity,
                "Serving emergency"
            );
            self.log.push(UndoAction::Serve {
                patient_id: entry.patient_id,
                kind: ServiceKind::Emergency,
            });
            return ServeOutcome::Emergency {
                patient_id: entry.patient_id,
                severity: entry.severity,
                patient_name,
            };
        }

        let Some(token) = self.routine.dequeue() else {
            return ServeOutcome::Idle;
        };

        let patient_name = self.patient_name(token.patient_id);
        match self.schedules.get_mut(&token.doctor_id) {
            Some(schedule) => {
                if !schedule.update_status(token.slot_id, SlotStatus::Served) {
                    tracing::debug!(slot_id = token.slot_id, "Served token's slot was cancelled");
                }
            }
            None => tracing::debug!(doctor_id = token.doctor_id, "Served token's doctor unknown"),
        }
        self.served_count += 1;

        tracing::info!(
            patient_id = token.patient_id,
            token_id = token.id,
            "Serving routine appointment"
        );
        self.log.push(UndoAction::Serve {
            patient_id: token.patient_id,
            kind: ServiceKind::Routine,
        });
        ServeOutcome::Routine {
            token,
            patient_name,
        }
    }

    fn patient_name(&self, patient_id: PatientId) -> Option<String> {
        let name = self.patients.read(patient_id).map(|p| p.name.clone());
        if name.is_none() {
            tracing::warn!(patient_id, "Served patient missing from index");
        }
        name
    }

    // =========================================================================
    // Undo
    // =========================================================================

    /// Pop the pending action and reverse it where supported.
    ///
    /// Only registrations are reversed. Reversing a registration does not
    /// touch tokens or triage entries already created for that patient.
    pub fn undo_last_action(&mut self) -> UndoOutcome {
        let Some(action) = self.log.pop() else {
            return UndoOutcome::NothingToUndo;
        };

        match action {
            UndoAction::Register { patient_id } => {
                if self.patients.delete(patient_id).is_err() {
                    tracing::warn!(patient_id, "Registration to undo was already gone");
                }
                tracing::info!(patient_id, "Registration undone");
                UndoOutcome::RegistrationReverted { patient_id }
            }
            action @ (UndoAction::Book { .. } | UndoAction::Serve { .. }) => {
                UndoOutcome::NotReversible { action }
            }
            action => UndoOutcome::Unimplemented { action },
        }
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }

    // =========================================================================
    // Queues and reporting
    // =========================================================================

    pub fn routine_queue(&self) -> &RoutineQueue {
        &self.routine
    }

    pub fn triage_queue(&self) -> &TriageQueue {
        &self.triage
    }

    pub fn served_count(&self) -> u64 {
        self.served_count
    }

    /// Routine tokens plus triage entries still waiting.
    pub fn pending_count(&self) -> usize {
        self.routine.size() + self.triage.size()
    }

    /// Summarize schedules and waiting lines without mutating anything.
    pub fn generate_report(&self) -> FacilityReport {
        let doctors = self
            .schedules
            .iter()
            .map(|(doctor_id, schedule)| DoctorSummary {
                doctor_id: *doctor_id,
                doctor_name: self.doctors.get(doctor_id).map(|d| d.name.clone()),
                booked_slots: schedule.count_with_status(SlotStatus::Booked),
                next_free: schedule.find_next_free().map(|slot| FreeSlot {
                    slot_id: slot.id,
                    start: slot.start,
                }),
            })
            .collect();

        FacilityReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            doctors,
            served_total: self.served_count,
            pending_routine: self.routine.size(),
            pending_emergency: self.triage.size(),
        }
    }
}
