//! Patient lookup index.
//!
//! The single source of truth for patient existence. Keyed by patient id,
//! no secondary indexes.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Patient, PatientId};

/// Index errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Patient not found: {0}")]
    NotFound(PatientId),
}

pub type IndexResult<T> = Result<T, IndexError>;

/// Direct-lookup map from patient id to record.
#[derive(Debug, Clone, Default)]
pub struct PatientIndex {
    table: HashMap<PatientId, Patient>,
}

impl PatientIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record. Returns `false`, leaving the existing record
    /// untouched, if the id is already taken.
    pub fn create(&mut self, patient: Patient) -> bool {
        if self.table.contains_key(&patient.id) {
            return false;
        }
        self.table.insert(patient.id, patient);
        true
    }

    pub fn read(&self, id: PatientId) -> Option<&Patient> {
        self.table.get(&id)
    }

    /// Replace an existing record. This is not an upsert.
    pub fn update(&mut self, id: PatientId, mut patient: Patient) -> IndexResult<()> {
        let slot = self.table.get_mut(&id).ok_or(IndexError::NotFound(id))?;
        patient.id = id;
        *slot = patient;
        Ok(())
    }

    /// Remove a record, returning it.
    pub fn delete(&mut self, id: PatientId) -> IndexResult<Patient> {
        self.table.remove(&id).ok_or(IndexError::NotFound(id))
    }

    pub fn contains(&self, id: PatientId) -> bool {
        self.table.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
