//! Routine booking tokens.

use serde::{Deserialize, Serialize};

use super::{DoctorId, PatientId, SlotId};

/// Token identifier, issued sequentially by the facility.
pub type TokenId = u32;

/// A routine booking ticket linking a patient to a booked slot.
///
/// Created at booking time and consumed exactly once when served.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub slot_id: SlotId,
}
