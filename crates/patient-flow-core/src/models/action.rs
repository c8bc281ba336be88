//! Undo journal entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DoctorId, PatientId, Severity, SlotId, TokenId};

/// Which line a served patient came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceKind {
    Emergency,
    Routine,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Emergency => f.write_str("EMERGENCY"),
            ServiceKind::Routine => f.write_str("ROUTINE"),
        }
    }
}

/// A recorded operation that an undo request may target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UndoAction {
    Register {
        patient_id: PatientId,
    },
    Cancel {
        doctor_id: DoctorId,
        slot_id: SlotId,
    },
    Book {
        token_id: TokenId,
    },
    Triage {
        patient_id: PatientId,
        severity: Severity,
    },
    Serve {
        patient_id: PatientId,
        kind: ServiceKind,
    },
}

impl UndoAction {
    /// Short tag naming the action kind.
    pub fn tag(&self) -> &'static str {
        match self {
            UndoAction::Register { .. } => "register",
            UndoAction::Cancel { .. } => "cancel",
            UndoAction::Book { .. } => "book",
            UndoAction::Triage { .. } => "triage",
            UndoAction::Serve { .. } => "serve",
        }
    }
}

impl fmt::Display for UndoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoAction::Register { patient_id } => write!(f, "register(patient {})", patient_id),
            UndoAction::Cancel { doctor_id, slot_id } => {
                write!(f, "cancel(doctor {}, slot {})", doctor_id, slot_id)
            }
            UndoAction::Book { token_id } => write!(f, "book(token {})", token_id),
            UndoAction::Triage {
                patient_id,
                severity,
            } => write!(f, "triage(patient {}, severity {})", patient_id, severity),
            UndoAction::Serve { patient_id, kind } => {
                write!(f, "serve(patient {}, {})", patient_id, kind)
            }
        }
    }
}
