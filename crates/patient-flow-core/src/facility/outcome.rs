//! Success outcomes of facility operations.
//!
//! Failures are `FacilityError`s. Empty structures and non-reversible undo
//! requests are not failures and show up here as ordinary variants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{DoctorId, PatientId, Severity, SlotId, Token, TokenId, UndoAction};

const UNREGISTERED: &str = "<unregistered>";

/// A routine appointment that was booked and queued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub token_id: TokenId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub slot_id: SlotId,
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Routine Appointment booked. Token ID: {}, Slot: {}",
            self.token_id, self.slot_id
        )
    }
}

/// An emergency admission placed into triage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriageAdmission {
    pub patient_id: PatientId,
    pub severity: Severity,
}

impl fmt::Display for TriageAdmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Emergency Case triaged. Patient ID: {}, Severity: {}",
            self.patient_id, self.severity
        )
    }
}

/// Result of a serve request.
///
/// `patient_name` is `None` only if the queued patient is missing from the
/// index. The coordinator never produces that: a registration stops being
/// undoable as soon as the patient is booked or triaged. The `Option` is a
/// fallback so a served entry is never dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServeOutcome {
    Emergency {
        patient_id: PatientId,
        severity: Severity,
        patient_name: Option<String>,
    },
    Routine {
        token: Token,
        patient_name: Option<String>,
    },
    /// Both triage and the routine queue were empty
    Idle,
}

impl ServeOutcome {
    pub fn patient_id(&self) -> Option<PatientId> {
        match self {
            ServeOutcome::Emergency { patient_id, .. } => Some(*patient_id),
            ServeOutcome::Routine { token, .. } => Some(token.patient_id),
            ServeOutcome::Idle => None,
        }
    }
}

impl fmt::Display for ServeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeOutcome::Emergency {
                patient_id,
                patient_name,
                ..
            } => write!(
                f,
                "Serving EMERGENCY Patient: {} (ID: {})",
                patient_name.as_deref().unwrap_or(UNREGISTERED),
                patient_id
            ),
            ServeOutcome::Routine {
                token,
                patient_name,
            } => write!(
                f,
                "Serving ROUTINE Appointment: {} (Token ID: {})",
                patient_name.as_deref().unwrap_or(UNREGISTERED),
                token.id
            ),
            ServeOutcome::Idle => f.write_str("No patients in queue or triage."),
        }
    }
}

/// Result of an undo request. The pending action is consumed in every case
/// except `NothingToUndo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum UndoOutcome {
    NothingToUndo,
    RegistrationReverted { patient_id: PatientId },
    /// The action kind can never be undone (bookings and service)
    NotReversible { action: UndoAction },
    /// Undo of this action kind is not supported yet (cancel and triage)
    Unimplemented { action: UndoAction },
}

impl fmt::Display for UndoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoOutcome::NothingToUndo => f.write_str("No actions to undo."),
            UndoOutcome::RegistrationReverted { patient_id } => {
                write!(f, "Undid Patient Registration for ID: {}", patient_id)
            }
            UndoOutcome::NotReversible {
                action: action @ UndoAction::Serve { .. },
            } => write!(f, "Cannot logically undo serving a patient. Logged: {}", action),
            UndoOutcome::NotReversible { action } => write!(
                f,
                "Undo for action type '{}' is not supported. Logged: {}",
                action.tag(),
                action
            ),
            UndoOutcome::Unimplemented { action } => write!(
                f,
                "Undo for action type '{}' is not implemented.",
                action.tag()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceKind;

    #[test]
    fn test_booking_message() {
        let booking = Booking {
            token_id: 1,
            patient_id: 1001,
            doctor_id: 1,
            slot_id: 102,
        };
        assert_eq!(
            booking.to_string(),
            "Routine Appointment booked. Token ID: 1, Slot: 102"
        );
    }

    #[test]
    fn test_serve_messages() {
        let emergency = ServeOutcome::Emergency {
            patient_id: 1001,
            severity: 2,
            patient_name: Some("Alice".into()),
        };
        assert_eq!(
            emergency.to_string(),
            "Serving EMERGENCY Patient: Alice (ID: 1001)"
        );

        let orphan = ServeOutcome::Routine {
            token: Token {
                id: 4,
                patient_id: 1003,
                doctor_id: 2,
                slot_id: 103,
            },
            patient_name: None,
        };
        assert_eq!(
            orphan.to_string(),
            "Serving ROUTINE Appointment: <unregistered> (Token ID: 4)"
        );
        assert_eq!(orphan.patient_id(), Some(1003));
        assert_eq!(ServeOutcome::Idle.patient_id(), None);
    }

    #[test]
    fn test_undo_messages() {
        assert_eq!(UndoOutcome::NothingToUndo.to_string(), "No actions to undo.");

        let serve = UndoOutcome::NotReversible {
            action: UndoAction::Serve {
                patient_id: 1001,
                kind: ServiceKind::Emergency,
            },
        };
        assert!(serve.to_string().starts_with("Cannot logically undo serving"));

        let book = UndoOutcome::NotReversible {
            action: UndoAction::Book { token_id: 3 },
        };
        assert!(book.to_string().contains("'book'"));

        let triage = UndoOutcome::Unimplemented {
            action: UndoAction::Triage {
                patient_id: 1001,
                severity: 2,
            },
        };
        assert_eq!(
            triage.to_string(),
            "Undo for action type 'triage' is not implemented."
        );
    }
}
