//! Patient-Flow Core Library
//!
//! Single-facility patient-flow engine: registration, routine booking,
//! emergency triage, priority service and last-action undo.
//!
//! # Architecture
//!
//! ```text
//!                      requests
//!                         │
//!             ┌───────────▼────────────┐
//!             │  FacilityCoordinator   │  id counters, served count
//!             └───┬──────┬──────┬───┬──┘
//!                 │      │      │   │
//!     ┌───────────▼┐ ┌───▼────┐ │ ┌─▼──────────┐
//!     │PatientIndex│ │Schedule│ │ │ ActionLog  │
//!     └────────────┘ │per doc │ │ │ (depth 1)  │
//!                    └────────┘ │ └────────────┘
//!                   ┌───────────┴───────────┐
//!                   ▼                       ▼
//!            RoutineQueue              TriageQueue
//!          (ring buffer, 10)        (min-heap on severity)
//!                   │                       │
//!                   └──────► serve ◄────────┘
//!                       (triage first)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Slot, Token, Doctor, UndoAction)
//! - [`schedule`]: Per-doctor slot schedule
//! - [`queue`]: Routine ring buffer and triage heap
//! - [`index`]: Patient lookup index
//! - [`undo`]: Single-entry undo log
//! - [`facility`]: Coordinator, outcomes and reports
//! - [`config`]: JSON configuration and seed data

pub mod config;
pub mod facility;
pub mod index;
pub mod models;
pub mod queue;
pub mod schedule;
pub mod undo;

// Re-export commonly used types
pub use config::{ConfigError, FacilityConfig};
pub use facility::{
    Booking, FacilityCoordinator, FacilityError, FacilityReport, FacilityResult, ServeOutcome,
    TriageAdmission, UndoOutcome,
};
pub use index::PatientIndex;
pub use models::{
    Doctor, DoctorId, Patient, PatientId, ServiceKind, Severity, Slot, SlotId, SlotStatus, Token,
    TokenId, UndoAction,
};
pub use queue::{RoutineQueue, TriageEntry, TriageQueue};
pub use schedule::SlotSchedule;
pub use undo::ActionLog;
