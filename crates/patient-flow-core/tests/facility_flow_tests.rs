//! End-to-end facility flow tests.

use patient_flow_core::config::FacilityConfig;
use patient_flow_core::facility::{FacilityCoordinator, FacilityError, ServeOutcome, UndoOutcome};
use patient_flow_core::models::{ServiceKind, SlotStatus, UndoAction};

fn facility_with_capacity(capacity: usize) -> FacilityCoordinator {
    let config = FacilityConfig {
        routine_capacity: capacity,
        ..FacilityConfig::default()
    };
    FacilityCoordinator::from_config(&config).unwrap()
}

#[test]
fn test_emergency_served_before_earlier_routine() {
    let mut facility = FacilityCoordinator::seeded().unwrap();

    let bob = facility.register_patient("Bob", 52, 6).unwrap();
    facility.book_appointment(bob, 2).unwrap();

    let alice = facility.register_patient("Alice", 30, 5).unwrap();
    assert_eq!(alice, 1002);

    let admission = facility.emergency_in(alice, 1, 2).unwrap();
    assert_eq!(
        admission.to_string(),
        "Emergency Case triaged. Patient ID: 1002, Severity: 2"
    );

    let err = facility.emergency_in(1003, 1, 2).unwrap_err();
    assert!(matches!(err, FacilityError::PatientNotFound(1003)));
    assert_eq!(err.to_string(), "Patient not found.");

    match facility.serve_next_patient() {
        ServeOutcome::Emergency {
            patient_id,
            patient_name,
            severity,
        } => {
            assert_eq!(patient_id, alice);
            assert_eq!(patient_name.as_deref(), Some("Alice"));
            assert_eq!(severity, 2);
        }
        other => panic!("expected emergency, got {:?}", other),
    }

    let routine = facility.serve_next_patient();
    assert_eq!(routine.patient_id(), Some(bob));
    assert_eq!(facility.serve_next_patient(), ServeOutcome::Idle);
    assert_eq!(facility.served_count(), 2);
}

#[test]
fn test_first_registration_gets_1001() {
    let mut facility = FacilityCoordinator::seeded().unwrap();
    let alice = facility.register_patient("Alice", 30, 5).unwrap();
    assert_eq!(alice, 1001);
    assert!(facility.emergency_in(alice, 1, 2).is_ok());
    assert_eq!(
        facility.serve_next_patient().to_string(),
        "Serving EMERGENCY Patient: Alice (ID: 1001)"
    );
}

#[test]
fn test_no_free_slots_leaves_index_and_log_unchanged() {
    let mut facility = FacilityCoordinator::seeded().unwrap();
    let alice = facility.register_patient("Alice", 30, 5).unwrap();
    facility.book_appointment(alice, 1).unwrap();
    facility.book_appointment(alice, 1).unwrap();

    let patients_before = facility.patients().len();
    let log_before = facility.action_log().last().cloned();

    let err = facility.book_appointment(alice, 1).unwrap_err();
    assert!(matches!(err, FacilityError::NoFreeSlots(1)));

    assert_eq!(facility.patients().len(), patients_before);
    assert_eq!(facility.action_log().last().cloned(), log_before);
    assert_eq!(facility.routine_queue().size(), 2);
}

#[test]
fn test_overflow_restores_slot_and_skips_log() {
    let mut facility = facility_with_capacity(2);
    let alice = facility.register_patient("Alice", 30, 5).unwrap();
    facility.book_appointment(alice, 1).unwrap();
    facility.book_appointment(alice, 1).unwrap();

    let log_before = facility.action_log().last().cloned();
    let err = facility.book_appointment(alice, 2).unwrap_err();
    assert!(matches!(err, FacilityError::QueueFull { capacity: 2 }));
    assert_eq!(err.to_string(), "Booking failed due to queue overflow.");

    let schedule = facility.schedule(2).unwrap();
    assert_eq!(schedule.count_with_status(SlotStatus::Booked), 0);
    assert_eq!(schedule.find_next_free().map(|s| s.id), Some(104));
    assert_eq!(facility.action_log().last().cloned(), log_before);
    assert_eq!(facility.routine_queue().size(), 2);
}

#[test]
fn test_default_queue_fills_at_ten() {
    let mut facility = FacilityCoordinator::new();
    let alice = facility.register_patient("Alice", 30, 5).unwrap();
    for hour in 0..11 {
        let start = chrono::NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
        let end = chrono::NaiveTime::from_hms_opt(hour, 30, 0).unwrap();
        facility.add_slot(1, start, end).unwrap();
    }

    for _ in 0..10 {
        facility.book_appointment(alice, 1).unwrap();
    }
    assert!(facility.routine_queue().is_full());
    assert!(matches!(
        facility.book_appointment(alice, 1),
        Err(FacilityError::QueueFull { capacity: 10 })
    ));
    assert_eq!(
        facility
            .schedule(1)
            .unwrap()
            .count_with_status(SlotStatus::Free),
        1
    );
}

#[test]
fn test_undo_registration_twice() {
    let mut facility = FacilityCoordinator::seeded().unwrap();
    let alice = facility.register_patient("Alice", 30, 5).unwrap();
    let bob = facility.register_patient("Bob", 41, 4).unwrap();

    assert_eq!(
        facility.undo_last_action(),
        UndoOutcome::RegistrationReverted { patient_id: bob }
    );
    assert!(facility.patient(bob).is_none());
    assert!(facility.patient(alice).is_some());
    assert_eq!(facility.patients().len(), 1);

    let second = facility.undo_last_action();
    assert_eq!(second, UndoOutcome::NothingToUndo);
    assert_eq!(second.to_string(), "No actions to undo.");
}

#[test]
fn test_queued_patient_registration_no_longer_undoable() {
    let mut facility = FacilityCoordinator::seeded().unwrap();
    let alice = facility.register_patient("Alice", 30, 5).unwrap();
    facility.emergency_in(alice, 1, 4).unwrap();

    // The triage action superseded the registration
    assert!(matches!(
        facility.undo_last_action(),
        UndoOutcome::Unimplemented {
            action: UndoAction::Triage { .. }
        }
    ));
    assert_eq!(facility.undo_last_action(), UndoOutcome::NothingToUndo);
    assert!(facility.patient(alice).is_some());

    assert_eq!(
        facility.serve_next_patient().to_string(),
        "Serving EMERGENCY Patient: Alice (ID: 1001)"
    );
}

#[test]
fn test_undone_registration_blocks_booking() {
    let mut facility = FacilityCoordinator::seeded().unwrap();
    let ghost = facility.register_patient("Ghost", 30, 5).unwrap();
    facility.undo_last_action();
    assert!(facility.patient(ghost).is_none());

    assert!(matches!(
        facility.book_appointment(ghost, 1),
        Err(FacilityError::PatientNotFound(_))
    ));
    assert!(matches!(
        facility.emergency_in(ghost, 1, 1),
        Err(FacilityError::PatientNotFound(_))
    ));
    assert_eq!(facility.pending_count(), 0);

    // Ids are never reissued
    assert_eq!(facility.register_patient("Next", 20, 5).unwrap(), ghost + 1);
}

#[test]
fn test_full_day_walkthrough() {
    let mut facility = FacilityCoordinator::seeded().unwrap();

    let alice = facility.register_patient("Alice", 30, 5).unwrap();
    let bob = facility.register_patient("Bob", 45, 7).unwrap();
    let carol = facility.register_patient("Carol", 8, 3).unwrap();

    let a = facility.book_appointment(alice, 1).unwrap();
    let b = facility.book_appointment(bob, 1).unwrap();
    assert_eq!((a.slot_id, b.slot_id), (102, 101));
    facility.emergency_in(carol, 2, 3).unwrap();
    facility.emergency_in(bob, 2, 1).unwrap();

    let served: Vec<_> = std::iter::from_fn(|| match facility.serve_next_patient() {
        ServeOutcome::Idle => None,
        other => Some(other),
    })
    .collect();

    let order: Vec<_> = served.iter().filter_map(|o| o.patient_id()).collect();
    assert_eq!(order, vec![bob, carol, alice, bob]);
    assert_eq!(facility.served_count(), 4);
    assert_eq!(
        facility.action_log().last(),
        Some(&UndoAction::Serve {
            patient_id: bob,
            kind: ServiceKind::Routine
        })
    );

    let report = facility.generate_report();
    assert_eq!(report.doctors[0].booked_slots, 0);
    assert!(report.doctors[0].next_free.is_none());
    assert_eq!(report.pending_total(), 0);
    let text = report.to_string();
    assert!(text.contains("Doctor 1 (Dr. Smith): 0 booked slots. Next Free Slot: N/A"));
    assert!(text.contains("Doctor 2 (Dr. Jones): 0 booked slots. Next Free Slot: Slot 104 at 10:30"));
    assert!(text.ends_with("Total Pending Patients: 0"));
}
