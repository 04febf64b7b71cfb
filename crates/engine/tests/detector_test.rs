use std::collections::BTreeSet;

use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;
use timegrid_core::models::conflict::{ConflictType, Severity};
use timegrid_core::models::slot::{CreateSlotRequest, TimetableSlot};
use timegrid_core::models::time_slot::{TimeSlot, WeekDay};
use timegrid_engine::detect;

fn slot(
    day: WeekDay,
    start: &str,
    end: &str,
    teacher: Option<&str>,
    room: Option<&str>,
) -> TimetableSlot {
    let request = CreateSlotRequest {
        time_slot: TimeSlot::new(day, start, end),
        subject_id: None,
        teacher_id: teacher.map(str::to_string),
        room_id: room.map(str::to_string),
        student_groups: BTreeSet::new(),
        is_locked: false,
    };
    TimetableSlot::from_request(request, Utc::now())
}

#[test]
fn test_overlapping_teacher_slots_yield_one_conflict() {
    let a = slot(WeekDay::Monday, "09:00", "10:00", Some("teacher-1"), None);
    let b = slot(WeekDay::Monday, "09:30", "10:30", Some("teacher-1"), None);

    let conflicts = detect(&[a.clone(), b.clone()]);

    assert_eq!(conflicts.len(), 1);
    let conflict = &conflicts[0];
    assert_eq!(conflict.conflict_type, ConflictType::TeacherOverlap);
    assert_eq!(conflict.severity, Severity::Error);
    assert_eq!(conflict.affected_slots, vec![a.id, b.id]);
    assert_eq!(conflict.affected_entities.teachers, vec!["teacher-1"]);
    assert!(!conflict.suggestions.is_empty());
    assert!(!conflict.is_resolved);
}

#[test]
fn test_different_days_never_conflict() {
    let a = slot(WeekDay::Monday, "09:00", "10:00", Some("teacher-1"), None);
    let b = slot(WeekDay::Tuesday, "09:30", "10:30", Some("teacher-1"), None);

    assert_eq!(detect(&[a, b]), vec![]);
}

#[test]
fn test_touching_slots_do_not_conflict() {
    let a = slot(WeekDay::Monday, "09:00", "10:00", Some("teacher-1"), None);
    let b = slot(WeekDay::Monday, "10:00", "11:00", Some("teacher-1"), None);

    assert_eq!(detect(&[a, b]), vec![]);
}

#[test]
fn test_room_overlap() {
    let a = slot(WeekDay::Friday, "13:00", "15:00", None, Some("room-101"));
    let b = slot(WeekDay::Friday, "14:00", "16:00", None, Some("room-101"));

    let conflicts = detect(&[a.clone(), b.clone()]);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].conflict_type, ConflictType::RoomOverlap);
    assert_eq!(conflicts[0].affected_slots, vec![a.id, b.id]);
    assert_eq!(conflicts[0].affected_entities.rooms, vec!["room-101"]);
}

#[test]
fn test_shared_teacher_and_room_yield_two_conflicts() {
    let a = slot(
        WeekDay::Wednesday,
        "09:00",
        "10:00",
        Some("teacher-1"),
        Some("room-101"),
    );
    let b = slot(
        WeekDay::Wednesday,
        "09:30",
        "10:30",
        Some("teacher-1"),
        Some("room-101"),
    );

    let conflicts = detect(&[a, b]);

    // Teacher pass runs before the room pass
    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].conflict_type, ConflictType::TeacherOverlap);
    assert_eq!(conflicts[1].conflict_type, ConflictType::RoomOverlap);
}

#[rstest]
#[case(None, Some("room-101"), None, Some("room-102"))] // different rooms
#[case(Some("teacher-1"), None, Some("teacher-2"), None)] // different teachers
#[case(None, None, None, None)] // nothing assigned
fn test_distinct_or_unassigned_entities_do_not_conflict(
    #[case] teacher_a: Option<&str>,
    #[case] room_a: Option<&str>,
    #[case] teacher_b: Option<&str>,
    #[case] room_b: Option<&str>,
) {
    let a = slot(WeekDay::Monday, "09:00", "10:00", teacher_a, room_a);
    let b = slot(WeekDay::Monday, "09:00", "10:00", teacher_b, room_b);

    assert_eq!(detect(&[a, b]), vec![]);
}

#[test]
fn test_every_overlapping_pair_is_reported() {
    let a = slot(WeekDay::Monday, "09:00", "12:00", Some("teacher-1"), None);
    let b = slot(WeekDay::Monday, "09:30", "10:30", Some("teacher-1"), None);
    let c = slot(WeekDay::Monday, "10:00", "11:00", Some("teacher-1"), None);

    let conflicts = detect(&[a.clone(), b.clone(), c.clone()]);

    assert_eq!(conflicts.len(), 3);
    assert_eq!(conflicts[0].affected_slots, vec![a.id, b.id]);
    assert_eq!(conflicts[1].affected_slots, vec![a.id, c.id]);
    assert_eq!(conflicts[2].affected_slots, vec![b.id, c.id]);
}

#[test]
fn test_detect_is_idempotent_up_to_id() {
    let slots = vec![
        slot(WeekDay::Monday, "09:00", "10:00", Some("teacher-1"), None),
        slot(WeekDay::Monday, "09:30", "10:30", Some("teacher-1"), None),
        slot(WeekDay::Tuesday, "09:00", "11:00", None, Some("room-7")),
        slot(WeekDay::Tuesday, "10:00", "12:00", None, Some("room-7")),
    ];

    let first = detect(&slots);
    let second = detect(&slots);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.conflict_type, b.conflict_type);
        assert_eq!(a.affected_slots, b.affected_slots);
        assert_eq!(a.affected_entities, b.affected_entities);
        assert_ne!(a.id, b.id); // fresh IDs on every recomputation
    }
}

#[test]
fn test_detect_on_empty_input() {
    assert_eq!(detect(&[]), vec![]);
}
