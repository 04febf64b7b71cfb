//! Pure conflict detection over a timetable's slot set.

use std::collections::HashMap;

use uuid::Uuid;

use timegrid_core::models::conflict::{AffectedEntities, Conflict, ConflictType, Severity};
use timegrid_core::models::slot::TimetableSlot;

/// Computes the complete conflict set for one timetable's slots.
///
/// Deterministic in its input: slots are grouped by teacher and then by room
/// (keys in first-encounter order), every unordered pair within a group is
/// compared, and each same-day overlapping pair yields one error-severity
/// conflict with `affected_slots` in encounter order. Quadratic per group,
/// which stays cheap because a group is one teacher's or room's weekly load.
///
/// Repeated calls on an unchanged slot list return the same conflicts up to
/// `id`; resolution state is merged back in by the engine, not here.
pub fn detect(slots: &[TimetableSlot]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    scan(
        slots,
        |slot| slot.teacher_id.as_deref(),
        ConflictType::TeacherOverlap,
        &mut conflicts,
    );
    scan(
        slots,
        |slot| slot.room_id.as_deref(),
        ConflictType::RoomOverlap,
        &mut conflicts,
    );
    conflicts
}

fn scan<'a>(
    slots: &'a [TimetableSlot],
    key: impl Fn(&'a TimetableSlot) -> Option<&'a str>,
    conflict_type: ConflictType,
    conflicts: &mut Vec<Conflict>,
) {
    let mut groups: HashMap<&str, Vec<&TimetableSlot>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for slot in slots {
        if let Some(entity) = key(slot) {
            let group = groups.entry(entity).or_default();
            if group.is_empty() {
                order.push(entity);
            }
            group.push(slot);
        }
    }

    for entity in order {
        let group = &groups[entity];
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                if group[i].time_slot.overlaps_with(&group[j].time_slot) {
                    conflicts.push(overlap_conflict(
                        conflict_type,
                        entity,
                        group[i].id,
                        group[j].id,
                    ));
                }
            }
        }
    }
}

fn overlap_conflict(
    conflict_type: ConflictType,
    entity: &str,
    first: Uuid,
    second: Uuid,
) -> Conflict {
    let (message, entities, suggestions) = match conflict_type {
        ConflictType::TeacherOverlap => (
            "Teacher has overlapping classes",
            AffectedEntities {
                teachers: vec![entity.to_string()],
                ..Default::default()
            },
            vec![
                "Reschedule one of the classes".to_string(),
                "Assign different teacher".to_string(),
            ],
        ),
        ConflictType::RoomOverlap => (
            "Room is double-booked",
            AffectedEntities {
                rooms: vec![entity.to_string()],
                ..Default::default()
            },
            vec![
                "Change room for one class".to_string(),
                "Reschedule one class".to_string(),
            ],
        ),
        other => (
            "Scheduling conflict",
            AffectedEntities::default(),
            vec![format!("Review the {other:?} conflict manually")],
        ),
    };

    Conflict {
        id: Uuid::new_v4(),
        conflict_type,
        severity: Severity::Error,
        message: message.to_string(),
        affected_slots: vec![first, second],
        affected_entities: entities,
        suggestions,
        is_resolved: false,
        resolved_at: None,
    }
}
