use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::conflict::Conflict;
use crate::models::time_slot::TimeSlot;

/// One scheduled occupancy of a time interval within a timetable.
///
/// Subject, teacher, and room IDs are opaque foreign keys; existence
/// validation belongs to the caller. A slot with no teacher or room cannot
/// take part in the corresponding overlap conflicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub id: Uuid,
    pub time_slot: TimeSlot,
    pub subject_id: Option<String>,
    pub teacher_id: Option<String>,
    pub room_id: Option<String>,
    pub student_groups: BTreeSet<String>,
    pub is_locked: bool,
    pub conflicts: Vec<Conflict>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub time_slot: TimeSlot,
    pub subject_id: Option<String>,
    pub teacher_id: Option<String>,
    pub room_id: Option<String>,
    #[serde(default)]
    pub student_groups: BTreeSet<String>,
    #[serde(default)]
    pub is_locked: bool,
}

/// Partial slot update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSlotRequest {
    pub time_slot: Option<TimeSlot>,
    pub subject_id: Option<Option<String>>,
    pub teacher_id: Option<Option<String>>,
    pub room_id: Option<Option<String>>,
    pub student_groups: Option<BTreeSet<String>>,
    pub is_locked: Option<bool>,
}

impl TimetableSlot {
    pub fn from_request(request: CreateSlotRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            time_slot: request.time_slot,
            subject_id: request.subject_id,
            teacher_id: request.teacher_id,
            room_id: request.room_id,
            student_groups: request.student_groups,
            is_locked: request.is_locked,
            conflicts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: UpdateSlotRequest, now: DateTime<Utc>) {
        if let Some(time_slot) = update.time_slot {
            self.time_slot = time_slot;
        }
        if let Some(subject_id) = update.subject_id {
            self.subject_id = subject_id;
        }
        if let Some(teacher_id) = update.teacher_id {
            self.teacher_id = teacher_id;
        }
        if let Some(room_id) = update.room_id {
            self.room_id = room_id;
        }
        if let Some(student_groups) = update.student_groups {
            self.student_groups = student_groups;
        }
        if let Some(is_locked) = update.is_locked {
            self.is_locked = is_locked;
        }
        self.updated_at = now;
    }
}
