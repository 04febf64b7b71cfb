use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slot::TimetableSlot;

/// A weekly timetable: the unit of editing, conflict detection, and history
/// snapshotting. Slot order is insertion order and carries no meaning beyond
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub semester: u8,
    pub is_active: bool,
    pub slots: Vec<TimetableSlot>,
    pub generated_at: DateTime<Utc>,
    pub generated_by: Option<String>,
    pub last_modified: DateTime<Utc>,
    /// Bumped on generation only, never on manual edits.
    pub version: u32,
}

impl Timetable {
    pub fn new(name: impl Into<String>, year: i32, semester: u8) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            year,
            semester,
            is_active: false,
            slots: Vec::new(),
            generated_at: now,
            generated_by: None,
            last_modified: now,
            version: 1,
        }
    }

    pub fn slot(&self, id: Uuid) -> Option<&TimetableSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    pub fn slot_mut(&mut self, id: Uuid) -> Option<&mut TimetableSlot> {
        self.slots.iter_mut().find(|s| s.id == id)
    }

    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }
}
