use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    TeacherOverlap,
    RoomOverlap,
    StudentOverlap,
    CapacityExceeded,
    EquipmentMissing,
    TimeViolation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Entity IDs implicated in a conflict, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedEntities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teachers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub students: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rooms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
}

/// A derived violation of a scheduling invariant between slots.
///
/// Conflicts are recomputed wholesale after every mutation; only the
/// resolution state survives recomputation, carried by [`ConflictKey`]
/// rather than the regenerated `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub id: Uuid,
    pub conflict_type: ConflictType,
    pub severity: Severity,
    pub message: String,
    pub affected_slots: Vec<Uuid>,
    pub affected_entities: AffectedEntities,
    pub suggestions: Vec<String>,
    pub is_resolved: bool,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Identity of a conflict independent of its regenerated `id`: the type plus
/// the affected slot pair in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConflictKey {
    pub conflict_type: ConflictType,
    pub slots: (Uuid, Uuid),
}

impl Conflict {
    pub fn key(&self) -> ConflictKey {
        let a = self.affected_slots.first().copied().unwrap_or_default();
        let b = self.affected_slots.get(1).copied().unwrap_or(a);
        ConflictKey {
            conflict_type: self.conflict_type,
            slots: (a.min(b), a.max(b)),
        }
    }

    pub fn involves(&self, slot_id: Uuid) -> bool {
        self.affected_slots.contains(&slot_id)
    }
}
