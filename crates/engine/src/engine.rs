//! The editing state machine: slot store, conflict recomputation, history.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use timegrid_core::errors::{TimetableError, TimetableResult};
use timegrid_core::models::conflict::{Conflict, ConflictKey};
use timegrid_core::models::slot::{CreateSlotRequest, TimetableSlot, UpdateSlotRequest};
use timegrid_core::models::timetable::Timetable;

use crate::detector;
use crate::generator::SlotGenerator;
use crate::history::History;

/// Owns the canonical timetable state and applies every edit.
///
/// Each mutating operation runs its full tail (`last_modified` bump, dirty
/// flag, conflict recomputation, history snapshot) before returning, so the
/// exposed state is always internally consistent. Engine instances are
/// independent; there is no shared global state.
pub struct TimetableEngine {
    timetables: Vec<Timetable>,
    current_id: Option<Uuid>,
    selected_slot_id: Option<Uuid>,
    conflicts: Vec<Conflict>,
    /// Resolution state that must survive conflict recomputation, keyed by
    /// conflict identity rather than regenerated conflict IDs.
    resolved: HashMap<ConflictKey, DateTime<Utc>>,
    dirty: bool,
    generating: bool,
    history: History<Timetable>,
}

impl TimetableEngine {
    pub fn new() -> Self {
        Self {
            timetables: Vec::new(),
            current_id: None,
            selected_slot_id: None,
            conflicts: Vec::new(),
            resolved: HashMap::new(),
            dirty: false,
            generating: false,
            history: History::default(),
        }
    }

    // --- Timetable management ---

    /// Creates an empty timetable, makes it current, and seeds a fresh
    /// single-entry history buffer.
    pub fn create_timetable(&mut self, name: impl Into<String>, year: i32, semester: u8) -> Uuid {
        let timetable = Timetable::new(name, year, semester);
        let id = timetable.id;
        info!(timetable_id = %id, "timetable created");

        self.history.reset(timetable.clone());
        self.timetables.push(timetable);
        self.current_id = Some(id);
        self.selected_slot_id = None;
        self.conflicts.clear();
        self.dirty = false;
        id
    }

    /// Switches the current timetable. Clears selection and the dirty flag,
    /// recomputes conflicts, and seeds a fresh history buffer; undo history
    /// never carries over between timetables.
    pub fn set_current(&mut self, id: Uuid) -> TimetableResult<()> {
        if !self.timetables.iter().any(|t| t.id == id) {
            return Err(TimetableError::NotFound(format!("timetable {id}")));
        }
        self.current_id = Some(id);
        self.selected_slot_id = None;
        self.dirty = false;
        self.recompute_conflicts();
        let seed = self.current().cloned();
        if let Some(seed) = seed {
            self.history.reset(seed);
        }
        Ok(())
    }

    /// Renames the current timetable. Dirties but does not snapshot; renames
    /// are not undoable.
    pub fn update_timetable_name(&mut self, name: impl Into<String>) -> TimetableResult<()> {
        let current = self.require_current_mut()?;
        current.name = name.into();
        current.touch();
        self.dirty = true;
        Ok(())
    }

    /// Drops a timetable from the known set. Deleting the current timetable
    /// clears the current pointer, selection, and derived conflicts, but
    /// leaves the history buffer untouched. Unknown IDs are a no-op.
    pub fn delete_timetable(&mut self, id: Uuid) {
        self.timetables.retain(|t| t.id != id);
        if self.current_id == Some(id) {
            self.current_id = None;
            self.selected_slot_id = None;
            self.conflicts.clear();
        }
    }

    // --- Slot management ---

    /// Adds a slot to the current timetable and returns its fresh ID.
    pub fn add_slot(&mut self, request: CreateSlotRequest) -> TimetableResult<Uuid> {
        request.time_slot.validate()?;
        let current = self.require_current_mut()?;
        let slot = TimetableSlot::from_request(request, Utc::now());
        let id = slot.id;
        current.slots.push(slot);
        current.touch();
        debug!(slot_id = %id, "slot added");

        self.dirty = true;
        self.recompute_conflicts();
        self.snapshot();
        Ok(id)
    }

    /// Merges a partial update into the matching slot and bumps its
    /// `updated_at`. An unknown ID is tolerated, since UI callers may race
    /// with a concurrent delete, but the mutation tail still runs.
    pub fn update_slot(&mut self, id: Uuid, update: UpdateSlotRequest) -> TimetableResult<()> {
        if let Some(time_slot) = &update.time_slot {
            time_slot.validate()?;
        }
        let current = self.require_current_mut()?;
        match current.slot_mut(id) {
            Some(slot) => {
                slot.apply(update, Utc::now());
                debug!(slot_id = %id, "slot updated");
            }
            None => debug!(slot_id = %id, "slot update skipped, no such slot"),
        }
        current.touch();

        self.dirty = true;
        self.recompute_conflicts();
        self.snapshot();
        Ok(())
    }

    /// Removes a slot, clearing the selection if it pointed at it. Unknown
    /// IDs follow the same forgiving rule as [`Self::update_slot`].
    pub fn delete_slot(&mut self, id: Uuid) -> TimetableResult<()> {
        let current = self.require_current_mut()?;
        current.slots.retain(|s| s.id != id);
        current.touch();
        if self.selected_slot_id == Some(id) {
            self.selected_slot_id = None;
        }
        debug!(slot_id = %id, "slot deleted");

        self.dirty = true;
        self.recompute_conflicts();
        self.snapshot();
        Ok(())
    }

    /// Pure selection change: no dirty flag, no recomputation, no snapshot.
    pub fn select_slot(&mut self, id: Option<Uuid>) {
        self.selected_slot_id = id;
    }

    // --- Conflicts ---

    /// Marks a conflict resolved and remembers its identity key, so the
    /// resolution survives the full recomputation that follows every edit.
    /// Unknown IDs are a no-op.
    pub fn resolve_conflict(&mut self, conflict_id: Uuid) {
        let now = Utc::now();
        let Some(conflict) = self.conflicts.iter_mut().find(|c| c.id == conflict_id) else {
            return;
        };
        conflict.is_resolved = true;
        conflict.resolved_at = Some(now);
        let key = conflict.key();
        self.resolved.insert(key, now);

        if let Some(current) = self.current_mut() {
            for slot in &mut current.slots {
                if let Some(copy) = slot.conflicts.iter_mut().find(|c| c.id == conflict_id) {
                    copy.is_resolved = true;
                    copy.resolved_at = Some(now);
                }
            }
        }
    }

    // --- History ---

    /// Restores the previous snapshot as the current timetable. Returns
    /// whether anything changed; at the oldest snapshot this is a no-op.
    /// Moves the cursor only; undoing never pushes new snapshots.
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(snapshot) => {
                self.install(snapshot);
                true
            }
            None => false,
        }
    }

    /// Mirror of [`Self::undo`]: restores the next snapshot, no-op at the
    /// newest one.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(snapshot) => {
                self.install(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Generation ---

    /// Replaces the current timetable's slots wholesale with a set produced
    /// by the external generator, bumping the timetable version.
    ///
    /// At most one generation runs at a time; a second request while one is
    /// in flight fails with `GenerationInProgress`. On generator failure the
    /// timetable is left untouched and the error is surfaced.
    pub async fn generate(
        &mut self,
        generator: &dyn SlotGenerator,
        constraints: serde_json::Value,
    ) -> TimetableResult<()> {
        if self.generating {
            return Err(TimetableError::GenerationInProgress);
        }
        if self.current_id.is_none() {
            return Err(TimetableError::NoActiveTimetable);
        }

        self.generating = true;
        info!("timetable generation started");
        let result = generator.generate(&constraints).await;
        self.generating = false;

        let slots = result.map_err(|report| {
            warn!(error = %report, "timetable generation failed");
            TimetableError::GenerationFailed(report)
        })?;

        let count = slots.len();
        let current = self.require_current_mut()?;
        current.slots = slots;
        current.version += 1;
        current.generated_at = Utc::now();
        current.touch();
        info!(slots = count, version = current.version, "timetable generation installed");

        self.dirty = true;
        self.recompute_conflicts();
        self.snapshot();
        Ok(())
    }

    // --- Read surface ---

    pub fn current(&self) -> Option<&Timetable> {
        let id = self.current_id?;
        self.timetables.iter().find(|t| t.id == id)
    }

    pub fn timetables(&self) -> &[Timetable] {
        &self.timetables
    }

    pub fn selected_slot(&self) -> Option<&TimetableSlot> {
        let id = self.selected_slot_id?;
        self.current()?.slot(id)
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Save/load hook for the caller's persistence layer.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_selection(&mut self) {
        self.selected_slot_id = None;
    }

    /// Cursor position in the history buffer; `None` while the buffer is
    /// empty.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // --- Internals ---

    fn current_mut(&mut self) -> Option<&mut Timetable> {
        let id = self.current_id?;
        self.timetables.iter_mut().find(|t| t.id == id)
    }

    fn require_current_mut(&mut self) -> TimetableResult<&mut Timetable> {
        self.current_mut().ok_or(TimetableError::NoActiveTimetable)
    }

    /// Full conflict recomputation: detect from scratch, merge persisted
    /// resolution state back in, and mirror each slot's conflicts onto the
    /// slot itself.
    fn recompute_conflicts(&mut self) {
        let detected = self.current().map(|current| detector::detect(&current.slots));
        let Some(mut conflicts) = detected else {
            self.conflicts.clear();
            return;
        };

        for conflict in &mut conflicts {
            if let Some(&resolved_at) = self.resolved.get(&conflict.key()) {
                conflict.is_resolved = true;
                conflict.resolved_at = Some(resolved_at);
            }
        }

        if let Some(current) = self.current_mut() {
            for slot in &mut current.slots {
                slot.conflicts = conflicts
                    .iter()
                    .filter(|c| c.involves(slot.id))
                    .cloned()
                    .collect();
            }
        }
        self.conflicts = conflicts;
    }

    fn snapshot(&mut self) {
        let snapshot = self.current().cloned();
        if let Some(snapshot) = snapshot {
            self.history.record(snapshot);
        }
    }

    /// Installs a history snapshot as the current timetable, syncing the
    /// collection entry, and reruns conflict detection.
    fn install(&mut self, snapshot: Timetable) {
        self.current_id = Some(snapshot.id);
        match self.timetables.iter_mut().find(|t| t.id == snapshot.id) {
            Some(entry) => *entry = snapshot,
            None => self.timetables.push(snapshot),
        }
        self.dirty = true;
        self.recompute_conflicts();
    }
}

impl Default for TimetableEngine {
    fn default() -> Self {
        Self::new()
    }
}
