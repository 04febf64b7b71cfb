//! Contract with the external timetable generation service.

use async_trait::async_trait;

use timegrid_core::models::slot::TimetableSlot;

/// External generation collaborator: takes an opaque constraints object and
/// produces a full replacement slot set for the current timetable.
///
/// The engine treats implementations as black boxes. There is no mid-flight
/// cancellation; a request either resolves with the new slots or fails, and
/// the engine holds at most one request in flight.
#[async_trait]
pub trait SlotGenerator: Send + Sync {
    async fn generate(
        &self,
        constraints: &serde_json::Value,
    ) -> Result<Vec<TimetableSlot>, eyre::Report>;
}
