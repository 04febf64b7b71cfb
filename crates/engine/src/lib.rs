//! Timetable editing and conflict detection engine.
//!
//! [`TimetableEngine`] owns the canonical timetable state, applies
//! incremental edits, recomputes scheduling conflicts after every mutation,
//! and keeps a bounded undo/redo history. It is a library component with no
//! I/O of its own; the one async seam is the external [`SlotGenerator`]
//! collaborator.
//!
//! The engine is single-writer: every mutation runs to completion (conflict
//! recomputation and history snapshot included) before the next is accepted.
//! Hosts with multiple threads should guard the whole engine with one mutex,
//! since its invariants span fields and cannot be interleaved safely.

pub mod detector;
pub mod engine;
pub mod generator;
pub mod history;

pub use detector::detect;
pub use engine::TimetableEngine;
pub use generator::SlotGenerator;
pub use history::History;
