pub mod conflict;
pub mod slot;
pub mod time_slot;
pub mod timetable;
