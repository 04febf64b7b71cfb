use timegrid_core::errors::{TimetableError, TimetableResult};

#[test]
fn test_error_display() {
    let format = TimetableError::InvalidTimeFormat("25:00".to_string());
    let validation = TimetableError::Validation("end before start".to_string());
    let no_active = TimetableError::NoActiveTimetable;
    let not_found = TimetableError::NotFound("timetable abc".to_string());
    let in_progress = TimetableError::GenerationInProgress;
    let failed = TimetableError::GenerationFailed(eyre::eyre!("solver timed out"));

    assert_eq!(format.to_string(), "Invalid time format: 25:00");
    assert_eq!(validation.to_string(), "Validation error: end before start");
    assert_eq!(no_active.to_string(), "No active timetable");
    assert_eq!(not_found.to_string(), "Resource not found: timetable abc");
    assert_eq!(in_progress.to_string(), "Generation already in progress");
    assert!(failed.to_string().contains("solver timed out"));
}

#[test]
fn test_generation_failure_from_report() {
    let report = eyre::eyre!("external service unavailable");
    let error: TimetableError = report.into();

    assert!(matches!(error, TimetableError::GenerationFailed(_)));
}

#[test]
fn test_timetable_result() {
    let result: TimetableResult<u32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: TimetableResult<u32> = Err(TimetableError::NoActiveTimetable);
    assert!(result.is_err());
}
