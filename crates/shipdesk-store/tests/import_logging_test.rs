// Boundary logging of snapshot import, observed through the capture layer.
// Kept in its own binary: the capture subscriber is process-global.

mod common;

use common::{fresh_db, sample_snapshot};
use shipdesk_core::logging_facility::init_test_capture;
use shipdesk_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_ROWS_INSERTED,
};
use shipdesk_store::{import_snapshot, ImportMode};

#[test]
fn test_import_emits_start_end_and_end_error() {
    let capture = init_test_capture();
    let db = fresh_db();
    let snapshot = sample_snapshot();

    import_snapshot(&db, &snapshot, ImportMode::default()).unwrap();
    import_snapshot(&db, &snapshot, ImportMode::default()).unwrap_err();

    let events = capture.events_for("import_snapshot");
    let names: Vec<&str> = events.iter().filter_map(|e| e.event.as_deref()).collect();
    assert_eq!(names, vec![EVENT_START, EVENT_END, EVENT_START, EVENT_END_ERROR]);

    let end = &events[1];
    assert_eq!(
        end.field(FIELD_ROWS_INSERTED),
        Some(snapshot.total_rows().to_string().as_str())
    );

    let failure = &events[3];
    assert_eq!(failure.field(FIELD_ERR_CODE), Some("ERR_CONSTRAINT_VIOLATION"));
    assert_eq!(failure.field(FIELD_ERR_KIND), Some("ConstraintViolation"));
}
