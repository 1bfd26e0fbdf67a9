use dashboard_core::{Priority, ScheduleEvent, Task, TimeSlot, ValidationError, Weekday};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("hello", Priority::default()).unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "hello");
    assert!(!task.completed);
    assert_eq!(task.priority, Priority::Medium);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "nil", Priority::Low).unwrap_err();
    assert_eq!(err, ValidationError::NilId);

    let nine = TimeSlot::from_hour(9).unwrap();
    let err = ScheduleEvent::with_id(Uuid::nil(), "nil", nine, Weekday::Monday).unwrap_err();
    assert_eq!(err, ValidationError::NilId);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(id, "Buy milk", Priority::High).unwrap();
    task.toggle();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["completed"], true);
    assert_eq!(json["priority"], "high");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn event_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee").unwrap();
    let event = ScheduleEvent::with_id(
        id,
        "Math class",
        TimeSlot::from_hour(9).unwrap(),
        Weekday::Monday,
    )
    .unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["time"], "9:00");
    assert_eq!(json["day"], "monday");

    let decoded: ScheduleEvent = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn deserialize_rejects_blank_task_title() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "   ",
        "completed": false,
        "priority": "low"
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("title must not be blank"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_off_grid_event_time() {
    let value = serde_json::json!({
        "id": "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee",
        "title": "Breakfast",
        "time": "7:00",
        "day": "monday"
    });

    let err = serde_json::from_value::<ScheduleEvent>(value).unwrap_err();
    assert!(
        err.to_string().contains("not an hourly slot"),
        "unexpected error: {err}"
    );
}
