use dashboard_core::{ScheduleError, ScheduleStore, TimeSlot, Weekday};
use uuid::Uuid;

fn slot(text: &str) -> TimeSlot {
    text.parse().unwrap()
}

#[test]
fn math_class_lands_in_its_cell_only() {
    let mut store = ScheduleStore::in_memory();
    let event = store
        .add("Math class", "9:00", Some(Weekday::Monday))
        .unwrap();

    let monday = store.events_at(Weekday::Monday, slot("9:00")).unwrap();
    assert_eq!(monday, vec![event]);

    let tuesday = store.events_at(Weekday::Tuesday, slot("9:00")).unwrap();
    assert!(tuesday.is_empty());
}

#[test]
fn padded_time_input_matches_grid_slot() {
    let mut store = ScheduleStore::in_memory();
    let event = store
        .add("Physics", "09:00", Some(Weekday::Thursday))
        .unwrap();
    assert_eq!(event.time.to_string(), "9:00");

    let found = store.events_at(Weekday::Thursday, slot("9:00")).unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn day_defaults_to_monday() {
    let mut store = ScheduleStore::in_memory();
    let event = store.add("Standup", "10:00", None).unwrap();
    assert_eq!(event.day, Weekday::Monday);
}

#[test]
fn missing_fields_are_rejected_without_state_change() {
    let mut store = ScheduleStore::in_memory();
    store.add("keep", "13:00", Some(Weekday::Friday)).unwrap();

    assert_eq!(
        store.add("", "13:00", None).unwrap_err(),
        ScheduleError::EmptyTitle
    );
    assert_eq!(
        store.add("Gym", "", None).unwrap_err(),
        ScheduleError::EmptyTime
    );
    assert!(matches!(
        store.add("Gym", "lunchtime", None).unwrap_err(),
        ScheduleError::InvalidTime(_)
    ));
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn events_at_is_exact_ordered_subset_of_list() {
    let mut store = ScheduleStore::in_memory();
    store.add("a", "9:00", Some(Weekday::Monday)).unwrap();
    store.add("b", "10:00", Some(Weekday::Monday)).unwrap();
    store.add("c", "9:00", Some(Weekday::Monday)).unwrap();
    store.add("d", "9:00", Some(Weekday::Tuesday)).unwrap();
    store.add("e", "9:00", Some(Weekday::Monday)).unwrap();

    let all = store.list().unwrap();
    for day in Weekday::ALL {
        for time in TimeSlot::ALL {
            let expected: Vec<_> = all
                .iter()
                .filter(|event| event.day == day && event.time == time)
                .cloned()
                .collect();
            assert_eq!(store.events_at(day, time).unwrap(), expected);
        }
    }

    let titles: Vec<_> = store
        .events_at(Weekday::Monday, slot("9:00"))
        .unwrap()
        .into_iter()
        .map(|event| event.title)
        .collect();
    assert_eq!(titles, vec!["a", "c", "e"]);
}

#[test]
fn week_grid_covers_fixed_cross_product() {
    let mut store = ScheduleStore::in_memory();
    store.add("Lecture", "17:00", Some(Weekday::Friday)).unwrap();
    store.add("Lab", "14:00", Some(Weekday::Tuesday)).unwrap();

    let grid = store.week_grid().unwrap();
    assert_eq!(grid.rows.len(), 9);
    for (row, time) in grid.rows.iter().zip(TimeSlot::ALL) {
        assert_eq!(row.time, time);
        let days: Vec<_> = row.cells.iter().map(|cell| cell.day).collect();
        assert_eq!(days, Weekday::ALL.to_vec());
    }
    assert_eq!(grid.event_count(), 2);

    let friday = grid.cell(Weekday::Friday, slot("17:00")).unwrap();
    assert_eq!(friday.events[0].title, "Lecture");
    assert!(grid
        .cell(Weekday::Monday, slot("9:00"))
        .unwrap()
        .events
        .is_empty());
}

#[test]
fn delete_removes_event_and_ignores_unknown_ids() {
    let mut store = ScheduleStore::in_memory();
    let event = store.add("Tutoring", "15:00", Some(Weekday::Wednesday)).unwrap();

    assert!(!store.delete(Uuid::new_v4()).unwrap());
    assert_eq!(store.list().unwrap().len(), 1);

    assert!(store.delete(event.id).unwrap());
    assert!(store.get(event.id).unwrap().is_none());
    assert!(store
        .events_at(Weekday::Wednesday, slot("15:00"))
        .unwrap()
        .is_empty());
}
