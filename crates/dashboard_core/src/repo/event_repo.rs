//! Timetable event repository contract and in-memory implementation.

use crate::model::event::{EventId, ScheduleEvent};
use crate::repo::{RepoError, RepoResult};

/// Storage contract for timetable events.
pub trait EventRepository {
    /// Appends a new event. Rejects invalid records and duplicate ids.
    fn insert_event(&mut self, event: &ScheduleEvent) -> RepoResult<EventId>;
    fn get_event(&self, id: EventId) -> RepoResult<Option<ScheduleEvent>>;
    /// All events in insertion order.
    fn list_events(&self) -> RepoResult<Vec<ScheduleEvent>>;
    /// Returns `false` when no event had this id.
    fn remove_event(&mut self, id: EventId) -> RepoResult<bool>;
}

/// `Vec`-backed event storage.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: Vec<ScheduleEvent>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventRepository for InMemoryEventRepository {
    fn insert_event(&mut self, event: &ScheduleEvent) -> RepoResult<EventId> {
        event.validate()?;
        if self.events.iter().any(|existing| existing.id == event.id) {
            return Err(RepoError::DuplicateId(event.id));
        }
        self.events.push(event.clone());
        Ok(event.id)
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<ScheduleEvent>> {
        Ok(self.events.iter().find(|event| event.id == id).cloned())
    }

    fn list_events(&self) -> RepoResult<Vec<ScheduleEvent>> {
        Ok(self.events.clone())
    }

    fn remove_event(&mut self, id: EventId) -> RepoResult<bool> {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        Ok(self.events.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::{EventRepository, InMemoryEventRepository};
    use crate::model::event::{ScheduleEvent, TimeSlot, Weekday};
    use crate::repo::RepoError;

    fn slot(hour: u8) -> TimeSlot {
        TimeSlot::from_hour(hour).unwrap()
    }

    #[test]
    fn insert_preserves_order_and_rejects_duplicates() {
        let mut repo = InMemoryEventRepository::new();
        let a = ScheduleEvent::new("a", slot(9), Weekday::Monday).unwrap();
        let b = ScheduleEvent::new("b", slot(9), Weekday::Monday).unwrap();
        repo.insert_event(&a).unwrap();
        repo.insert_event(&b).unwrap();

        assert_eq!(
            repo.insert_event(&a).unwrap_err(),
            RepoError::DuplicateId(a.id)
        );
        let titles: Vec<_> = repo
            .list_events()
            .unwrap()
            .into_iter()
            .map(|event| event.title)
            .collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn remove_is_noop_for_unknown_id() {
        let mut repo = InMemoryEventRepository::new();
        let event = ScheduleEvent::new("lab", slot(14), Weekday::Thursday).unwrap();
        repo.insert_event(&event).unwrap();

        assert!(!repo.remove_event(uuid::Uuid::new_v4()).unwrap());
        assert_eq!(repo.list_events().unwrap().len(), 1);
        assert!(repo.remove_event(event.id).unwrap());
        assert!(repo.get_event(event.id).unwrap().is_none());
    }
}
