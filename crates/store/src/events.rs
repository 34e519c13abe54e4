//! Events store: the shared list machine plus optimistic registration.

use clubhouse_core::event::{Event, EventFilterPatch, EventFilters};
use clubhouse_core::EntityId;

use crate::feed::ReducerStore;
use crate::{ListState, ListView};

#[derive(Debug)]
pub enum EventAction {
    SetEntities(Vec<Event>),
    SetLoading(bool),
    UpdateFilters(EventFilterPatch),
    ClearFilters,
    SetSelected(Option<EntityId>),
    SetModalOpen(bool),
    /// Optimistic registration: adds `spots` to the entity's counter
    /// without waiting for the backend round trip.
    Register { id: EntityId, spots: u32 },
}

#[derive(Default)]
pub struct EventStore {
    list: ListState<Event, EventFilters>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &ListState<Event, EventFilters> {
        &self.list
    }

    pub fn reduce(&mut self, action: EventAction) {
        match action {
            EventAction::SetEntities(list) => self.list.set_entities(list),
            EventAction::SetLoading(b) => self.list.set_loading(b),
            EventAction::UpdateFilters(patch) => self.list.update_filters(|f| f.apply(patch)),
            EventAction::ClearFilters => self.list.clear_filters(),
            EventAction::SetSelected(id) => self.list.set_selected(id),
            EventAction::SetModalOpen(open) => self.list.set_modal_open(open),
            EventAction::Register { id, spots } => self.list.mutate(&id, |e| {
                e.registered = Some(e.registered.unwrap_or(0).saturating_add(spots));
            }),
        }
    }
}

impl ReducerStore for EventStore {
    type Action = EventAction;
    type View = ListView<Event, EventFilters>;

    fn reduce(&mut self, action: EventAction) {
        EventStore::reduce(self, action);
    }

    fn view(&self) -> Self::View {
        self.list.view()
    }
}
