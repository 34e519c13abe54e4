//! Resources store: the shared list machine, no optimistic mutations.

use clubhouse_core::resource::{Resource, ResourceFilterPatch, ResourceFilters};
use clubhouse_core::EntityId;

use crate::feed::ReducerStore;
use crate::{ListState, ListView};

#[derive(Debug)]
pub enum ResourceAction {
    SetEntities(Vec<Resource>),
    SetLoading(bool),
    UpdateFilters(ResourceFilterPatch),
    ClearFilters,
    SetSelected(Option<EntityId>),
    SetModalOpen(bool),
}

#[derive(Default)]
pub struct ResourceStore {
    list: ListState<Resource, ResourceFilters>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &ListState<Resource, ResourceFilters> {
        &self.list
    }

    pub fn reduce(&mut self, action: ResourceAction) {
        match action {
            ResourceAction::SetEntities(list) => self.list.set_entities(list),
            ResourceAction::SetLoading(b) => self.list.set_loading(b),
            ResourceAction::UpdateFilters(patch) => self.list.update_filters(|f| f.apply(patch)),
            ResourceAction::ClearFilters => self.list.clear_filters(),
            ResourceAction::SetSelected(id) => self.list.set_selected(id),
            ResourceAction::SetModalOpen(open) => self.list.set_modal_open(open),
        }
    }
}

impl ReducerStore for ResourceStore {
    type Action = ResourceAction;
    type View = ListView<Resource, ResourceFilters>;

    fn reduce(&mut self, action: ResourceAction) {
        ResourceStore::reduce(self, action);
    }

    fn view(&self) -> Self::View {
        self.list.view()
    }
}
