//! Projects store: the shared list machine plus optimistic starring.

use clubhouse_core::project::{Project, ProjectFilterPatch, ProjectFilters};
use clubhouse_core::EntityId;

use crate::feed::ReducerStore;
use crate::{ListState, ListView};

#[derive(Debug)]
pub enum ProjectAction {
    SetEntities(Vec<Project>),
    SetLoading(bool),
    UpdateFilters(ProjectFilterPatch),
    ClearFilters,
    SetSelected(Option<EntityId>),
    SetModalOpen(bool),
    /// Optimistic star: bumps the counter by one.
    Star { id: EntityId },
}

#[derive(Default)]
pub struct ProjectStore {
    list: ListState<Project, ProjectFilters>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &ListState<Project, ProjectFilters> {
        &self.list
    }

    pub fn reduce(&mut self, action: ProjectAction) {
        match action {
            ProjectAction::SetEntities(list) => self.list.set_entities(list),
            ProjectAction::SetLoading(b) => self.list.set_loading(b),
            ProjectAction::UpdateFilters(patch) => self.list.update_filters(|f| f.apply(patch)),
            ProjectAction::ClearFilters => self.list.clear_filters(),
            ProjectAction::SetSelected(id) => self.list.set_selected(id),
            ProjectAction::SetModalOpen(open) => self.list.set_modal_open(open),
            ProjectAction::Star { id } => self.list.mutate(&id, |p| {
                p.stars = Some(p.stars.unwrap_or(0).saturating_add(1));
            }),
        }
    }
}

impl ReducerStore for ProjectStore {
    type Action = ProjectAction;
    type View = ListView<Project, ProjectFilters>;

    fn reduce(&mut self, action: ProjectAction) {
        ProjectStore::reduce(self, action);
    }

    fn view(&self) -> Self::View {
        self.list.view()
    }
}
