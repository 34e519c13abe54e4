//! Team store: the shared list machine plus spotlight selection and the
//! pin-to-front rule for the distinguished member.

use clubhouse_core::member::{Member, MemberFilterPatch, MemberFilters};
use clubhouse_core::EntityId;
use clubhouse_filter::pin_distinguished;

use crate::feed::ReducerStore;
use crate::{ListState, ListView};

#[derive(Debug)]
pub enum TeamAction {
    SetEntities(Vec<Member>),
    SetLoading(bool),
    UpdateFilters(MemberFilterPatch),
    ClearFilters,
    SetSelected(Option<EntityId>),
    SetModalOpen(bool),
}

#[derive(Default)]
pub struct TeamStore {
    list: ListState<Member, MemberFilters>,
    spotlight: Option<Member>,
}

impl TeamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &ListState<Member, MemberFilters> {
        &self.list
    }

    /// Computed from the full member list, independent of filters.
    pub fn spotlight(&self) -> Option<&Member> {
        self.spotlight.as_ref()
    }

    pub fn reduce(&mut self, action: TeamAction) {
        match action {
            TeamAction::SetEntities(list) => {
                self.spotlight = pick_spotlight(&list);
                self.list.set_entities(list);
                self.repin();
            }
            TeamAction::SetLoading(b) => self.list.set_loading(b),
            TeamAction::UpdateFilters(patch) => {
                self.list.update_filters(|f| f.apply(patch));
                self.repin();
            }
            TeamAction::ClearFilters => {
                self.list.clear_filters();
                self.repin();
            }
            TeamAction::SetSelected(id) => self.list.set_selected(id),
            TeamAction::SetModalOpen(open) => self.list.set_modal_open(open),
        }
    }

    fn repin(&mut self) {
        pin_distinguished(self.list.derived_mut());
    }
}

/// Spotlight precedence: first distinguished member, else first featured,
/// else the first member, in original list order.
fn pick_spotlight(list: &[Member]) -> Option<Member> {
    list.iter()
        .find(|m| m.distinguished)
        .or_else(|| list.iter().find(|m| m.featured))
        .or_else(|| list.first())
        .cloned()
}

/// Team snapshot: the list view plus the filter-independent spotlight.
#[derive(Debug, Clone)]
pub struct TeamView {
    pub list: ListView<Member, MemberFilters>,
    pub spotlight: Option<Member>,
}

impl ReducerStore for TeamStore {
    type Action = TeamAction;
    type View = TeamView;

    fn reduce(&mut self, action: TeamAction) {
        TeamStore::reduce(self, action);
    }

    fn view(&self) -> Self::View {
        TeamView {
            list: self.list.view(),
            spotlight: self.spotlight.clone(),
        }
    }
}
