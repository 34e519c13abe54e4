//! Clubhouse domain stores: reducer-style state machines over catalog
//! lists.
//!
//! Each domain (events, projects, team, resources) wraps the shared
//! [`ListState`] record and exposes a tagged action vocabulary plus
//! `reduce`. The derived view is recomputed synchronously on every
//! transition that touches entities or filters; nothing here blocks,
//! suspends, or performs I/O. The async side lives in [`feed`].

#![forbid(unsafe_code)]

pub mod events;
pub mod feed;
pub mod projects;
pub mod resources;
pub mod team;

use clubhouse_core::{CatalogEntity, EntityId};
use clubhouse_filter::{derive_view, Filterable};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Shared per-domain record: authoritative entities, filter state, and
/// the derived view. Filters start fully populated at their defaults;
/// `loading` starts true and is only ever toggled by the data loader.
pub struct ListState<E, F> {
    entities: Vec<E>,
    filters: F,
    derived: Vec<E>,
    loading: bool,
    selected: Option<EntityId>,
    modal_open: bool,
    // id -> position in `entities`, rebuilt on set_entities
    index: FxHashMap<EntityId, usize>,
}

impl<E, F> ListState<E, F>
where
    E: CatalogEntity + Clone,
    F: Filterable<E> + Default,
{
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            filters: F::default(),
            derived: Vec::new(),
            loading: true,
            selected: None,
            modal_open: false,
            index: FxHashMap::default(),
        }
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn derived(&self) -> &[E] {
        &self.derived
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    fn recompute(&mut self) {
        self.derived = derive_view(&self.entities, &self.filters);
    }

    // Team pin rule edits the freshly derived view in place.
    pub(crate) fn derived_mut(&mut self) -> &mut Vec<E> {
        &mut self.derived
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, e) in self.entities.iter().enumerate() {
            self.index.insert(e.id().to_string(), i);
        }
    }

    /// Replace the catalog wholesale (initial load or live refresh).
    pub fn set_entities(&mut self, list: Vec<E>) {
        self.entities = list;
        self.reindex();
        self.recompute();
    }

    /// Toggles the flag only; the derived view is untouched.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn update_filters(&mut self, apply: impl FnOnce(&mut F)) {
        apply(&mut self.filters);
        self.recompute();
    }

    /// Reset every filter field to its domain default.
    pub fn clear_filters(&mut self) {
        self.filters = F::default();
        self.recompute();
    }

    /// Selecting an entity opens the modal; clearing the selection closes it.
    pub fn set_selected(&mut self, id: Option<EntityId>) {
        self.modal_open = id.is_some();
        self.selected = id;
    }

    /// Closing the modal also drops the selection.
    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
        if !open {
            self.selected = None;
        }
    }

    /// Optimistic update: clone-and-replace the matching entity, then
    /// recompute. An unknown id is a no-op, not an error.
    pub fn mutate(&mut self, id: &str, update: impl FnOnce(&mut E)) {
        let Some(&i) = self.index.get(id) else {
            debug!(id, "optimistic update for unknown entity; ignoring");
            return;
        };
        let mut e = self.entities[i].clone();
        update(&mut e);
        self.entities[i] = e;
        self.recompute();
    }
}

impl<E, F> Default for ListState<E, F>
where
    E: CatalogEntity + Clone,
    F: Filterable<E> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only snapshot handed to frontends, decoupled from the live store.
#[derive(Debug, Clone)]
pub struct ListView<E, F> {
    pub derived: Vec<E>,
    pub filters: F,
    pub loading: bool,
    pub selected: Option<EntityId>,
    pub modal_open: bool,
}

impl<E, F> ListState<E, F>
where
    E: Clone,
    F: Clone,
{
    pub fn view(&self) -> ListView<E, F> {
        ListView {
            derived: self.derived.clone(),
            filters: self.filters.clone(),
            loading: self.loading,
            selected: self.selected.clone(),
            modal_open: self.modal_open,
        }
    }
}
