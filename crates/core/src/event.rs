//! Events domain: workshops, hackathons, talks, and their filter state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{vocab, CatalogEntity, Choice, EntityId, SortOrder, ViewMode};

vocab!(
    EventCategory, "category", {
        Workshop => "workshop",
        Hackathon => "hackathon",
        Talk => "talk",
        Social => "social",
        Competition => "competition",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: EventCategory,
    /// ISO date ("2024-03-01") or RFC 3339 timestamp.
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: SmallVec<[String; 4]>,
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Registration counter; absent means nobody registered yet.
    #[serde(default)]
    pub registered: Option<u32>,
    // Inconsistently populated upstream; absence decodes as false.
    #[serde(default)]
    pub featured: bool,
}

impl CatalogEntity for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventSort {
    #[default]
    Date,
    Title,
    Registered,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventFilters {
    pub search: String,
    pub category: Choice<EventCategory>,
    pub sort_by: EventSort,
    pub sort_order: SortOrder,
    pub view: ViewMode,
}

/// Partial filter update; only populated fields overwrite.
#[derive(Debug, Clone, Default)]
pub struct EventFilterPatch {
    pub search: Option<String>,
    pub category: Option<Choice<EventCategory>>,
    pub sort_by: Option<EventSort>,
    pub sort_order: Option<SortOrder>,
    pub view: Option<ViewMode>,
}

impl EventFilters {
    pub fn apply(&mut self, patch: EventFilterPatch) {
        if let Some(v) = patch.search {
            self.search = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.sort_by {
            self.sort_by = v;
        }
        if let Some(v) = patch.sort_order {
            self.sort_order = v;
        }
        if let Some(v) = patch.view {
            self.view = v;
        }
    }
}
