//! Resources domain: learning material links and their filter state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{vocab, CatalogEntity, Choice, Difficulty, EntityId, SortOrder, ViewMode};

vocab!(
    ResourceCategory, "category", {
        Tutorial => "tutorial",
        Article => "article",
        Video => "video",
        Tool => "tool",
        Course => "course",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: ResourceCategory,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: SmallVec<[String; 4]>,
    #[serde(default)]
    pub url: Option<String>,
    pub added_at: String,
}

impl CatalogEntity for Resource {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceSort {
    #[default]
    Added,
    Title,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceFilters {
    pub search: String,
    pub category: Choice<ResourceCategory>,
    pub difficulty: Choice<Difficulty>,
    pub sort_by: ResourceSort,
    pub sort_order: SortOrder,
    pub view: ViewMode,
}

// Newest additions first is the landing order for the resources page.
impl Default for ResourceFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: Choice::All,
            difficulty: Choice::All,
            sort_by: ResourceSort::Added,
            sort_order: SortOrder::Desc,
            view: ViewMode::Grid,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResourceFilterPatch {
    pub search: Option<String>,
    pub category: Option<Choice<ResourceCategory>>,
    pub difficulty: Option<Choice<Difficulty>>,
    pub sort_by: Option<ResourceSort>,
    pub sort_order: Option<SortOrder>,
    pub view: Option<ViewMode>,
}

impl ResourceFilters {
    pub fn apply(&mut self, patch: ResourceFilterPatch) {
        if let Some(v) = patch.search {
            self.search = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.difficulty {
            self.difficulty = v;
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
