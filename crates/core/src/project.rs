//! Projects domain: club-built software and its filter state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{vocab, CatalogEntity, Choice, Difficulty, EntityId, SortOrder, ViewMode};

vocab!(
    ProjectCategory, "category", {
        Web => "web",
        Mobile => "mobile",
        Ai => "ai",
        Systems => "systems",
        GameDev => "gamedev",
    }
);

vocab!(
    ProjectStatus, "status", {
        Active => "active",
        Completed => "completed",
        Archived => "archived",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub difficulty: Difficulty,
    /// Technologies used, matched by the tech filter and free-text search.
    #[serde(default)]
    pub tech: SmallVec<[String; 6]>,
    #[serde(default)]
    pub stars: Option<u32>,
    #[serde(default)]
    pub repo_url: Option<String>,
    pub created_at: String,
}

impl CatalogEntity for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSort {
    #[default]
    Stars,
    Title,
    Created,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFilters {
    pub search: String,
    pub category: Choice<ProjectCategory>,
    pub status: Choice<ProjectStatus>,
    pub difficulty: Choice<Difficulty>,
    pub tech: Choice<String>,
    pub sort_by: ProjectSort,
    pub sort_order: SortOrder,
    pub view: ViewMode,
}

// Most-starred first is the landing order for the projects page.
impl Default for ProjectFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: Choice::All,
            status: Choice::All,
            difficulty: Choice::All,
            tech: Choice::All,
            sort_by: ProjectSort::Stars,
            sort_order: SortOrder::Desc,
            view: ViewMode::Grid,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectFilterPatch {
    pub search: Option<String>,
    pub category: Option<Choice<ProjectCategory>>,
    pub status: Option<Choice<ProjectStatus>>,
    pub difficulty: Option<Choice<Difficulty>>,
    pub tech: Option<Choice<String>>,
    pub sort_by: Option<ProjectSort>,
    pub sort_order: Option<SortOrder>,
    pub view: Option<ViewMode>,
}

impl ProjectFilters {
    pub fn apply(&mut self, patch: ProjectFilterPatch) {
        if let Some(v) = patch.search {
            self.search = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.difficulty {
            self.difficulty = v;
        }
        if let Some(v) = patch.tech {
            self.tech = v;
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
