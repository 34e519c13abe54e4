//! Team domain: club members, roles, and the spotlight flags.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{vocab, CatalogEntity, Choice, EntityId, SortOrder, ViewMode};

vocab!(
    MemberRole, "role", {
        Lead => "lead",
        Core => "core",
        Member => "member",
        Alumni => "alumni",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub role: MemberRole,
    #[serde(default)]
    pub skills: SmallVec<[String; 6]>,
    #[serde(default)]
    pub contributions: Option<u32>,
    pub joined_at: String,
    #[serde(default)]
    pub featured: bool,
    /// Identity-derived "distinguishing individual" flag, opaque here.
    /// Drives the spotlight pick and the pin-to-front listing rule.
    #[serde(default)]
    pub distinguished: bool,
}

impl CatalogEntity for Member {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberSort {
    #[default]
    Name,
    Contributions,
    Joined,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberFilters {
    /// Matches name, position, department, and skills.
    pub search: String,
    pub role: Choice<MemberRole>,
    pub department: Choice<String>,
    pub skill: Choice<String>,
    pub sort_by: MemberSort,
    pub sort_order: SortOrder,
    pub view: ViewMode,
}

#[derive(Debug, Clone, Default)]
pub struct MemberFilterPatch {
    pub search: Option<String>,
    pub role: Option<Choice<MemberRole>>,
    pub department: Option<Choice<String>>,
    pub skill: Option<Choice<String>>,
    pub sort_by: Option<MemberSort>,
    pub sort_order: Option<SortOrder>,
    pub view: Option<ViewMode>,
}

impl MemberFilters {
    pub fn apply(&mut self, patch: MemberFilterPatch) {
        if let Some(v) = patch.search {
            self.search = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if let Some(v) = patch.department {
            self.department = v;
        }
        if let Some(v) = patch.skill {
            self.skill = v;
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
