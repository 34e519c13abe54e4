//! Clubhouse core types: catalog entities and filter state.
//!
//! One module per domain (events, projects, team members, resources).
//! Each domain contributes an entity struct, its closed vocabularies, a
//! fully-populated filter-state struct, and a partial filter patch.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

pub mod event;
pub mod member;
pub mod project;
pub mod resource;

/// Stable entity identifier assigned by the backing store; never reused.
pub type EntityId = String;

/// One record in a domain catalog.
pub trait CatalogEntity {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Presentation-only toggle; never consulted when deriving a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// A categorical filter: the wildcard ("all") or one concrete value.
/// Entities never carry the wildcard; it exists only on the filter side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(v) => v == value,
        }
    }

    /// A missing optional field fails every non-wildcard choice.
    pub fn admits_opt(&self, value: Option<&T>) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(v) => value.is_some_and(|x| x == v),
        }
    }

    /// Membership over collection-valued fields (tech stacks, skills).
    pub fn admits_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        match self {
            Choice::All => true,
            Choice::Only(v) => values.into_iter().any(|x| x == v),
        }
    }
}

/// Raw string fell outside a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value: {value:?}")]
pub struct VocabError {
    pub field: &'static str,
    pub value: String,
}

/// Closed vocabulary enum with lowercase wire form, `FromStr`, and
/// `Display`. Entities may only carry these values; the filter-side
/// wildcard lives in [`Choice`], not here.
macro_rules! vocab {
    ($(#[$meta:meta])* $name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::VocabError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err($crate::VocabError { field: $field, value: s.to_string() }),
                }
            }
        }
    };
}
pub(crate) use vocab;

vocab!(
    /// Difficulty scale shared by projects and resources.
    Difficulty, "difficulty", {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
);
