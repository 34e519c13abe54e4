//! Per-domain `Filterable` impls: which fields the search predicate
//! covers, which categorical predicates are active, and how each sort key
//! resolves.

use std::cmp::Ordering;

use clubhouse_core::event::{Event, EventFilters, EventSort};
use clubhouse_core::member::{Member, MemberFilters, MemberSort};
use clubhouse_core::project::{Project, ProjectFilters, ProjectSort};
use clubhouse_core::resource::{Resource, ResourceFilters, ResourceSort};

use crate::order::{by_count, by_date, directed};
use crate::text::search_matches;
use crate::Filterable;

impl Filterable<Event> for EventFilters {
    fn matches(&self, e: &Event) -> bool {
        search_matches(
            &self.search,
            [e.title.as_str(), e.description.as_str()],
            &e.tags,
        ) && self.category.admits(&e.category)
    }

    fn compare(&self, a: &Event, b: &Event) -> Ordering {
        let natural = match self.sort_by {
            EventSort::Date => by_date(&a.date, &b.date),
            EventSort::Title => a.title.cmp(&b.title),
            EventSort::Registered => by_count(a.registered, b.registered),
        };
        directed(natural, self.sort_order)
    }
}

impl Filterable<Project> for ProjectFilters {
    fn matches(&self, p: &Project) -> bool {
        search_matches(
            &self.search,
            [p.title.as_str(), p.description.as_str()],
            &p.tech,
        ) && self.category.admits(&p.category)
            && self.status.admits(&p.status)
            && self.difficulty.admits(&p.difficulty)
            && self.tech.admits_any(p.tech.iter())
    }

    fn compare(&self, a: &Project, b: &Project) -> Ordering {
        let natural = match self.sort_by {
            ProjectSort::Stars => by_count(a.stars, b.stars),
            ProjectSort::Title => a.title.cmp(&b.title),
            ProjectSort::Created => by_date(&a.created_at, &b.created_at),
        };
        directed(natural, self.sort_order)
    }
}

impl Filterable<Member> for MemberFilters {
    fn matches(&self, m: &Member) -> bool {
        search_matches(
            &self.search,
            [m.name.as_str()]
                .into_iter()
                .chain(m.position.as_deref())
                .chain(m.department.as_deref()),
            &m.skills,
        ) && self.role.admits(&m.role)
            && self.department.admits_opt(m.department.as_ref())
            && self.skill.admits_any(m.skills.iter())
    }

    fn compare(&self, a: &Member, b: &Member) -> Ordering {
        let natural = match self.sort_by {
            MemberSort::Name => a.name.cmp(&b.name),
            MemberSort::Contributions => by_count(a.contributions, b.contributions),
            MemberSort::Joined => by_date(&a.joined_at, &b.joined_at),
        };
        directed(natural, self.sort_order)
    }
}

impl Filterable<Resource> for ResourceFilters {
    fn matches(&self, r: &Resource) -> bool {
        search_matches(
            &self.search,
            [r.title.as_str(), r.description.as_str()],
            &r.tags,
        ) && self.category.admits(&r.category)
            && self.difficulty.admits(&r.difficulty)
    }

    fn compare(&self, a: &Resource, b: &Resource) -> Ordering {
        let natural = match self.sort_by {
            ResourceSort::Added => by_date(&a.added_at, &b.added_at),
            ResourceSort::Title => a.title.cmp(&b.title),
        };
        directed(natural, self.sort_order)
    }
}
