//! Clubhouse filter pipeline: pure predicate + comparator + derive step.
//!
//! `derive_view` is the one derive step every list page shares:
//! filter the catalog (preserving input order), then sort a copy by the
//! active key and direction. The input slice is never mutated.

#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::time::Instant;

use clubhouse_core::member::Member;

mod domains;
pub mod order;
pub mod text;

/// Filter state that can judge and order entities of its domain.
pub trait Filterable<E> {
    /// AND of the search predicate and every active categorical predicate.
    fn matches(&self, entity: &E) -> bool;
    /// Total order induced by the current sort key and direction.
    fn compare(&self, a: &E, b: &E) -> Ordering;
}

/// One derive step: `entities × filters → ordered subset`.
pub fn derive_view<E, F>(entities: &[E], filters: &F) -> Vec<E>
where
    E: Clone,
    F: Filterable<E>,
{
    let started = Instant::now();
    let mut out: Vec<E> = entities
        .iter()
        .filter(|e| filters.matches(e))
        .cloned()
        .collect();
    out.sort_by(|a, b| filters.compare(a, b));
    metrics::histogram!("derive_eval_ms", started.elapsed().as_secs_f64() * 1_000.0);
    metrics::gauge!("derive_rows", out.len() as f64);
    out
}

/// Team-only post-sort rule: move the first distinguished member (in
/// post-sort order) to the front, keeping everyone else where the sort
/// put them. No-op when nobody is flagged or the flagged member already
/// leads.
pub fn pin_distinguished(view: &mut Vec<Member>) {
    if let Some(pos) = view.iter().position(|m| m.distinguished) {
        if pos > 0 {
            let m = view.remove(pos);
            view.insert(0, m);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhouse_core::event::{Event, EventCategory, EventFilters, EventSort};
    use clubhouse_core::member::{Member, MemberFilters, MemberRole, MemberSort};
    use clubhouse_core::project::{Project, ProjectCategory, ProjectFilters, ProjectStatus};
    use clubhouse_core::resource::{Resource, ResourceCategory, ResourceFilters, ResourceSort};
    use clubhouse_core::{Choice, Difficulty, SortOrder};

    fn ev(id: &str, title: &str, category: EventCategory, date: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category,
            date: date.to_string(),
            location: None,
            tags: smallvec::SmallVec::new(),
            capacity: None,
            registered: None,
            featured: false,
        }
    }

    fn ids(view: &[Event]) -> Vec<&str> {
        view.iter().map(|e| e.id.as_str()).collect()
    }

    fn sample() -> Vec<Event> {
        vec![
            ev("a", "Zebra", EventCategory::Workshop, "2024-01-01"),
            ev("b", "Apple", EventCategory::Hackathon, "2024-03-01"),
            ev("c", "Mango", EventCategory::Workshop, "2024-02-01"),
        ]
    }

    #[test]
    fn derive_is_deterministic() {
        let entities = sample();
        let f = EventFilters::default();
        let once = derive_view(&entities, &f);
        let twice = derive_view(&entities, &f);
        assert_eq!(once, twice);
        // input untouched, original order intact
        assert_eq!(ids(&entities), vec!["a", "b", "c"]);
    }

    #[test]
    fn title_sort_and_inversion() {
        let entities = sample();
        let mut f = EventFilters {
            sort_by: EventSort::Title,
            ..Default::default()
        };
        let asc = derive_view(&entities, &f);
        assert_eq!(ids(&asc), vec!["b", "c", "a"]);
        f.sort_order = SortOrder::Desc;
        let desc = derive_view(&entities, &f);
        let mut rev = asc.clone();
        rev.reverse();
        assert_eq!(desc, rev);
    }

    #[test]
    fn date_sort_is_chronological_across_formats() {
        let entities = vec![
            ev("late", "B", EventCategory::Talk, "2024-02-01"),
            ev("early", "A", EventCategory::Talk, "2024-01-30T18:00:00Z"),
        ];
        let f = EventFilters::default(); // sort_by: Date, asc
        assert_eq!(ids(&derive_view(&entities, &f)), vec!["early", "late"]);
    }

    #[test]
    fn longer_search_never_widens() {
        let entities = sample();
        let mut f = EventFilters::default();
        let mut prev = derive_view(&entities, &f).len();
        for needle in ["m", "ma", "man", "mang", "mangoes"] {
            f.search = needle.to_string();
            let n = derive_view(&entities, &f).len();
            assert!(n <= prev, "search {needle:?} widened the view");
            prev = n;
        }
    }

    #[test]
    fn event_search_covers_title_description_tags_only() {
        let mut e = ev("a", "Rust Night", EventCategory::Social, "2024-03-01");
        e.description = "hands-on session".to_string();
        e.location = Some("Innovation Hall".to_string());
        e.tags.push("beginners".to_string());
        let entities = vec![e];

        let mut f = EventFilters::default();
        for hit in ["night", "hands-on", "beginners"] {
            f.search = hit.to_string();
            assert_eq!(derive_view(&entities, &f).len(), 1, "search {hit:?}");
        }
        // location is a display field, not a search field
        f.search = "hall".to_string();
        assert!(derive_view(&entities, &f).is_empty());
    }

    #[test]
    fn wildcard_category_is_neutral() {
        let entities = sample();
        let all = derive_view(&entities, &EventFilters::default());
        assert_eq!(all.len(), 3);
        let only = derive_view(
            &entities,
            &EventFilters {
                category: Choice::Only(EventCategory::Workshop),
                ..Default::default()
            },
        );
        assert_eq!(ids(&only), vec!["a", "c"]);
    }

    #[test]
    fn search_and_sort_compose() {
        let entities = vec![
            ev("a", "Zebra", EventCategory::Workshop, "2024-01-01"),
            ev("b", "Apple", EventCategory::Workshop, "2024-03-01"),
        ];
        let mut f = EventFilters {
            sort_by: EventSort::Title,
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&entities, &f)), vec!["b", "a"]);
        f.sort_order = SortOrder::Desc;
        assert_eq!(ids(&derive_view(&entities, &f)), vec!["a", "b"]);
        f.search = "zeb".to_string();
        assert_eq!(ids(&derive_view(&entities, &f)), vec!["a"]);
    }

    fn project(
        id: &str,
        status: ProjectStatus,
        difficulty: Difficulty,
        tech: &[&str],
        stars: Option<u32>,
    ) -> Project {
        Project {
            id: id.to_string(),
            title: format!("project {id}"),
            description: String::new(),
            category: ProjectCategory::Web,
            status,
            difficulty,
            tech: tech.iter().map(|s| s.to_string()).collect(),
            stars,
            repo_url: None,
            created_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn project_status_and_difficulty_predicates() {
        let projects = vec![
            project("p1", ProjectStatus::Active, Difficulty::Beginner, &[], Some(9)),
            project("p2", ProjectStatus::Archived, Difficulty::Beginner, &[], Some(5)),
            project("p3", ProjectStatus::Active, Difficulty::Advanced, &[], Some(1)),
        ];
        let f = ProjectFilters {
            status: Choice::Only(ProjectStatus::Active),
            ..Default::default()
        };
        let view = derive_view(&projects, &f);
        let got: Vec<&str> = view.iter().map(|p| p.id.as_str()).collect();
        // stars descending is the projects default
        assert_eq!(got, vec!["p1", "p3"]);

        let f = ProjectFilters {
            status: Choice::Only(ProjectStatus::Active),
            difficulty: Choice::Only(Difficulty::Advanced),
            ..Default::default()
        };
        let view = derive_view(&projects, &f);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "p3");
    }

    #[test]
    fn project_tech_filter_is_collection_membership() {
        let projects = vec![
            project("p1", ProjectStatus::Active, Difficulty::Beginner, &["rust", "wasm"], None),
            project("p2", ProjectStatus::Active, Difficulty::Beginner, &["react"], None),
            project("p3", ProjectStatus::Active, Difficulty::Beginner, &[], None),
        ];
        let f = ProjectFilters {
            tech: Choice::Only("rust".to_string()),
            ..Default::default()
        };
        let view = derive_view(&projects, &f);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "p1");
        // an empty tech stack fails any concrete tech filter
        assert!(!view.iter().any(|p| p.id == "p3"));
    }

    fn resource(id: &str, title: &str, category: ResourceCategory, added_at: &str) -> Resource {
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category,
            difficulty: Difficulty::Beginner,
            tags: smallvec::SmallVec::new(),
            url: None,
            added_at: added_at.to_string(),
        }
    }

    #[test]
    fn resource_default_sort_is_newest_first() {
        let resources = vec![
            resource("r1", "Old Guide", ResourceCategory::Tutorial, "2023-05-01"),
            resource("r2", "New Guide", ResourceCategory::Tutorial, "2024-02-01"),
            resource("r3", "Mid Guide", ResourceCategory::Article, "2023-11-15"),
        ];
        let f = ResourceFilters::default();
        assert_eq!(f.sort_by, ResourceSort::Added);
        assert_eq!(f.sort_order, SortOrder::Desc);
        let view = derive_view(&resources, &f);
        let got: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(got, vec!["r2", "r3", "r1"]);
    }

    #[test]
    fn resource_category_and_difficulty_predicates() {
        let mut advanced = resource("r2", "Deep Dive", ResourceCategory::Article, "2024-01-01");
        advanced.difficulty = Difficulty::Advanced;
        let resources = vec![
            resource("r1", "Intro", ResourceCategory::Tutorial, "2024-01-02"),
            advanced,
        ];
        let f = ResourceFilters {
            category: Choice::Only(ResourceCategory::Article),
            ..Default::default()
        };
        let view = derive_view(&resources, &f);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "r2");

        let f = ResourceFilters {
            difficulty: Choice::Only(Difficulty::Beginner),
            ..Default::default()
        };
        let view = derive_view(&resources, &f);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "r1");
    }

    fn member(id: &str, name: &str, dept: Option<&str>) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            position: None,
            department: dept.map(|s| s.to_string()),
            role: MemberRole::Member,
            skills: smallvec::SmallVec::new(),
            contributions: None,
            joined_at: "2023-09-01".to_string(),
            featured: false,
            distinguished: false,
        }
    }

    #[test]
    fn missing_department_fails_concrete_filter() {
        let members = vec![
            member("x", "Ada", Some("CS")),
            member("y", "Grace", None),
        ];
        let f = MemberFilters {
            department: Choice::Only("CS".to_string()),
            ..Default::default()
        };
        let view = derive_view(&members, &f);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "x");
        // and a search over the missing field cannot match either
        let f = MemberFilters {
            search: "cs".to_string(),
            ..Default::default()
        };
        let view = derive_view(&members, &f);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "x");
    }

    #[test]
    fn pin_moves_flagged_member_to_front() {
        let mut a = member("a", "Ada", None);
        a.distinguished = true;
        let members = vec![member("b", "Bert", None), a, member("c", "Cleo", None)];
        let f = MemberFilters {
            sort_by: MemberSort::Name,
            ..Default::default()
        };
        let mut view = derive_view(&members, &f);
        // name-ascending already puts Ada first; force a harder case
        assert_eq!(view[0].id, "a");
        view.rotate_left(1); // now ["b", "c", "a"]
        pin_distinguished(&mut view);
        let got: Vec<&str> = view.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[test]
    fn pin_is_noop_without_flag_or_when_first() {
        let f = MemberFilters::default();
        let members = vec![member("a", "Ada", None), member("b", "Bert", None)];
        let mut view = derive_view(&members, &f);
        let before = view.clone();
        pin_distinguished(&mut view);
        assert_eq!(view, before);
    }
}
