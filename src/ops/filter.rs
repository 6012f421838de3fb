use crate::model::member::{Member, MemberId};
use crate::model::task::Task;
use crate::model::view::FilterState;

/// Whether `name` contains `query`, ignoring case. `query` is expected
/// to be trimmed already.
pub fn matches_search(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Members that pass the current filters, in collection order.
///
/// Narrowing is sequential: the active-only flag first, then the search
/// text (trimmed; blank means no search). The two predicates commute.
pub fn visible_members<'a>(members: &'a [Member], filter: &FilterState) -> Vec<&'a Member> {
    let mut out: Vec<&Member> = members.iter().collect();
    if filter.show_only_active {
        out.retain(|m| m.is_active);
    }
    if let Some(query) = filter.search_query() {
        out.retain(|m| matches_search(&m.name, query));
    }
    out
}

/// Look up a member by ID in the full collection
pub fn find_member(members: &[Member], id: MemberId) -> Option<&Member> {
    members.iter().find(|m| m.id == id)
}

/// Tasks assigned to `id`, in collection order, done or not
pub fn tasks_for_member(tasks: &[Task], id: MemberId) -> Vec<&Task> {
    tasks.iter().filter(|t| t.assigned_to == id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, seed_members, seed_tasks};

    fn names<'a>(members: &[&'a Member]) -> Vec<&'a str> {
        members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn no_filters_returns_everyone_in_order() {
        let members = seed_members();
        let out = visible_members(&members, &FilterState::default());
        assert_eq!(
            names(&out),
            vec!["Alex Rivera", "Casey Kim", "Jordan Lee", "Sam Cohen", "Taylor Brooks"]
        );
    }

    #[test]
    fn active_only_drops_inactive() {
        let members = seed_members();
        let filter = FilterState {
            show_only_active: true,
            ..Default::default()
        };
        let out = visible_members(&members, &filter);
        assert_eq!(names(&out), vec!["Alex Rivera", "Casey Kim", "Sam Cohen"]);
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let members = seed_members();
        let filter = FilterState {
            search_text: "  RIVERA ".into(),
            ..Default::default()
        };
        assert_eq!(names(&visible_members(&members, &filter)), vec!["Alex Rivera"]);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let members = seed_members();
        let filter = FilterState {
            search_text: "x r".into(),
            ..Default::default()
        };
        assert_eq!(names(&visible_members(&members, &filter)), vec!["Alex Rivera"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let members = seed_members();
        let filter = FilterState {
            search_text: " \t ".into(),
            ..Default::default()
        };
        assert_eq!(visible_members(&members, &filter).len(), 5);
    }

    #[test]
    fn search_and_active_combine() {
        let members = seed_members();
        // "o" hits Jordan, Sam Cohen, Taylor Brooks; only Sam is active
        let filter = FilterState {
            show_only_active: true,
            search_text: "o".into(),
            ..Default::default()
        };
        assert_eq!(names(&visible_members(&members, &filter)), vec!["Sam Cohen"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let members = seed_members();
        let filter = FilterState {
            search_text: "zzz".into(),
            ..Default::default()
        };
        assert!(visible_members(&members, &filter).is_empty());
        assert!(visible_members(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn find_member_hits_and_misses() {
        let members = seed_members();
        assert_eq!(find_member(&members, MemberId(3)).map(|m| m.role), Some(Role::Member));
        assert!(find_member(&members, MemberId(42)).is_none());
    }

    #[test]
    fn tasks_for_member_keeps_order_and_done() {
        let tasks = seed_tasks();
        let ids: Vec<u32> = tasks_for_member(&tasks, MemberId(2))
            .iter()
            .map(|t| t.id.0)
            .collect();
        assert_eq!(ids, vec![102, 103]);
        assert!(tasks_for_member(&tasks, MemberId(5)).is_empty());
    }
}
