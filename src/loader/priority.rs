//! Branch priority ordering
//!
//! When the same descriptor path exists in several branches, the copy from
//! the highest-priority branch wins. Priority has three tiers: the primary
//! branch, then the checked-out branch, then everything else.

/// Priority tier of a branch, lowest value first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BranchPriority {
    Primary,
    Current,
    Other,
}

/// Priority tier of `branch` given the checked-out and primary branches
#[must_use]
pub fn branch_priority(branch: &str, current: Option<&str>, primary: &str) -> BranchPriority {
    if branch == primary {
        BranchPriority::Primary
    } else if current == Some(branch) {
        BranchPriority::Current
    } else {
        BranchPriority::Other
    }
}

/// Order branches by priority tier
///
/// The sort is stable: branches within a tier keep their discovery order.
#[must_use]
pub fn sort_by_priority(branches: &[String], current: Option<&str>, primary: &str) -> Vec<String> {
    let mut sorted = branches.to_vec();
    sorted.sort_by_key(|branch| branch_priority(branch, current, primary));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_branch_priority() {
        assert_eq!(branch_priority("main", Some("feature"), "main"), BranchPriority::Primary);
        assert_eq!(branch_priority("feature", Some("feature"), "main"), BranchPriority::Current);
        assert_eq!(branch_priority("other", Some("feature"), "main"), BranchPriority::Other);
        assert_eq!(branch_priority("main", Some("main"), "main"), BranchPriority::Primary);
        assert_eq!(branch_priority("feature", None, "main"), BranchPriority::Other);
    }

    #[test]
    fn test_sort_by_priority() {
        let branches = names(&["feature1", "main", "feature2", "develop"]);
        let sorted = sort_by_priority(&branches, Some("develop"), "main");

        assert_eq!(sorted, names(&["main", "develop", "feature1", "feature2"]));
    }

    #[test]
    fn test_sort_by_priority_with_primary_as_current() {
        let branches = names(&["feature1", "main", "feature2"]);
        let sorted = sort_by_priority(&branches, Some("main"), "main");

        assert_eq!(sorted, names(&["main", "feature1", "feature2"]));
    }

    #[test]
    fn test_sort_is_stable_within_tier() {
        let branches = names(&["zeta", "alpha", "mid", "beta", "main", "cur", "aaa"]);
        let sorted = sort_by_priority(&branches, Some("cur"), "main");

        assert_eq!(sorted, names(&["main", "cur", "zeta", "alpha", "mid", "beta", "aaa"]));
    }

    #[test]
    fn test_sort_without_primary_or_current() {
        let branches = names(&["b", "a", "c"]);
        assert_eq!(sort_by_priority(&branches, None, "main"), branches);
        assert_eq!(sort_by_priority(&branches, Some("missing"), "main"), branches);
    }

    #[test]
    fn test_sort_with_custom_primary() {
        let branches = names(&["main", "feature", "trunk"]);
        let sorted = sort_by_priority(&branches, Some("feature"), "trunk");

        assert_eq!(sorted, names(&["trunk", "feature", "main"]));
    }
}
