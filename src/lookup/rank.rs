// src/lookup/rank.rs
// =============================================================================
// Picks the most-starred repositories out of a user's repository list.
// =============================================================================

use std::cmp::Reverse;

use crate::github::RepositorySummary;

/// How many repositories we show per user.
pub const TOP_REPOSITORIES: usize = 5;

// Sorts by star count, highest first, and keeps the top five.
//
// `sort_by_key` is a stable sort, so repositories with the same number of
// stars stay in the order GitHub returned them.
pub fn rank(mut repos: Vec<RepositorySummary>) -> Vec<RepositorySummary> {
    repos.sort_by_key(|repo| Reverse(repo.star_count));
    repos.truncate(TOP_REPOSITORIES);
    repos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: u64, star_count: u64) -> RepositorySummary {
        RepositorySummary {
            id,
            name: format!("repo-{}", id),
            url: format!("https://github.com/someone/repo-{}", id),
            description: None,
            star_count,
        }
    }

    fn stars(repos: &[RepositorySummary]) -> Vec<u64> {
        repos.iter().map(|r| r.star_count).collect()
    }

    fn ids(repos: &[RepositorySummary]) -> Vec<u64> {
        repos.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sorts_descending() {
        let ranked = rank(vec![repo(1, 5), repo(2, 100), repo(3, 20)]);
        assert_eq!(stars(&ranked), vec![100, 20, 5]);
    }

    #[test]
    fn test_keeps_top_five() {
        let input = (0..12).map(|i| repo(i, i * 10)).collect();
        let ranked = rank(input);
        assert_eq!(ranked.len(), TOP_REPOSITORIES);
        assert_eq!(stars(&ranked), vec![110, 100, 90, 80, 70]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_ties_keep_server_order() {
        let ranked = rank(vec![
            repo(1, 7),
            repo(2, 9),
            repo(3, 7),
            repo(4, 9),
            repo(5, 7),
            repo(6, 7),
        ]);
        assert_eq!(ids(&ranked), vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_length_is_min_of_five_and_input() {
        for n in 0..9u64 {
            let input: Vec<_> = (0..n).map(|i| repo(i, (i * 37) % 11)).collect();
            let ranked = rank(input);
            assert_eq!(ranked.len(), std::cmp::min(5, n as usize));
            assert!(ranked.windows(2).all(|w| w[0].star_count >= w[1].star_count));
        }
    }

    #[test]
    fn test_idempotent() {
        let once = rank(vec![repo(1, 3), repo(2, 3), repo(3, 8), repo(4, 1)]);
        let twice = rank(once.clone());
        assert_eq!(once, twice);
    }
}
