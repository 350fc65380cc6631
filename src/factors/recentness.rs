//! Recentness: how long since the project last shipped anything.

use crate::config::RecentnessConfig;
use crate::facts::Facts;
use crate::risk::{RiskNode, Signal};
use crate::stats::{months_between, percentile_windows, MonthKey, Timestamped};

/// Blends the distance to the very last commit/release with the average
/// distance across the most recent percentile window, weighting the single
/// most recent event hardest, and scores the blend against a month limit.
pub fn recentness(facts: &Facts, config: &RecentnessConfig, now: MonthKey) -> RiskNode {
    let mut node = RiskNode::new(Signal::Recentness);

    let Some(repository) = &facts.repository else {
        return node;
    };

    let mut commits: Vec<_> = repository.commits.iter().collect();
    commits.sort_by_key(|commit| commit.timestamp);

    if let Some(last) = commits.last() {
        let since_last = months_since(*last, now);
        let recent_average = average_months_since(&commits, config.commit_percentile, now);
        let blended = (2.0 * since_last + recent_average) / 3.0;

        node.intake_limit(blended, config.commit_limit_months, config.commit_weight);
    }

    let mut releases: Vec<_> = repository.releases.iter().collect();
    releases.sort_by_key(|release| release.date);

    if let Some(last) = releases.last() {
        let since_last = months_since(*last, now);
        let recent_average = average_months_since(&releases, config.release_percentile, now);
        let blended = (3.0 * since_last + recent_average) / 4.0;

        node.intake_limit(blended, config.release_limit_months, config.release_weight);
    }

    node
}

fn months_since<T: Timestamped>(item: &T, now: MonthKey) -> f64 {
    months_between(MonthKey::of(item.timestamp()), now) as f64
}

fn average_months_since<T: Timestamped>(sorted: &[&T], percentile: f64, now: MonthKey) -> f64 {
    let windows = percentile_windows(sorted, percentile);
    if windows.last.is_empty() {
        return 0.0;
    }

    windows
        .last
        .iter()
        .map(|item| months_since(*item, now))
        .sum::<f64>()
        / windows.last.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::testutil::{commit, facts_with, now, release};
    use crate::facts::{Facts, Repository};

    #[test]
    fn no_repository_contributes_nothing() {
        let node = recentness(&Facts::default(), &RecentnessConfig::default(), now(2023, 6));
        assert_eq!(node.total(), 0.0);
    }

    #[test]
    fn fresh_commits_score_no_concerns() {
        let repository = Repository {
            commits: (1..=12).map(|m| commit("ann", 2023, m, 1)).collect(),
            ..Repository::default()
        };

        let node = recentness(&facts_with(repository), &RecentnessConfig::default(), now(2023, 12));

        // Last commit this month; blend stays far below the 12-month limit.
        assert_eq!(node.no_concerns, 1.0);
    }

    #[test]
    fn commits_past_the_limit_score_most_severe() {
        let repository = Repository {
            commits: vec![commit("ann", 2021, 1, 1), commit("ann", 2021, 6, 1)],
            ..Repository::default()
        };

        let node = recentness(&facts_with(repository), &RecentnessConfig::default(), now(2023, 12));

        assert_eq!(node.decision_making, 1.0);
    }

    #[test]
    fn releases_are_scored_against_their_own_limit() {
        let repository = Repository {
            releases: vec![release("1.0", 2023, 10, 1), release("1.1", 2023, 12, 1)],
            ..Repository::default()
        };

        let node = recentness(&facts_with(repository), &RecentnessConfig::default(), now(2023, 12));

        assert_eq!(node.no_concerns, 1.0);
        assert_eq!(node.total(), 1.0);
    }
}
