//! Contributor prestige: how established the people behind the project are.

use crate::config::PrestigeConfig;
use crate::facts::{Contributor, Facts};
use crate::risk::{RiskNode, Signal};
use crate::stats::months_between_dates;

/// Averages a per-contributor prestige score: outside backing (sponsors and
/// organizations), repository reach, and tenure relative to the project's
/// commit span, each clamped to 1, scaled down slowly with contribution
/// rank.
pub fn contributor_prestige(facts: &Facts, config: &PrestigeConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::ContributorPrestige);

    let Some(repository) = &facts.repository else {
        return node;
    };

    if repository.contributors.is_empty() || repository.commits.is_empty() {
        return node;
    }

    let mut contributors: Vec<&Contributor> = repository.contributors.iter().collect();
    contributors.sort_by(|a, b| b.contributions.cmp(&a.contributions));

    let timestamps: Vec<_> = repository.commits.iter().map(|c| c.timestamp).collect();
    let first = timestamps.iter().min().copied();
    let last = timestamps.iter().max().copied();
    let repo_span_months = match (first, last) {
        (Some(first), Some(last)) => (months_between_dates(first, last) as f64).max(1.0),
        _ => return node,
    };

    let total = contributors.len();
    let sum: f64 = contributors
        .iter()
        .enumerate()
        .map(|(rank, contributor)| {
            let score = prestige_score(contributor, repo_span_months);
            let rank_scale = (total - rank / 3) as f64 / total as f64;
            score * rank_scale
        })
        .sum();

    node.intake(sum / total as f64, config.weight);

    node
}

fn prestige_score(contributor: &Contributor, repo_span_months: f64) -> f64 {
    let backing = ((contributor.sponsors + contributor.organizations) as f64 / 20.0).min(1.0);
    let reach = (contributor.repositories as f64 / 250.0).min(1.0);

    let tenure = match (contributor.first_contribution, contributor.last_contribution) {
        (Some(first), Some(last)) => {
            (months_between_dates(first, last) as f64 / repo_span_months).min(1.0)
        }
        _ => 0.0,
    };

    (backing + tenure + reach) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::testutil::{commit, contributor, facts_with, ts};
    use crate::facts::{Facts, Repository};

    #[test]
    fn missing_commits_or_contributors_contributes_nothing() {
        let node = contributor_prestige(&Facts::default(), &PrestigeConfig::default());
        assert_eq!(node.total(), 0.0);

        let repository = Repository {
            contributors: vec![contributor("ann", 10)],
            ..Repository::default()
        };
        let node =
            contributor_prestige(&facts_with(repository), &PrestigeConfig::default());
        assert_eq!(node.total(), 0.0);
    }

    #[test]
    fn established_contributors_score_well() {
        let mut ann = contributor("ann", 100);
        ann.sponsors = 15;
        ann.organizations = 10;
        ann.repositories = 300;
        ann.first_contribution = Some(ts(2020, 1, 1));
        ann.last_contribution = Some(ts(2023, 1, 1));

        let repository = Repository {
            contributors: vec![ann],
            commits: vec![commit("ann", 2020, 1, 1), commit("ann", 2023, 1, 1)],
            ..Repository::default()
        };

        let node = contributor_prestige(&facts_with(repository), &PrestigeConfig::default());

        // backing, reach, and tenure all saturate: score 1.0 at rank scale 1.
        assert_eq!(node.no_concerns, 1.0);
    }

    #[test]
    fn anonymous_newcomers_score_poorly() {
        let repository = Repository {
            contributors: vec![contributor("new1", 1), contributor("new2", 1)],
            commits: vec![commit("new1", 2023, 1, 1), commit("new2", 2023, 6, 1)],
            ..Repository::default()
        };

        let node = contributor_prestige(&facts_with(repository), &PrestigeConfig::default());

        assert_eq!(node.decision_making, 1.0);
    }
}
