//! Core team: contribution concentration and how much of the contributor
//! base is still active.

use std::collections::HashSet;

use crate::config::CoreTeamConfig;
use crate::facts::{Commit, Contributor, Facts};
use crate::risk::{RiskNode, Signal};
use crate::stats::{percentile_windows, MonthKey};

pub fn core_team(facts: &Facts, config: &CoreTeamConfig, _now: MonthKey) -> RiskNode {
    let mut node = RiskNode::new(Signal::CoreTeam);

    let Some(repository) = &facts.repository else {
        return node;
    };

    if repository.contributors.is_empty() {
        return node;
    }

    let mut contributors: Vec<&Contributor> = repository.contributors.iter().collect();
    contributors.sort_by(|a, b| b.contributions.cmp(&a.contributions));

    let share = core_team_share_percent(&contributors);
    node.intake_threshold(share, config.strength_threshold_percent, config.strength_weight);

    if repository.commits.is_empty() {
        return node;
    }

    let active = active_contributor_ratio(
        &repository.commits,
        &contributors,
        config.active_percentile,
    );
    node.intake(active, config.active_weight);

    node
}

/// Share (percent) of contributors above the single biggest drop in the
/// descending contribution-count curve. A project where that share is tiny
/// depends on a handful of people.
fn core_team_share_percent(sorted_desc: &[&Contributor]) -> f64 {
    let counts: Vec<u32> = sorted_desc.iter().map(|c| c.contributions).collect();
    let cutoff = biggest_jump(&counts);

    cutoff as f64 / sorted_desc.len() as f64 * 100.0
}

/// Index of the largest gap between adjacent ranks, blending the largest
/// absolute and largest relative drop.
fn biggest_jump(counts: &[u32]) -> usize {
    let mut max_absolute = 0u32;
    let mut max_relative = 0.0f64;
    let mut index_absolute = 0usize;
    let mut index_relative = 0usize;

    for i in 1..counts.len() {
        let previous = counts[i - 1];
        let current = counts[i];

        if previous > 0 {
            let relative = 1.0 - current as f64 / previous as f64;
            if relative > max_relative {
                max_relative = relative;
                index_relative = i;
            }
        }

        let absolute = previous.saturating_sub(current);
        if absolute > max_absolute {
            max_absolute = absolute;
            index_absolute = i;
        }
    }

    ((index_absolute as f64 + index_relative as f64) / 2.0).round() as usize
}

/// Fraction of all known contributors who authored a commit within the most
/// recent percentile window, deduplicated by name.
fn active_contributor_ratio(
    commits: &[Commit],
    contributors: &[&Contributor],
    percentile: f64,
) -> f64 {
    let mut recent_first: Vec<&Commit> = commits.iter().collect();
    recent_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let known: HashSet<&str> = contributors.iter().map(|c| c.name.as_str()).collect();

    let windows = percentile_windows(&recent_first, percentile);
    let active: HashSet<&str> = windows
        .first
        .iter()
        .map(|commit| commit.author.as_str())
        .filter(|author| known.contains(author))
        .collect();

    active.len() as f64 / known.len() as f64
}
