//! Activity: is the project still moving at its historical pace?

use crate::config::ActivityConfig;
use crate::facts::{Facts, IssueComment};
use crate::risk::{RiskNode, Signal};
use crate::stats::{analyze_activity, MonthKey, Timestamped};

/// Trends commits, releases, issues, and issue comments independently,
/// each weighted on its own, skipping any series without events.
pub fn activity(facts: &Facts, config: &ActivityConfig, now: MonthKey) -> RiskNode {
    let mut node = RiskNode::new(Signal::Activity);

    let Some(repository) = &facts.repository else {
        return node;
    };

    let comments: Vec<IssueComment> = repository
        .issues
        .iter()
        .flat_map(|issue| issue.comments.iter().cloned())
        .collect();

    intake_series(&mut node, &repository.commits, config.commit_weight, config, now);
    intake_series(&mut node, &repository.releases, config.release_weight, config, now);
    intake_series(&mut node, &repository.issues, config.issue_weight, config, now);
    intake_series(&mut node, &comments, config.comment_weight, config, now);

    node
}

fn intake_series<T: Timestamped>(
    node: &mut RiskNode,
    items: &[T],
    weight: f64,
    config: &ActivityConfig,
    now: MonthKey,
) {
    if items.is_empty() {
        return;
    }

    let analysis = analyze_activity(items, config.percentile, now);
    node.intake(analysis.trend.pace(), weight);
}
