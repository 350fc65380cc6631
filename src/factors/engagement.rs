//! Engagement: how much discussion the issue tracker actually sees.

use crate::config::EngagementConfig;
use crate::facts::Facts;
use crate::risk::{RiskNode, Signal};

pub fn engagement(facts: &Facts, config: &EngagementConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::Engagement);

    let Some(repository) = &facts.repository else {
        return node;
    };

    if repository.issues.is_empty() {
        return node;
    }

    let total_comments: usize = repository
        .issues
        .iter()
        .map(|issue| issue.comments.len())
        .sum();

    let ratio_percent = total_comments as f64 / repository.issues.len() as f64 * 100.0;

    node.intake_threshold(
        ratio_percent,
        config.comment_ratio_threshold_percent,
        config.weight,
    );

    node
}
