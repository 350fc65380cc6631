//! Popularity: raw audience size of the repository.

use crate::config::PopularityConfig;
use crate::facts::Facts;
use crate::risk::{RiskNode, Signal};

pub fn popularity(facts: &Facts, config: &PopularityConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::Popularity);

    let Some(repository) = &facts.repository else {
        return node;
    };

    let audience = repository.stars as u64 + repository.watchers as u64 + repository.forks as u64;

    node.intake_threshold(audience as f64, config.size_threshold, config.weight);

    node
}
