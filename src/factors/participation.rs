//! Third-party participation: share of drive-by contributors, a proxy for
//! how approachable the project is to outsiders.

use std::collections::HashSet;

use crate::config::ParticipationConfig;
use crate::facts::Facts;
use crate::risk::{RiskNode, Signal};

pub fn third_party_participation(facts: &Facts, config: &ParticipationConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::ThirdPartyParticipation);

    let Some(repository) = &facts.repository else {
        return node;
    };

    if repository.contributors.is_empty() {
        return node;
    }

    let third_party: HashSet<&str> = repository
        .contributors
        .iter()
        .filter(|contributor| {
            contributor.first_contribution.is_none()
                || contributor.contributions <= config.contribution_limit
        })
        .map(|contributor| contributor.name.as_str())
        .collect();

    let share = third_party.len() as f64 / repository.contributors.len() as f64;

    node.intake_threshold(share, config.share_threshold, config.weight);

    node
}
