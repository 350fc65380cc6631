//! Rivalry: is the evaluated artifact the registry's current version?
//!
//! Only an exact match counts as evidence. A mismatch is inconclusive —
//! "not latest" alone says nothing about deprecation — so it intakes
//! nothing rather than a penalty.

use crate::config::RivalryConfig;
use crate::facts::Facts;
use crate::risk::{Band, RiskNode, Signal};

pub fn rivalry(facts: &Facts, config: &RivalryConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::Rivalry);

    let Some(distribution) = &facts.distribution else {
        return node;
    };

    let (Some(artifact), Some(library)) = (&distribution.artifact, &distribution.library) else {
        return node;
    };

    if artifact.version.is_empty() || library.latest_version.is_empty() {
        return node;
    }

    if artifact.version == library.latest_version {
        node.intake(Band::NoConcerns.score(), config.latest_version_weight);
    }

    node
}
