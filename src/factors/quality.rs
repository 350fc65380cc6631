//! Project quality: basic repository hygiene signals.

use crate::config::QualityConfig;
use crate::facts::Facts;
use crate::risk::{Band, RiskNode, Signal};

/// Each present hygiene signal (readme, license, about text, forking
/// allowed) earns a mild reassurance on its own; none of them proves
/// health, so none scores above NoImmediateAction.
pub fn project_quality(facts: &Facts, config: &QualityConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::ProjectQuality);

    let Some(repository) = &facts.repository else {
        return node;
    };

    if !repository.readme.is_empty() {
        node.intake(Band::NoImmediateAction.score(), config.weight);
    }

    if !repository.license.is_empty() {
        node.intake(Band::NoImmediateAction.score(), config.weight);
    }

    if !repository.about.is_empty() {
        node.intake(Band::NoImmediateAction.score(), config.weight);
    }

    if repository.allows_forking {
        node.intake(Band::NoImmediateAction.score(), config.weight);
    }

    node
}
