//! Deprecation marking: the project saying, in so many words, that it is
//! done. Every hit counts independently, so a strongly marked project
//! stacks up many maximal-risk intakes.

use crate::config::MarkingConfig;
use crate::facts::Facts;
use crate::risk::{Band, RiskNode, Signal};

pub fn deprecation_marking(facts: &Facts, config: &MarkingConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::DeprecationMarking);

    if let Some(repository) = &facts.repository {
        if repository.archived {
            node.intake(Band::DecisionMaking.score(), config.archived_weight);
        }

        intake_keyword_hits(
            &mut node,
            &repository.readme,
            &config.readme_keywords,
            config.readme_weight,
        );
        intake_keyword_hits(
            &mut node,
            &repository.about,
            &config.about_keywords,
            config.about_weight,
        );
    }

    if let Some(artifact) = facts
        .distribution
        .as_ref()
        .and_then(|distribution| distribution.artifact.as_ref())
    {
        intake_keyword_hits(
            &mut node,
            &artifact.description,
            &config.description_keywords,
            config.description_weight,
        );
    }

    node
}

fn intake_keyword_hits(node: &mut RiskNode, text: &str, keywords: &[String], weight: f64) {
    if text.is_empty() {
        return;
    }

    let text = text.to_lowercase();
    for keyword in keywords {
        if text.contains(&keyword.to_lowercase()) {
            node.intake(Band::DecisionMaking.score(), weight);
        }
    }
}
