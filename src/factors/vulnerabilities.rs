//! Vulnerabilities: a hard check against the known-vulnerability index.
//!
//! A zero count is *not* scored as good: absence of evidence is not
//! evidence of absence.

use crate::config::VulnerabilitiesConfig;
use crate::facts::Facts;
use crate::risk::{Band, RiskNode, Signal};

pub fn vulnerabilities(facts: &Facts, config: &VulnerabilitiesConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::Vulnerabilities);

    let Some(report) = &facts.vulnerabilities else {
        return node;
    };

    if report.total > 0 {
        node.intake(Band::DecisionMaking.score(), config.weight);
    }

    node
}
