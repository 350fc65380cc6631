//! Network: the structural reach of the people and organization behind the
//! repository.

use crate::config::NetworkConfig;
use crate::facts::Facts;
use crate::risk::{RiskNode, Signal};

pub fn network(facts: &Facts, config: &NetworkConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::Network);

    let Some(repository) = &facts.repository else {
        return node;
    };

    let mut size: u64 = repository.contributors.len() as u64;
    for contributor in &repository.contributors {
        size += contributor.repositories as u64;
        size += contributor.organizations as u64;
    }

    if let Some(organization) = &repository.organization {
        size += organization.public_repos as u64;
        size += organization.owned_private_repos as u64;
        size += organization.collaborators as u64;
        size += organization.followers as u64;
    }

    node.intake_threshold(size as f64, config.size_threshold, config.weight);

    node
}
