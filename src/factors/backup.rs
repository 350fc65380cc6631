//! Organizational backup: companies, sponsors, and organizations standing
//! behind the contributor base.

use crate::config::BackupConfig;
use crate::facts::Facts;
use crate::risk::{RiskNode, Signal};

pub fn organizational_backup(facts: &Facts, config: &BackupConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::OrganizationalBackup);

    let Some(repository) = &facts.repository else {
        return node;
    };

    if repository.contributors.is_empty() {
        return node;
    }

    let companies = repository
        .contributors
        .iter()
        .filter(|contributor| !contributor.company.is_empty())
        .count();
    let sponsors: u32 = repository.contributors.iter().map(|c| c.sponsors).sum();
    let organizations: u32 = repository.contributors.iter().map(|c| c.organizations).sum();

    node.intake_threshold(companies as f64, config.company_threshold, config.company_weight);
    node.intake_threshold(sponsors as f64, config.sponsor_threshold, config.sponsor_weight);
    node.intake_threshold(
        organizations as f64,
        config.organization_threshold,
        config.organization_weight,
    );

    let hosted = if repository.organization.is_some() { 1.0 } else { 0.0 };
    node.intake(hosted, config.hosting_org_weight);

    node
}
