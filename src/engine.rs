//! The aggregation tree: mid-tier aggregators, the root combination, and
//! the per-dependency evaluation entry point.
//!
//! One evaluation builds and consumes one node tree, reading only the
//! immutable facts and configuration, which is what makes concurrent
//! evaluations trivially safe.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::facts::{Dependency, Facts};
use crate::factors;
use crate::risk::{Distribution, Recommendation, RiskNode, Signal};
use crate::stats::MonthKey;

/// The complete result for one dependency.
#[derive(Clone, Debug, Serialize)]
pub struct Evaluation {
    pub dependency: Dependency,
    pub node: RiskNode,
    pub distribution: Distribution,
    pub recommendation: Recommendation,
}

/// Evaluate one dependency against its gathered facts. Never fails: an
/// empty fact model concludes as inconclusive rather than erroring.
pub fn evaluate(
    dependency: &Dependency,
    facts: &Facts,
    config: &Config,
    now: DateTime<Utc>,
) -> Evaluation {
    let node = combine(facts, config, MonthKey::of(now));
    let (distribution, recommendation) = node.conclude();

    log::debug!(
        "{} {} -> {}",
        dependency.name,
        dependency.version,
        recommendation
    );

    Evaluation {
        dependency: dependency.clone(),
        node,
        distribution,
        recommendation,
    }
}

/// The root of the tree. The deity-given branch carries a weight two
/// orders of magnitude above the soft aggregators so unambiguous
/// deprecation evidence dominates every heuristic. With neither a
/// repository nor a distribution there is nothing to score and the node
/// comes back untouched.
pub fn combine(facts: &Facts, config: &Config, now: MonthKey) -> RiskNode {
    let mut node = RiskNode::new(Signal::Combined);

    if facts.is_empty() {
        return node;
    }

    let weights = &config.aggregation.root;

    node.merge(deity_given(facts, config), weights.deity_given);
    node.merge(effort(facts, config, now), weights.effort);
    node.merge(support(facts, config, now), weights.support);
    node.merge(community(facts, config), weights.community);
    node.merge(interconnectedness(facts, config), weights.interconnectedness);
    node.merge(circumstances(facts, config), weights.circumstances);

    node
}

/// Hard-override branch: explicit deprecation marks and known
/// vulnerabilities.
pub fn deity_given(facts: &Facts, config: &Config) -> RiskNode {
    let mut node = RiskNode::new(Signal::DeityGiven);
    let weights = &config.aggregation.deity_given;

    node.merge(
        factors::deprecation_marking(facts, &config.marking),
        weights.marking,
    );
    node.merge(
        factors::vulnerabilities(facts, &config.vulnerabilities),
        weights.vulnerabilities,
    );

    node
}

/// How much work still flows into the project.
pub fn effort(facts: &Facts, config: &Config, now: MonthKey) -> RiskNode {
    let mut node = RiskNode::new(Signal::Effort);
    let weights = &config.aggregation.effort;

    node.merge(
        factors::recentness(facts, &config.recentness, now),
        weights.recentness,
    );
    node.merge(
        factors::activity(facts, &config.activity, now),
        weights.activity,
    );
    node.merge(
        factors::core_team(facts, &config.core_team, now),
        weights.core_team,
    );

    node
}

/// How users fare when they need help.
pub fn support(facts: &Facts, config: &Config, now: MonthKey) -> RiskNode {
    let mut node = RiskNode::new(Signal::Support);
    let weights = &config.aggregation.support;

    node.merge(
        factors::processing(facts, &config.processing, now),
        weights.processing,
    );
    node.merge(
        factors::engagement(facts, &config.engagement),
        weights.engagement,
    );

    node
}

/// Who stands behind the project beyond its core authors.
pub fn community(facts: &Facts, config: &Config) -> RiskNode {
    let mut node = RiskNode::new(Signal::Community);
    let weights = &config.aggregation.community;

    node.merge(
        factors::organizational_backup(facts, &config.backup),
        weights.backup,
    );
    node.merge(
        factors::third_party_participation(facts, &config.participation),
        weights.participation,
    );
    node.merge(
        factors::contributor_prestige(facts, &config.prestige),
        weights.prestige,
    );

    node
}

/// How embedded the project is in the wider ecosystem.
pub fn interconnectedness(facts: &Facts, config: &Config) -> RiskNode {
    let mut node = RiskNode::new(Signal::Interconnectedness);
    let weights = &config.aggregation.interconnectedness;

    node.merge(factors::network(facts, &config.network), weights.network);
    node.merge(
        factors::popularity(facts, &config.popularity),
        weights.popularity,
    );

    node
}

/// Everything situational: version currency, licensing, hygiene.
pub fn circumstances(facts: &Facts, config: &Config) -> RiskNode {
    let mut node = RiskNode::new(Signal::Circumstances);
    let weights = &config.aggregation.circumstances;

    node.merge(factors::rivalry(facts, &config.rivalry), weights.rivalry);
    node.merge(
        factors::licensing(facts, &config.licensing),
        weights.licensing,
    );
    node.merge(
        factors::project_quality(facts, &config.quality),
        weights.quality,
    );

    node
}
