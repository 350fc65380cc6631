//! The risk scoring unit: a recursive tree of weighted classification nodes.
//!
//! A [`RiskNode`] holds four non-negative accumulators, one per risk band.
//! Leaf factors route normalized evidence into the accumulators via the
//! intake primitives; aggregators absorb whole child nodes via [`RiskNode::merge`],
//! which self-normalizes each child before scaling by its edge weight so an
//! under-evidenced branch can never skew its parent.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stats::clamped_ratio;

/// The four ordered risk bands, lowest concern first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    NoConcerns,
    NoImmediateAction,
    Watchlist,
    DecisionMaking,
}

impl Band {
    pub const ALL: [Band; 4] = [
        Band::NoConcerns,
        Band::NoImmediateAction,
        Band::Watchlist,
        Band::DecisionMaking,
    ];

    /// The canonical intake value landing squarely in this band.
    pub fn score(self) -> f64 {
        match self {
            Band::NoConcerns => 1.0,
            Band::NoImmediateAction => 0.5,
            Band::Watchlist => 0.25,
            Band::DecisionMaking => 0.0,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Band::NoConcerns => "NC",
            Band::NoImmediateAction => "NIA",
            Band::Watchlist => "W",
            Band::DecisionMaking => "DM",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::NoConcerns => "No Concerns",
            Band::NoImmediateAction => "No Immediate Action",
            Band::Watchlist => "Watchlist",
            Band::DecisionMaking => "Decision Making",
        };
        write!(f, "{name}")
    }
}

/// The reported classification: one of the four bands, or the sentinel for
/// an evaluation that produced no usable signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    NoConcerns,
    NoImmediateAction,
    Watchlist,
    DecisionMaking,
    Inconclusive,
}

impl From<Band> for Recommendation {
    fn from(band: Band) -> Self {
        match band {
            Band::NoConcerns => Recommendation::NoConcerns,
            Band::NoImmediateAction => Recommendation::NoImmediateAction,
            Band::Watchlist => Recommendation::Watchlist,
            Band::DecisionMaking => Recommendation::DecisionMaking,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Inconclusive => write!(f, "Inconclusive"),
            Recommendation::NoConcerns => write!(f, "{}", Band::NoConcerns),
            Recommendation::NoImmediateAction => write!(f, "{}", Band::NoImmediateAction),
            Recommendation::Watchlist => write!(f, "{}", Band::Watchlist),
            Recommendation::DecisionMaking => write!(f, "{}", Band::DecisionMaking),
        }
    }
}

/// Which signal or aggregate a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Combined,
    Activity,
    Recentness,
    CoreTeam,
    Processing,
    Engagement,
    OrganizationalBackup,
    ThirdPartyParticipation,
    ContributorPrestige,
    Network,
    Popularity,
    Rivalry,
    Licensing,
    ProjectQuality,
    DeprecationMarking,
    Vulnerabilities,
    Effort,
    Support,
    Community,
    Interconnectedness,
    Circumstances,
    DeityGiven,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Signal::Combined => "Combination & Conclusion",
            Signal::Activity => "Activity",
            Signal::Recentness => "Recentness",
            Signal::CoreTeam => "Core Team",
            Signal::Processing => "Processing",
            Signal::Engagement => "Engagement",
            Signal::OrganizationalBackup => "Organizational Backup",
            Signal::ThirdPartyParticipation => "Third-Party Participation",
            Signal::ContributorPrestige => "Contributor Prestige",
            Signal::Network => "Network",
            Signal::Popularity => "Popularity",
            Signal::Rivalry => "Rivalry",
            Signal::Licensing => "Licensing",
            Signal::ProjectQuality => "Project Quality",
            Signal::DeprecationMarking => "Deprecation Marking",
            Signal::Vulnerabilities => "Vulnerabilities",
            Signal::Effort => "Effort",
            Signal::Support => "Support",
            Signal::Community => "Community",
            Signal::Interconnectedness => "Interconnectedness",
            Signal::Circumstances => "Circumstances",
            Signal::DeityGiven => "Deity-Given",
        };
        write!(f, "{name}")
    }
}

/// A child node together with the weight its evidence was merged at, kept
/// for explainability rather than scoring.
#[derive(Clone, Debug, Serialize)]
pub struct WeightedChild {
    pub weight: f64,
    pub node: RiskNode,
}

/// A four-accumulator scoring node, leaf or composite.
#[derive(Clone, Debug, Serialize)]
pub struct RiskNode {
    pub signal: Signal,
    pub no_concerns: f64,
    pub no_immediate_action: f64,
    pub watchlist: f64,
    pub decision_making: f64,
    pub children: Vec<WeightedChild>,
}

impl RiskNode {
    pub fn new(signal: Signal) -> Self {
        Self {
            signal,
            no_concerns: 0.0,
            no_immediate_action: 0.0,
            watchlist: 0.0,
            decision_making: 0.0,
            children: Vec::new(),
        }
    }

    /// The raw accumulators in band order.
    pub fn accumulators(&self) -> [f64; 4] {
        [
            self.no_concerns,
            self.no_immediate_action,
            self.watchlist,
            self.decision_making,
        ]
    }

    pub fn total(&self) -> f64 {
        self.accumulators().iter().sum()
    }

    /// Route `weight` into the accumulator matching `value`. Values outside
    /// `[0, 1]` (NaN included) violate the intake contract and are dropped
    /// with a warning rather than aborting the evaluation.
    pub fn intake(&mut self, value: f64, weight: f64) {
        if !(0.0..=1.0).contains(&value) {
            log::warn!("{}: intake value {value} outside [0, 1], ignored", self.signal);
            return;
        }

        if value >= 0.75 {
            self.no_concerns += weight;
        } else if value >= 0.5 {
            self.no_immediate_action += weight;
        } else if value >= 0.25 {
            self.watchlist += weight;
        } else {
            self.decision_making += weight;
        }
    }

    /// Intake a count-type signal where more is better: a value at or above
    /// `threshold` scores as lowest concern. A zero threshold counts as met.
    pub fn intake_threshold(&mut self, value: f64, threshold: f64, weight: f64) {
        self.intake(clamped_ratio(value, threshold), weight);
    }

    /// Intake a magnitude where more is worse: a value at or past `limit`
    /// scores as highest concern. A raw score strictly between 0 and 0.25
    /// is nudged up by 0.25 so a value barely inside the limit lands one
    /// band short of the most severe bucket instead of falling off the
    /// cliff.
    pub fn intake_limit(&mut self, value: f64, limit: f64, weight: f64) {
        let limit = if limit == 0.0 { 1.0 } else { limit };

        let mut scored = (1.0 - value / limit).max(0.0);
        if scored > 0.0 && scored < 0.25 {
            scored += 0.25;
        }

        self.intake(scored.clamp(0.0, 1.0), weight);
    }

    fn normalized_accumulators(&self) -> [f64; 4] {
        let total = self.total();
        if total == 0.0 {
            return [0.0; 4];
        }
        self.accumulators().map(|value| value / total)
    }

    /// Absorb a child node: normalize its accumulators to sum to one, scale
    /// by `weight`, add into this node, and record the child for later
    /// introspection. Parents never read a child's raw accumulators.
    pub fn merge(&mut self, child: RiskNode, weight: f64) {
        let [nc, nia, w, dm] = child.normalized_accumulators();

        self.no_concerns += nc * weight;
        self.no_immediate_action += nia * weight;
        self.watchlist += w * weight;
        self.decision_making += dm * weight;

        self.children.push(WeightedChild { weight, node: child });
    }

    /// Softmax over the raw accumulators. Well-defined for all-zero input,
    /// which is why an untouched branch still yields a valid distribution.
    pub fn distribution(&self) -> Distribution {
        let raw = self.accumulators();
        let sum: f64 = raw.iter().map(|value| value.exp()).sum();

        Distribution {
            no_concerns: raw[0].exp() / sum,
            no_immediate_action: raw[1].exp() / sum,
            watchlist: raw[2].exp() / sum,
            decision_making: raw[3].exp() / sum,
        }
    }

    /// The distribution plus the top-band decision. Four identical raw
    /// accumulators carry no signal and report as inconclusive instead of
    /// an arbitrary tie-break winner.
    pub fn conclude(&self) -> (Distribution, Recommendation) {
        let distribution = self.distribution();

        let raw = self.accumulators();
        if raw.iter().all(|&value| value == raw[0]) {
            return (distribution, Recommendation::Inconclusive);
        }

        let top = distribution
            .iter()
            .fold(None::<(Band, f64)>, |best, (band, probability)| match best {
                Some((_, leading)) if probability <= leading => best,
                _ => Some((band, probability)),
            })
            .map(|(band, _)| band)
            .unwrap_or(Band::NoConcerns);

        (distribution, Recommendation::from(top))
    }

    /// Indented dump of the node tree with each band's probability. A
    /// debugging affordance, not a parseable contract.
    pub fn render_deep(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        use std::fmt::Write;

        let indent = "  ".repeat(depth);
        let distribution = self.distribution();

        let _ = write!(out, "{indent}{}:", self.signal);
        for (band, probability) in distribution.iter() {
            let _ = write!(out, " {} {probability:.3} |", band.abbreviation());
        }
        let _ = writeln!(out);

        for child in &self.children {
            let _ = writeln!(out, "{indent}  [weight {}]", child.weight);
            child.node.render_into(out, depth + 2);
        }
    }
}

/// A probability-like distribution over the four bands, summing to one.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Distribution {
    pub no_concerns: f64,
    pub no_immediate_action: f64,
    pub watchlist: f64,
    pub decision_making: f64,
}

impl Distribution {
    pub fn get(&self, band: Band) -> f64 {
        match band {
            Band::NoConcerns => self.no_concerns,
            Band::NoImmediateAction => self.no_immediate_action,
            Band::Watchlist => self.watchlist,
            Band::DecisionMaking => self.decision_making,
        }
    }

    /// Probabilities in band order (the tie-break enumeration order).
    pub fn iter(&self) -> impl Iterator<Item = (Band, f64)> + '_ {
        Band::ALL.into_iter().map(|band| (band, self.get(band)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> RiskNode {
        RiskNode::new(Signal::Activity)
    }

    #[test]
    fn intake_routes_by_value_range() {
        let mut n = node();
        n.intake(1.0, 1.0);
        n.intake(0.75, 1.0);
        n.intake(0.5, 2.0);
        n.intake(0.25, 3.0);
        n.intake(0.0, 4.0);
        n.intake(0.24999, 1.0);

        assert_eq!(n.accumulators(), [2.0, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn intake_rejects_out_of_range_values() {
        let mut n = node();
        n.intake(1.1, 1.0);
        n.intake(-0.1, 1.0);
        n.intake(f64::NAN, 1.0);

        assert_eq!(n.total(), 0.0);
    }

    #[test]
    fn threshold_at_value_routes_to_no_concerns() {
        let mut n = node();
        n.intake_threshold(7.0, 7.0, 2.0);
        assert_eq!(n.no_concerns, 2.0);

        let mut n = node();
        n.intake_threshold(0.0, 7.0, 2.0);
        assert_eq!(n.decision_making, 2.0);
    }

    #[test]
    fn threshold_of_zero_counts_as_met() {
        let mut n = node();
        n.intake_threshold(0.5, 0.0, 1.0);
        assert_eq!(n.watchlist, 1.0);
    }

    #[test]
    fn limit_nudge_shifts_barely_past_values_one_band_up() {
        // 0.99 of the limit leaves a raw score of 0.01, which the nudge
        // lifts to 0.26: Watchlist, not DecisionMaking.
        let mut n = node();
        n.intake_limit(9.9, 10.0, 1.0);
        assert_eq!(n.accumulators(), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn limit_at_or_past_scores_most_severe() {
        let mut n = node();
        n.intake_limit(10.0, 10.0, 1.0);
        n.intake_limit(25.0, 10.0, 1.0);
        assert_eq!(n.decision_making, 2.0);
    }

    #[test]
    fn limit_far_below_scores_no_concerns() {
        let mut n = node();
        n.intake_limit(1.0, 10.0, 1.0);
        assert_eq!(n.no_concerns, 1.0);
    }

    #[test]
    fn merge_normalizes_child_before_scaling() {
        let mut child = node();
        child.no_concerns = 1.0;
        child.watchlist = 3.0;

        let mut parent = RiskNode::new(Signal::Effort);
        parent.merge(child, 8.0);

        assert_eq!(parent.no_concerns, 2.0);
        assert_eq!(parent.watchlist, 6.0);
        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].weight, 8.0);
    }

    #[test]
    fn merge_of_empty_child_adds_nothing() {
        let mut parent = RiskNode::new(Signal::Effort);
        parent.merge(node(), 100.0);

        assert_eq!(parent.total(), 0.0);
        assert_eq!(parent.children.len(), 1);
    }

    #[test]
    fn distribution_sums_to_one_for_zero_and_skewed_nodes() {
        let zero = node().distribution();
        let sum: f64 = zero.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((zero.no_concerns - 0.25).abs() < 1e-12);

        let mut skewed = node();
        skewed.decision_making = 50.0;
        let sum: f64 = skewed.distribution().iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn conclude_picks_argmax_band() {
        let mut n = node();
        n.intake(0.0, 3.0);
        n.intake(1.0, 1.0);

        let (distribution, recommendation) = n.conclude();
        assert_eq!(recommendation, Recommendation::DecisionMaking);
        assert!(distribution.decision_making > distribution.no_concerns);
    }

    #[test]
    fn conclude_reports_inconclusive_when_all_equal() {
        let (_, recommendation) = node().conclude();
        assert_eq!(recommendation, Recommendation::Inconclusive);

        let mut even = node();
        even.no_concerns = 2.0;
        even.no_immediate_action = 2.0;
        even.watchlist = 2.0;
        even.decision_making = 2.0;
        assert_eq!(even.conclude().1, Recommendation::Inconclusive);
    }

    #[test]
    fn render_deep_lists_children_by_weight() {
        let mut parent = RiskNode::new(Signal::Effort);
        let mut child = node();
        child.intake(1.0, 1.0);
        parent.merge(child, 2.0);

        let rendered = parent.render_deep();
        assert!(rendered.contains("Effort"));
        assert!(rendered.contains("[weight 2]"));
        assert!(rendered.contains("Activity"));
    }
}
