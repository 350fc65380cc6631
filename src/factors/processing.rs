//! Processing: how quickly reported issues get closed down.

use std::collections::BTreeMap;

use crate::config::ProcessingConfig;
use crate::facts::{Facts, Issue};
use crate::risk::{RiskNode, Signal};
use crate::stats::{
    analyze_series, fill_missing_months, months_between, MonthKey,
};

pub fn processing(facts: &Facts, config: &ProcessingConfig, now: MonthKey) -> RiskNode {
    let mut node = RiskNode::new(Signal::Processing);

    let Some(repository) = &facts.repository else {
        return node;
    };

    if repository.issues.is_empty() {
        return node;
    }

    let closed: Vec<&Issue> = repository
        .issues
        .iter()
        .filter(|issue| issue.is_closed() && issue.closed_at.is_some())
        .collect();

    if closed.is_empty() {
        return node;
    }

    let average_closing_months = closed
        .iter()
        .filter_map(|issue| {
            issue
                .closed_at
                .map(|closed_at| months_between(MonthKey::of(issue.created_at), MonthKey::of(closed_at)) as f64)
        })
        .sum::<f64>()
        / closed.len() as f64;

    node.intake_limit(
        average_closing_months,
        config.closing_time_limit_months,
        config.closing_time_weight,
    );

    let burn = monthly_burn_score(&repository.issues, &closed, config.percentile, now);
    node.intake(burn, config.burn_weight);

    node
}

/// Per-month ratio of closed to opened issues, carrying a running backlog
/// balance: a month with no closures is only scored when there is backlog
/// left to burn. Opened counts substitute 1 when zero so a closure-only
/// month still scores.
fn monthly_burn_score(
    issues: &[Issue],
    closed: &[&Issue],
    percentile: f64,
    now: MonthKey,
) -> f64 {
    let mut opened_by_month: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for issue in issues {
        *opened_by_month
            .entry(MonthKey::of(issue.created_at))
            .or_insert(0.0) += 1.0;
    }

    let mut closed_by_month: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for issue in closed {
        if let Some(closed_at) = issue.closed_at {
            *closed_by_month.entry(MonthKey::of(closed_at)).or_insert(0.0) += 1.0;
        }
    }

    let mut series: BTreeMap<MonthKey, f64> = opened_by_month
        .keys()
        .chain(closed_by_month.keys())
        .map(|&month| (month, 0.0))
        .collect();
    fill_missing_months(&mut series, now);

    let mut balance = 0.0;
    for (month, value) in series.iter_mut() {
        let opened = opened_by_month.get(month).copied().unwrap_or(0.0);
        let closed = closed_by_month.get(month).copied().unwrap_or(0.0);

        balance += opened - closed;

        if closed == 0.0 && balance == 0.0 {
            continue;
        }

        let opened = if opened == 0.0 { 1.0 } else { opened };
        *value = closed / opened;
    }

    let trend = analyze_series(&series, percentile, now);

    (2.0 * trend.average.min(1.0) + trend.recent_over_average()) / 3.0
}
