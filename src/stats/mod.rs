//! Calendar-month time-series statistics.
//!
//! Every activity-style factor funnels its timestamped facts through this
//! kernel: events are bucketed per calendar month, silent months are filled
//! in explicitly (a project with a six-month gap must show six zero months,
//! or every average is corrupted), and trends compare the recent percentile
//! window against the historical average and the early-project window.

use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeMap;

/// Anything carrying an event timestamp.
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

/// A calendar month. Ordering is chronological: year, then month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(timestamp: DateTime<Utc>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    /// The month after this one.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }
}

/// Calendar-month distance between two months, ignoring days entirely.
pub fn months_between(a: MonthKey, b: MonthKey) -> u32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    ((hi.year - lo.year) * 12 + hi.month as i32 - lo.month as i32) as u32
}

/// Calendar-month distance between two timestamps.
pub fn months_between_dates(a: DateTime<Utc>, b: DateTime<Utc>) -> u32 {
    months_between(MonthKey::of(a), MonthKey::of(b))
}

/// Insert an explicit zero entry for every month missing between the
/// earliest bucket and `now` (inclusive). Buckets beyond `now` are kept.
pub fn fill_missing_months(series: &mut BTreeMap<MonthKey, f64>, now: MonthKey) {
    let Some(first) = series.keys().next().copied() else {
        return;
    };

    let mut month = first;
    while month <= now {
        series.entry(month).or_insert(0.0);
        month = month.next();
    }
}

/// Bucket items into per-month event counts, gap-filled through `now`.
pub fn monthly_counts<T: Timestamped>(items: &[T], now: MonthKey) -> BTreeMap<MonthKey, f64> {
    let mut series: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for item in items {
        *series.entry(MonthKey::of(item.timestamp())).or_insert(0.0) += 1.0;
    }
    fill_missing_months(&mut series, now);
    series
}

/// The three named percentile windows of a chronologically sorted sequence.
#[derive(Clone, Copy, Debug)]
pub struct Windows<'a, T> {
    pub first: &'a [T],
    pub second: &'a [T],
    pub last: &'a [T],
}

/// Split `elements` into `round(100 / percentile)` equal-width windows and
/// return the first, second, and final one.
///
/// Window bounds replicate the truncating float arithmetic the band
/// boundaries were tuned against; with ten elements at the 30th percentile
/// the tail window is `[6..10]` only because `10/3 * 3` lands a hair above
/// 10.0. A single element (or a percentile coarse enough to yield one
/// window) returns the whole slice for all three windows.
pub fn percentile_windows<T>(elements: &[T], percentile: f64) -> Windows<'_, T> {
    let total = elements.len();

    let slices = if percentile > 0.0 {
        (100.0 / percentile).round() as usize
    } else {
        1
    };

    if total <= 1 || slices <= 1 {
        return Windows {
            first: elements,
            second: elements,
            last: elements,
        };
    }

    let per_slice = total as f64 / slices as f64;
    let scope = per_slice.max(1.0);

    // When there are more windows than elements, only the leading `total`
    // windows are populated; the tail window start shifts back accordingly.
    let last_index = slices.min(total) - 1;

    Windows {
        first: window_at(elements, scope, 0),
        second: window_at(elements, scope, 1),
        last: window_at(elements, scope, last_index),
    }
}

fn window_at<T>(elements: &[T], scope: f64, index: usize) -> &[T] {
    let total = elements.len();
    let start = ((scope * index as f64) as usize).min(total);
    let end = ((scope * (index + 1) as f64) as usize).clamp(start, total);
    &elements[start..end]
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `min(1, numerator / denominator)`, with a zero denominator standing in
/// as 1 so configuration gaps and empty windows cannot produce NaN.
pub fn clamped_ratio(numerator: f64, denominator: f64) -> f64 {
    let denominator = if denominator == 0.0 { 1.0 } else { denominator };
    (numerator / denominator).min(1.0)
}

/// Per-month trend over a gap-filled series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Trend {
    pub percentile: f64,
    pub total_months: usize,
    /// Distance from `now` to the most recent month with activity.
    pub months_since_last: u32,
    /// Count in the final month of the series.
    pub last: f64,
    /// Mean across all months, silent months included.
    pub average: f64,
    /// Mean within the second percentile window (early-project pace).
    pub second_window_average: f64,
    /// Mean within the final percentile window (recent pace).
    pub last_window_average: f64,
}

impl Trend {
    /// Is recent pace at least as strong as the historical average?
    pub fn recent_over_average(&self) -> f64 {
        clamped_ratio(self.last_window_average, self.average)
    }

    /// Is recent pace at least as strong as early-project pace? Catches
    /// long-term decline hidden by an inflated all-time average.
    pub fn recent_over_early(&self) -> f64 {
        clamped_ratio(self.last_window_average, self.second_window_average)
    }

    /// Blend of the two ratios: "is this project still moving at its
    /// historical pace".
    pub fn pace(&self) -> f64 {
        (self.recent_over_average() + self.recent_over_early()) / 2.0
    }
}

/// Analyze a bucketed, gap-filled, chronologically sorted series.
pub fn analyze_series(series: &BTreeMap<MonthKey, f64>, percentile: f64, now: MonthKey) -> Trend {
    if series.is_empty() {
        return Trend::default();
    }

    let keys: Vec<MonthKey> = series.keys().copied().collect();
    let values: Vec<f64> = series.values().copied().collect();

    // Most recent month with activity; an all-zero series falls back to
    // its final month.
    let last_active = keys
        .iter()
        .zip(values.iter())
        .rev()
        .find(|(_, &count)| count != 0.0)
        .map(|(&key, _)| key)
        .unwrap_or(keys[keys.len() - 1]);

    let windows = percentile_windows(&values, percentile);

    Trend {
        percentile,
        total_months: keys.len(),
        months_since_last: months_between(last_active, now),
        last: values[values.len() - 1],
        average: average(&values),
        second_window_average: average(windows.second),
        last_window_average: average(windows.last),
    }
}

/// A [`Trend`] augmented with event totals and each window's share of all
/// activity, for factors that reason about activity share rather than pace.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActivityTrend {
    pub trend: Trend,
    pub total_count: usize,
    pub second_window_count: usize,
    pub last_window_count: usize,
    /// Percentages of the all-time event total.
    pub average_share: f64,
    pub last_share: f64,
    pub second_window_share: f64,
    pub last_window_share: f64,
}

/// Bucket timestamped items by month and analyze the resulting counts.
pub fn analyze_activity<T: Timestamped>(
    items: &[T],
    percentile: f64,
    now: MonthKey,
) -> ActivityTrend {
    if items.is_empty() {
        return ActivityTrend::default();
    }

    let series = monthly_counts(items, now);
    let trend = analyze_series(&series, percentile, now);

    let values: Vec<f64> = series.values().copied().collect();
    let windows = percentile_windows(&values, percentile);
    let second_count = windows.second.iter().sum::<f64>() as usize;
    let last_count = windows.last.iter().sum::<f64>() as usize;

    let total = items.len();
    let share = |value: f64| value / total as f64 * 100.0;

    ActivityTrend {
        trend,
        total_count: total,
        second_window_count: second_count,
        last_window_count: last_count,
        average_share: share(trend.average),
        last_share: share(trend.last),
        second_window_share: share(second_count as f64),
        last_window_share: share(last_count as f64),
    }
}
