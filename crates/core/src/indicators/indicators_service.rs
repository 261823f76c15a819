use std::cmp::Ordering;

use super::{AlertRank, IndicatorSummary, RecentHigh, Streak};
use crate::series::Valued;
use crate::settings::AnalyticsSettings;

/// Highest value over the trailing `window_len` points.
///
/// Operates on raw values. The earliest occurrence wins when the high repeats,
/// and `at_high` is true whenever the latest value equals the high.
pub fn recent_high<T: Valued>(values: &[T], window_len: usize) -> Option<RecentHigh> {
    let window_len = window_len.max(1);
    let start = values.len().saturating_sub(window_len);
    let trailing = &values[start..];
    let latest = trailing.last()?;

    let mut high = &trailing[0];
    for point in &trailing[1..] {
        if point.value() > high.value() {
            high = point;
        }
    }

    Some(RecentHigh {
        high: high.value(),
        high_date: high.date(),
        current: latest.value(),
        current_date: latest.date(),
        at_high: latest.value() == high.value(),
        window_len: trailing.len(),
    })
}

/// Counts strictly increasing steps walking back from the latest point.
///
/// The count stops at the first flat or down step. `alert` is raised when a
/// non-zero `threshold` is reached.
pub fn increase_streak<T: Valued>(values: &[T], threshold: usize) -> Streak {
    let current = values
        .windows(2)
        .rev()
        .take_while(|pair| pair[1].value() > pair[0].value())
        .count();

    Streak {
        current,
        threshold,
        alert: threshold > 0 && current >= threshold,
    }
}

impl IndicatorSummary {
    /// Evaluates both indicators with the configured window and threshold.
    pub fn evaluate<T: Valued>(values: &[T], settings: &AnalyticsSettings) -> Self {
        let recent_high = recent_high(values, settings.recent_high_window);
        let streak = increase_streak(values, settings.streak_alert_threshold);
        let at_high = settings.alert_on_recent_high
            && recent_high.as_ref().is_some_and(|high| high.at_high);

        Self {
            recent_high,
            streak,
            alert_active: streak.alert || at_high,
        }
    }

    pub fn rank(&self, active: bool) -> AlertRank {
        AlertRank::new(self.alert_active, active)
    }
}

/// Alert-first ordering: items with an active alert come first, then active
/// items before inactive ones, then the caller's fallback.
pub fn compare_alert_first<T, F>(
    a: &T,
    b: &T,
    rank_a: AlertRank,
    rank_b: AlertRank,
    fallback: F,
) -> Ordering
where
    F: FnOnce(&T, &T) -> Ordering,
{
    rank_b
        .alert
        .cmp(&rank_a.alert)
        .then_with(|| rank_b.active.cmp(&rank_a.active))
        .then_with(|| fallback(a, b))
}

/// Stable in-place sort using [`compare_alert_first`].
pub fn sort_alert_first<T, R, F>(items: &mut [T], rank_of: R, mut fallback: F)
where
    R: Fn(&T) -> AlertRank,
    F: FnMut(&T, &T) -> Ordering,
{
    items.sort_by(|a, b| compare_alert_first(a, b, rank_of(a), rank_of(b), &mut fallback));
}
