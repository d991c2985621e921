//! Revenue ledger and its adjustment history.

use chrono::{DateTime, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One signed revenue movement: an order total, a reversal, or a manual
/// adjustment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevenuePoint {
    /// Unix timestamp of the movement.
    pub at: i64,
    /// Signed amount.
    pub delta: Money,
}

/// One bar of the runner dashboard's daily chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyRevenue {
    /// Calendar day (UTC).
    pub day: NaiveDate,
    /// Net movement that day.
    pub total: Money,
}

/// The running revenue total plus its movement history.
///
/// Manual adjustments may push the total negative; the history is the
/// only record of how it got wherever it is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Revenue {
    total: Money,
    history: Vec<RevenuePoint>,
}

impl Revenue {
    /// Start at zero with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted parts.
    pub fn from_parts(total: Money, history: Vec<RevenuePoint>) -> Self {
        Self { total, history }
    }

    /// The running total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Movements, oldest first.
    pub fn history(&self) -> &[RevenuePoint] {
        &self.history
    }

    /// Record a signed movement.
    pub fn record(&mut self, delta: Money, at: i64) {
        self.total = self.total + delta;
        self.history.push(RevenuePoint { at, delta });
    }

    /// Net movement per day for the last `days` days ending at `now`,
    /// oldest day first. Days without movements report zero.
    pub fn daily_totals(&self, days: usize, now: i64) -> Vec<DailyRevenue> {
        if days == 0 {
            return Vec::new();
        }
        let today = to_day(now);
        let window_start = today - Duration::days(days.saturating_sub(1) as i64);

        let mut totals = vec![Money::ZERO; days];
        for point in &self.history {
            let day = to_day(point.at);
            if day < window_start || day > today {
                continue;
            }
            let idx = (day - window_start).num_days() as usize;
            totals[idx] = totals[idx] + point.delta;
        }

        totals
            .into_iter()
            .enumerate()
            .map(|(i, total)| DailyRevenue {
                day: window_start + Duration::days(i as i64),
                total,
            })
            .collect()
    }
}

fn to_day(timestamp: i64) -> NaiveDate {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
