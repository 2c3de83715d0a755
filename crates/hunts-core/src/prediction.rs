use chrono::NaiveDate;

use crate::models::HuntPrediction;

/// Stateless collection of recurrence-interval calculations.
///
/// Gaps are measured between *adjacent entries in log order*, not between
/// chronological neighbours, and the prediction anchors on the last date as
/// read from the log. For a chronologically sorted log the two views agree;
/// for an unsorted log this reproduces the reference behaviour rather than
/// silently re-sorting the data.
pub struct IntervalEstimator;

impl IntervalEstimator {
    /// Compute the mean gap between consecutive log entries in whole weeks.
    ///
    /// Each gap is the absolute day difference of an adjacent pair divided by
    /// 7 (fractional weeks); the mean over all `len - 1` gaps is truncated
    /// toward zero. Returns `None` when fewer than two dates are recorded.
    pub fn average_interval_weeks(dates: &[NaiveDate]) -> Option<i64> {
        if dates.len() < 2 {
            return None;
        }
        let total_weeks: f64 = dates
            .windows(2)
            .map(|pair| (pair[0] - pair[1]).num_days().abs() as f64 / 7.0)
            .sum();
        let gaps = (dates.len() - 1) as f64;
        Some((total_weeks / gaps) as i64)
    }

    /// Predict the next hunt: last logged date plus the average interval.
    ///
    /// Returns `None` when fewer than two dates are recorded (no interval
    /// can be derived from a single observation).
    pub fn predict_next(dates: &[NaiveDate]) -> Option<HuntPrediction> {
        let avg_weeks = Self::average_interval_weeks(dates)?;
        let last = *dates.last()?;
        Some(HuntPrediction {
            avg_weeks,
            next_hunt: last + chrono::Duration::weeks(avg_weeks),
        })
    }
}
