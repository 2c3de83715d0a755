use chrono::NaiveDate;

/// A tracked car and the dates on which hunts for it were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    /// Unique, case-sensitive car name from the log.
    pub name: String,
    /// Hunt dates in the order they appear in the log. Never sorted;
    /// duplicates are permitted.
    pub dates: Vec<NaiveDate>,
}

impl Car {
    /// Create a car from its first logged hunt.
    pub fn new(name: impl Into<String>, first_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            dates: vec![first_date],
        }
    }
}

/// Derived recurrence statistics for a car with at least two hunts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuntPrediction {
    /// Mean gap between consecutive log entries, in whole weeks
    /// (truncated, not rounded).
    pub avg_weeks: i64,
    /// Expected date of the next hunt: last logged date + `avg_weeks` weeks.
    pub next_hunt: NaiveDate,
}

/// A car with exactly one recorded hunt; no prediction is possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnceCar {
    pub name: String,
    /// The single observation date.
    pub date: NaiveDate,
}

/// A car with a computed prediction, ready for the upcoming/due tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictedCar {
    pub name: String,
    pub avg_weeks: i64,
    pub next_hunt: NaiveDate,
}

/// The three-way partition of all cars in the log.
///
/// Every distinct car name lands in exactly one of the three lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Cars seen exactly once.
    pub once: Vec<OnceCar>,
    /// Cars whose predicted next hunt is today or later.
    pub upcoming: Vec<PredictedCar>,
    /// Cars whose predicted next hunt has already passed.
    pub due: Vec<PredictedCar>,
}

impl Classification {
    /// Total number of classified cars across all three lists.
    pub fn total(&self) -> usize {
        self.once.len() + self.upcoming.len() + self.due.len()
    }
}
