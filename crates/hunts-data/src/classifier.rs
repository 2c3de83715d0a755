//! Three-way classification of cars into once / upcoming / due.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use hunts_core::models::{Classification, OnceCar, PredictedCar};
use hunts_core::prediction::IntervalEstimator;

/// Partition all cars into the once / upcoming / due buckets.
///
/// * A car with exactly one hunt goes to `once`; no statistics are computed.
/// * Otherwise its next hunt is predicted; a prediction strictly before
///   `today` means `due`, anything from `today` onwards means `upcoming`.
///
/// Cars are processed in name-sorted order (the `BTreeMap` iteration order),
/// so the result is deterministic regardless of log order. Every car lands
/// in exactly one bucket.
pub fn classify(cars: &BTreeMap<String, Vec<NaiveDate>>, today: NaiveDate) -> Classification {
    let mut classification = Classification::default();

    for (name, dates) in cars {
        match IntervalEstimator::predict_next(dates) {
            Some(prediction) => {
                let car = PredictedCar {
                    name: name.clone(),
                    avg_weeks: prediction.avg_weeks,
                    next_hunt: prediction.next_hunt,
                };
                if prediction.next_hunt < today {
                    classification.due.push(car);
                } else {
                    classification.upcoming.push(car);
                }
            }
            None => {
                if let Some(&date) = dates.first() {
                    classification.once.push(OnceCar {
                        name: name.clone(),
                        date,
                    });
                }
            }
        }
    }

    classification
}

// ── Tests ─────────────────────────────────────────────────────────────────────
