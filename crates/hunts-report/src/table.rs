//! Fixed-width report tables.
//!
//! Three tables in fixed order: "Appeared once", "Upcoming", "Due". Column
//! layout matches the established report format: name left-justified in 30
//! columns, a centred 10-column middle cell, and a right-justified 15-column
//! date cell.

use std::io::{self, Write};

use hunts_core::dates::format_date;
use hunts_core::models::{Classification, OnceCar, PredictedCar};

const NAME_WIDTH: usize = 30;
const WEEKS_WIDTH: usize = 10;
const DATE_WIDTH: usize = 15;

// ── Public API ────────────────────────────────────────────────────────────────

/// Write the full three-table report to `out`.
///
/// Tables appear in fixed order with one blank line between them. The once
/// table is sorted by the single observation date; the upcoming and due
/// tables are sorted by the predicted next hunt. Ties keep the alphabetical
/// name order the classifier produced (the sorts are stable).
pub fn render_report(out: &mut impl Write, classification: &Classification) -> io::Result<()> {
    render_once_table(out, &classification.once)?;
    writeln!(out)?;
    render_prediction_table(out, "Upcoming", &classification.upcoming)?;
    writeln!(out)?;
    render_prediction_table(out, "Due", &classification.due)?;
    Ok(())
}

/// Write the "Appeared once" table: name and single observation date.
pub fn render_once_table(out: &mut impl Write, cars: &[OnceCar]) -> io::Result<()> {
    writeln!(out, "----------Appeared once----------")?;
    writeln!(
        out,
        "{:<name$}{:^weeks$}{:>date$}",
        "Car Name",
        "",
        "Date",
        name = NAME_WIDTH,
        weeks = WEEKS_WIDTH,
        date = DATE_WIDTH
    )?;

    let mut sorted: Vec<&OnceCar> = cars.iter().collect();
    sorted.sort_by_key(|car| car.date);

    for car in sorted {
        writeln!(
            out,
            "{:<name$}{:^weeks$}{:>date$}",
            car.name,
            "",
            format_date(car.date),
            name = NAME_WIDTH,
            weeks = WEEKS_WIDTH,
            date = DATE_WIDTH
        )?;
    }
    Ok(())
}

/// Write an "Upcoming" or "Due" table: name, average weeks, predicted date.
pub fn render_prediction_table(
    out: &mut impl Write,
    title: &str,
    cars: &[PredictedCar],
) -> io::Result<()> {
    writeln!(out, "----------{title}----------")?;
    writeln!(
        out,
        "{:<name$}{:^weeks$}{:>date$}",
        "Car Name",
        "AVG Weeks",
        "Next Date",
        name = NAME_WIDTH,
        weeks = WEEKS_WIDTH,
        date = DATE_WIDTH
    )?;

    let mut sorted: Vec<&PredictedCar> = cars.iter().collect();
    sorted.sort_by_key(|car| car.next_hunt);

    for car in sorted {
        writeln!(
            out,
            "{:<name$}{:^weeks$}{:>date$}",
            car.name,
            car.avg_weeks,
            format_date(car.next_hunt),
            name = NAME_WIDTH,
            weeks = WEEKS_WIDTH,
            date = DATE_WIDTH
        )?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn once(name: &str, d: NaiveDate) -> OnceCar {
        OnceCar {
            name: name.to_string(),
            date: d,
        }
    }

    fn predicted(name: &str, avg_weeks: i64, next: NaiveDate) -> PredictedCar {
        PredictedCar {
            name: name.to_string(),
            avg_weeks,
            next_hunt: next,
        }
    }

    fn render_to_string(classification: &Classification) -> String {
        let mut buf = Vec::new();
        render_report(&mut buf, classification).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Layout ────────────────────────────────────────────────────────────────

    #[test]
    fn test_once_table_exact_layout() {
        let mut buf = Vec::new();
        render_once_table(&mut buf, &[once("Mini", date(2020, 1, 1))]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // "Car Name" left in 30, blank filler of 10, "Date" right in 15.
        let header = format!("Car Name{}Date", " ".repeat(22 + 10 + 11));
        let row = format!("Mini{}01.01.2020", " ".repeat(26 + 10 + 5));
        assert_eq!(
            text,
            format!("----------Appeared once----------\n{header}\n{row}\n")
        );
    }

    #[test]
    fn test_prediction_table_exact_layout() {
        let mut buf = Vec::new();
        render_prediction_table(&mut buf, "Upcoming", &[predicted("Tesla", 2, date(2020, 2, 12))])
            .unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("----------Upcoming----------"));

        // Header: "Car Name" in 30, "AVG Weeks" centred in 10 (extra space on
        // the right), "Next Date" right-justified in 15.
        let header = lines.next().unwrap();
        assert_eq!(header.len(), 55);
        assert!(header.starts_with("Car Name"));
        assert_eq!(&header[30..40], "AVG Weeks ");
        assert_eq!(&header[40..], "      Next Date");

        // Row: "2" centred in 10 → four spaces left, five right.
        let row = lines.next().unwrap();
        assert_eq!(row.len(), 55);
        assert!(row.starts_with("Tesla"));
        assert_eq!(&row[30..40], "    2     ");
        assert_eq!(&row[40..], "     12.02.2020");
    }

    #[test]
    fn test_name_longer_than_column_is_not_truncated() {
        let long_name = "A-Car-With-A-Very-Long-Model-Name-Indeed";
        let mut buf = Vec::new();
        render_once_table(&mut buf, &[once(long_name, date(2020, 1, 1))]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(long_name));
    }

    // ── Ordering ──────────────────────────────────────────────────────────────

    #[test]
    fn test_once_table_sorted_by_date() {
        let cars = vec![
            once("Late", date(2020, 3, 1)),
            once("Early", date(2020, 1, 1)),
            once("Middle", date(2020, 2, 1)),
        ];
        let mut buf = Vec::new();
        render_once_table(&mut buf, &cars).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let early = text.find("Early").unwrap();
        let middle = text.find("Middle").unwrap();
        let late = text.find("Late").unwrap();
        assert!(early < middle && middle < late);
    }

    #[test]
    fn test_prediction_table_sorted_by_next_hunt() {
        let cars = vec![
            predicted("Zoe", 1, date(2020, 5, 1)),
            predicted("Audi", 4, date(2020, 3, 1)),
        ];
        let mut buf = Vec::new();
        render_prediction_table(&mut buf, "Due", &cars).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.find("Audi").unwrap() < text.find("Zoe").unwrap());
    }

    #[test]
    fn test_prediction_table_ties_keep_name_order() {
        // Same next hunt date: the stable sort must preserve input order,
        // which the classifier hands over alphabetically.
        let cars = vec![
            predicted("Audi", 1, date(2020, 5, 1)),
            predicted("BMW", 2, date(2020, 5, 1)),
        ];
        let mut buf = Vec::new();
        render_prediction_table(&mut buf, "Due", &cars).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.find("Audi").unwrap() < text.find("BMW").unwrap());
    }

    // ── Full report ───────────────────────────────────────────────────────────

    #[test]
    fn test_report_table_order_and_blank_lines() {
        let classification = Classification {
            once: vec![once("Mini", date(2020, 1, 1))],
            upcoming: vec![predicted("Tesla", 2, date(2020, 2, 12))],
            due: vec![predicted("Audi", 3, date(2019, 12, 1))],
        };
        let text = render_to_string(&classification);

        let once_pos = text.find("----------Appeared once----------").unwrap();
        let upcoming_pos = text.find("----------Upcoming----------").unwrap();
        let due_pos = text.find("----------Due----------").unwrap();
        assert!(once_pos < upcoming_pos && upcoming_pos < due_pos);

        // Exactly one blank line between consecutive tables.
        assert!(text.contains("\n\n----------Upcoming"));
        assert!(text.contains("\n\n----------Due"));
    }

    #[test]
    fn test_report_empty_classification_still_prints_headers() {
        let text = render_to_string(&Classification::default());

        assert!(text.contains("----------Appeared once----------"));
        assert!(text.contains("----------Upcoming----------"));
        assert!(text.contains("----------Due----------"));
        // Three header rows, no data rows.
        assert_eq!(text.matches("Car Name").count(), 3);
    }
}
