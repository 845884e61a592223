//! Monthly report: a user's costs for one calendar month, grouped by category.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{Category, Cost, EngineError, ResultEngine, util::local_midnight};

/// One cost as it appears in a report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub sum: f64,
    pub description: String,
    /// Day of the month, in the engine timezone.
    pub day: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub user_id: String,
    pub year: i32,
    pub month: u32,
    /// One entry per category, in [`Category::ALL`] order, possibly empty.
    pub costs: Vec<(Category, Vec<ReportLine>)>,
}

impl MonthlyReport {
    /// Lines recorded under `category`.
    pub fn lines(&self, category: Category) -> &[ReportLine] {
        self.costs
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or_default()
    }

    /// Sum of every line in the report.
    pub fn total(&self) -> f64 {
        self.costs
            .iter()
            .flat_map(|(_, lines)| lines.iter())
            .map(|line| line.sum)
            .sum()
    }
}

/// The `[start, end)` UTC window covering `month` of `year` in `tz`.
pub(crate) fn month_window(
    tz: Tz,
    year: i32,
    month: u32,
) -> ResultEngine<(DateTime<Utc>, DateTime<Utc>)> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidPeriod(format!("month {month} out of range")));
    }
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1), 1)
    } else {
        (Some(year), month + 1)
    };

    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = next_year.and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1));
    let (Some(first), Some(next)) = (first, next) else {
        return Err(EngineError::InvalidPeriod(format!("year {year} out of range")));
    };

    match (local_midnight(tz, first), local_midnight(tz, next)) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(EngineError::InvalidPeriod(format!(
            "{year}-{month:02} not representable in {tz}"
        ))),
    }
}

/// Group costs by category, keeping every category even when empty.
///
/// Input order is preserved inside each category.
pub(crate) fn group_by_category(costs: Vec<Cost>, tz: Tz) -> Vec<(Category, Vec<ReportLine>)> {
    let mut grouped: Vec<(Category, Vec<ReportLine>)> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();

    for cost in costs {
        let day = cost.created_at.with_timezone(&tz).day();
        if let Some((_, lines)) = grouped.iter_mut().find(|(c, _)| *c == cost.category) {
            lines.push(ReportLine {
                sum: cost.sum,
                description: cost.description,
                day,
            });
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;

    fn cost(category: Category, sum: f64, at: DateTime<Utc>) -> Cost {
        Cost {
            id: Uuid::new_v4(),
            description: format!("{category} {sum}"),
            category,
            sum,
            user_id: "u".to_string(),
            created_at: at,
        }
    }

    #[test]
    fn window_spans_the_whole_month() {
        let (start, end) = month_window(Tz::UTC, 2025, 2).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn december_rolls_over_to_next_year() {
        let (start, end) = month_window(Tz::UTC, 2024, 12).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn window_follows_the_timezone() {
        let (start, end) = month_window(Tz::Europe__Rome, 2025, 3).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 2, 28, 23, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 3, 31, 22, 0, 0).unwrap());
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        for month in [0, 13, 42] {
            assert!(matches!(
                month_window(Tz::UTC, 2025, month),
                Err(EngineError::InvalidPeriod(_))
            ));
        }
    }

    #[test]
    fn unrepresentable_year_is_rejected() {
        assert!(matches!(
            month_window(Tz::UTC, i32::MAX, 12),
            Err(EngineError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn grouping_keeps_every_category() {
        let at = Utc.with_ymd_and_hms(2025, 2, 15, 12, 0, 0).unwrap();
        let grouped = group_by_category(
            vec![
                cost(Category::Food, 50.0, at),
                cost(Category::Health, 100.0, at),
                cost(Category::Food, 20.0, at),
            ],
            Tz::UTC,
        );

        let categories: Vec<Category> = grouped.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, Category::ALL.to_vec());

        let report = MonthlyReport {
            user_id: "u".to_string(),
            year: 2025,
            month: 2,
            costs: grouped,
        };
        assert_eq!(report.lines(Category::Food).len(), 2);
        assert_eq!(report.lines(Category::Food)[1].sum, 20.0);
        assert_eq!(report.lines(Category::Health)[0].day, 15);
        assert!(report.lines(Category::Sport).is_empty());
        assert_eq!(report.total(), 170.0);
    }

    #[test]
    fn day_is_taken_in_the_engine_timezone() {
        let late_evening = Utc.with_ymd_and_hms(2025, 2, 14, 23, 30, 0).unwrap();
        let grouped = group_by_category(
            vec![cost(Category::Sport, 5.0, late_evening)],
            Tz::Europe__Rome,
        );
        let (_, sport) = &grouped[3];
        assert_eq!(sport[0].day, 15);
    }
}
