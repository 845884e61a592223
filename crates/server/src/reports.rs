//! Monthly report endpoint.

use std::collections::BTreeMap;

use api_types::report::{MonthlyReportView, ReportLineView, ReportQuery};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use engine::EngineError;

use crate::{ServerError, server::ServerState};

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn map_report(report: engine::MonthlyReport) -> MonthlyReportView {
    let costs = report
        .costs
        .into_iter()
        .map(|(category, lines)| {
            let lines = lines
                .into_iter()
                .map(|line| ReportLineView {
                    sum: line.sum,
                    description: line.description,
                    day: line.day,
                })
                .collect();
            BTreeMap::from([(category.as_str().to_string(), lines)])
        })
        .collect();

    MonthlyReportView {
        userid: report.user_id,
        year: report.year,
        month: report.month,
        costs,
    }
}

pub async fn get(
    State(state): State<ServerState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<MonthlyReportView>, ServerError> {
    let Query(query) = query?;

    let (Some(id), Some(year), Some(month)) = (
        present(query.id),
        present(query.year),
        present(query.month),
    ) else {
        return Err(EngineError::MissingParameters.into());
    };

    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidPeriod(format!("year {year}")))?;
    let month: u32 = month
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidPeriod(format!("month {month}")))?;

    let report = state.engine.monthly_report(&id, year, month).await?;

    Ok(Json(map_report(report)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_missing() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("  ".to_string())), None);
        assert_eq!(present(Some("7".to_string())), Some("7".to_string()));
    }
}
