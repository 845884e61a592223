use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{
    Cost, EngineError, MonthlyReport, ResultEngine, costs,
    report::{group_by_category, month_window},
};

use super::Engine;

impl Engine {
    /// Costs of `user_id` created during `month` of `year`, grouped by category.
    ///
    /// The month is taken in the engine timezone. An unknown user yields a
    /// report with every category empty.
    pub async fn monthly_report(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> ResultEngine<MonthlyReport> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(EngineError::MissingParameters);
        }
        let (start, end) = month_window(self.timezone, year, month)?;

        let models: Vec<costs::Model> = costs::Entity::find()
            .filter(costs::Column::UserId.eq(user_id))
            .filter(costs::Column::CreatedAt.gte(start))
            .filter(costs::Column::CreatedAt.lt(end))
            .order_by_asc(costs::Column::CreatedAt)
            .order_by_asc(costs::Column::Id)
            .all(&self.database)
            .await?;

        let costs = models
            .into_iter()
            .map(Cost::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;

        tracing::debug!(user_id, year, month, found = costs.len(), "monthly report");

        Ok(MonthlyReport {
            user_id: user_id.to_string(),
            year,
            month,
            costs: group_by_category(costs, self.timezone),
        })
    }
}
