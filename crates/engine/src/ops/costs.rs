use sea_orm::{DatabaseTransaction, QueryFilter, TransactionTrait, prelude::*, sea_query::Expr};
use uuid::Uuid;

use crate::{
    Cost, NewCost, ResultEngine, User, costs,
    users::{self, DEFAULT_MARITAL_STATUS, default_birthday},
};

use super::{Engine, with_tx};

impl Engine {
    /// Validate and store a new cost, adding its sum to the owner's total.
    ///
    /// A user that does not exist yet is created on the fly, with empty names
    /// and the cost sum as total. Insert and total update share one DB
    /// transaction.
    pub async fn add_cost(&self, new_cost: NewCost) -> ResultEngine<Cost> {
        let draft = match new_cost.validate() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::warn!(error = ?err, "rejected cost");
                return Err(err);
            }
        };

        let cost = Cost {
            id: Uuid::new_v4(),
            created_at: self.resolve_created_at(draft.created_at.as_ref()),
            description: draft.description,
            category: draft.category,
            sum: draft.sum,
            user_id: draft.user_id,
        };

        let result: ResultEngine<Cost> = with_tx!(self, |db_tx| {
            self.credit_user(&db_tx, &cost.user_id, cost.sum).await?;
            costs::ActiveModel::from(&cost).insert(&db_tx).await?;
            Ok(cost)
        });

        if let Ok(cost) = &result {
            tracing::info!(
                cost_id = %cost.id,
                user_id = %cost.user_id,
                category = %cost.category,
                sum = cost.sum,
                "cost added"
            );
        }
        result
    }

    /// Add `sum` to the user's running total, creating the user if needed.
    async fn credit_user(
        &self,
        db_tx: &DatabaseTransaction,
        user_id: &str,
        sum: f64,
    ) -> ResultEngine<()> {
        let updated = users::Entity::update_many()
            .col_expr(
                users::Column::Total,
                Expr::col(users::Column::Total).add(sum),
            )
            .filter(users::Column::Id.eq(user_id))
            .exec(db_tx)
            .await?;

        if updated.rows_affected == 0 {
            let user = User {
                id: user_id.to_string(),
                first_name: String::new(),
                last_name: String::new(),
                birthday: default_birthday(),
                marital_status: DEFAULT_MARITAL_STATUS.to_string(),
                total: sum,
            };
            users::ActiveModel::from(&user).insert(db_tx).await?;
            tracing::info!(user_id, "user created implicitly");
        }

        Ok(())
    }
}
