use sea_orm::{TransactionTrait, prelude::*};

use crate::{EngineError, NewUser, ResultEngine, User, costs, users};

use super::{Engine, with_tx};

impl Engine {
    /// Look up a user by id.
    pub async fn user_details(&self, user_id: &str) -> ResultEngine<User> {
        let model = users::Entity::find_by_id(user_id.trim().to_string())
            .one(&self.database)
            .await?;
        match model {
            Some(model) => Ok(User::from(model)),
            None => {
                tracing::debug!(user_id, "user not found");
                Err(EngineError::UserNotFound(user_id.to_string()))
            }
        }
    }

    /// Register a user with a zero total.
    pub async fn create_user(&self, new_user: NewUser) -> ResultEngine<User> {
        let user = new_user.validate()?;

        let result: ResultEngine<User> = with_tx!(self, |db_tx| {
            let existing = users::Entity::find_by_id(user.id.clone())
                .one(&db_tx)
                .await?;
            if existing.is_some() {
                Err(EngineError::ExistingUser(user.id.clone()))
            } else {
                users::ActiveModel::from(&user).insert(&db_tx).await?;
                Ok(user)
            }
        });

        match &result {
            Ok(user) => tracing::info!(user_id = %user.id, "user created"),
            Err(err) => tracing::warn!(error = %err, "user not created"),
        }
        result
    }

    /// Delete every cost and every user.
    pub async fn reset(&self) -> ResultEngine<()> {
        let (costs_deleted, users_deleted) = with_tx!(self, |db_tx| {
            let costs_deleted = costs::Entity::delete_many().exec(&db_tx).await?;
            let users_deleted = users::Entity::delete_many().exec(&db_tx).await?;
            Ok::<_, EngineError>((costs_deleted.rows_affected, users_deleted.rows_affected))
        })?;
        tracing::info!(costs_deleted, users_deleted, "ledger reset");
        Ok(())
    }
}
