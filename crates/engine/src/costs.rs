//! Cost items: the records the ledger is made of.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, EngineError, ResultEngine, util::normalize_required_text};

/// A stored expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub id: Uuid,
    pub description: String,
    pub category: Category,
    pub sum: f64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Timestamp of a new cost, as the client sent it.
#[derive(Clone, Debug, PartialEq)]
pub enum CreatedAt {
    /// RFC 3339, naive local date-time or `YYYY-MM-DD`.
    Text(String),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Any other value, kept for logging only.
    Other(String),
}

/// Unvalidated input for [`Engine::add_cost`].
///
/// Every field is optional so that absent fields surface as a validation
/// error instead of a deserialization failure. `created_at` is kept raw: it is
/// resolved against the engine clock and timezone.
///
/// [`Engine::add_cost`]: crate::Engine::add_cost
#[derive(Clone, Debug, Default)]
pub struct NewCost {
    pub description: Option<String>,
    pub category: Option<String>,
    pub sum: Option<f64>,
    pub user_id: Option<String>,
    pub created_at: Option<CreatedAt>,
}

/// A [`NewCost`] that passed validation, still without a timestamp.
#[derive(Debug)]
pub(crate) struct CostDraft {
    pub(crate) description: String,
    pub(crate) category: Category,
    pub(crate) sum: f64,
    pub(crate) user_id: String,
    pub(crate) created_at: Option<CreatedAt>,
}

impl NewCost {
    /// Checks, in order: required fields, category, sum.
    pub(crate) fn validate(self) -> ResultEngine<CostDraft> {
        let description = normalize_required_text(self.description);
        let category = normalize_required_text(self.category);
        let user_id = normalize_required_text(self.user_id);

        let mut missing = Vec::new();
        if description.is_none() {
            missing.push("description");
        }
        if category.is_none() {
            missing.push("category");
        }
        if self.sum.is_none() {
            missing.push("sum");
        }
        if user_id.is_none() {
            missing.push("userid");
        }

        let (Some(description), Some(category), Some(sum), Some(user_id)) =
            (description, category, self.sum, user_id)
        else {
            return Err(EngineError::MissingFields(missing));
        };

        let category = Category::try_from(category.as_str())?;

        if !sum.is_finite() {
            return Err(EngineError::InvalidAmount(sum.to_string()));
        }
        if sum < 0.0 {
            return Err(EngineError::NegativeSum(sum));
        }

        Ok(CostDraft {
            description,
            category,
            sum,
            user_id,
            created_at: self.created_at,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "costs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub description: String,
    pub category: String,
    #[sea_orm(column_type = "Double")]
    pub sum: f64,
    pub user_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Cost> for ActiveModel {
    fn from(cost: &Cost) -> Self {
        Self {
            id: ActiveValue::Set(cost.id.to_string()),
            description: ActiveValue::Set(cost.description.clone()),
            category: ActiveValue::Set(cost.category.as_str().to_string()),
            sum: ActiveValue::Set(cost.sum),
            user_id: ActiveValue::Set(cost.user_id.clone()),
            created_at: ActiveValue::Set(cost.created_at),
        }
    }
}

impl TryFrom<Model> for Cost {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&model.id)
            .map_err(|_| DbErr::Custom(format!("invalid cost id in storage: {}", model.id)))?;
        let category = Category::try_from(model.category.as_str()).map_err(|_| {
            DbErr::Custom(format!("invalid category in storage: {}", model.category))
        })?;
        Ok(Self {
            id,
            description: model.description,
            category,
            sum: model.sum,
            user_id: model.user_id,
            created_at: model.created_at,
        })
    }
}
