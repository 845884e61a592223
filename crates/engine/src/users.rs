//! Users owning cost items.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine, util::normalize_required_text};

pub(crate) const DEFAULT_MARITAL_STATUS: &str = "single";

pub(crate) fn default_birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2001, 1, 1).unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub marital_status: String,
    /// Sum of every cost recorded for the user.
    pub total: f64,
}

/// Unvalidated input for [`Engine::create_user`].
///
/// [`Engine::create_user`]: crate::Engine::create_user
#[derive(Clone, Debug, Default)]
pub struct NewUser {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `YYYY-MM-DD`; an unparseable value is ignored.
    pub birthday: Option<String>,
    pub marital_status: Option<String>,
}

impl NewUser {
    pub(crate) fn validate(self) -> ResultEngine<User> {
        let id = normalize_required_text(self.id);
        let first_name = normalize_required_text(self.first_name);
        let last_name = normalize_required_text(self.last_name);

        let mut missing = Vec::new();
        if id.is_none() {
            missing.push("id");
        }
        if first_name.is_none() {
            missing.push("first_name");
        }
        if last_name.is_none() {
            missing.push("last_name");
        }
        let (Some(id), Some(first_name), Some(last_name)) = (id, first_name, last_name) else {
            return Err(EngineError::MissingFields(missing));
        };

        let birthday = self
            .birthday
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
            .unwrap_or_else(default_birthday);
        let marital_status = normalize_required_text(self.marital_status)
            .unwrap_or_else(|| DEFAULT_MARITAL_STATUS.to_string());

        Ok(User {
            id,
            first_name,
            last_name,
            birthday,
            marital_status,
            total: 0.0,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Date,
    pub marital_status: String,
    #[sea_orm(column_type = "Double")]
    pub total: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::costs::Entity")]
    Costs,
}

impl Related<super::costs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Costs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        Self {
            id: ActiveValue::Set(user.id.clone()),
            first_name: ActiveValue::Set(user.first_name.clone()),
            last_name: ActiveValue::Set(user.last_name.clone()),
            birthday: ActiveValue::Set(user.birthday),
            marital_status: ActiveValue::Set(user.marital_status.clone()),
            total: ActiveValue::Set(user.total),
        }
    }
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            birthday: model.birthday,
            marital_status: model.marital_status,
            total: model.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_take_defaults() {
        let user = NewUser {
            id: Some("123123".to_string()),
            first_name: Some("mosh".to_string()),
            last_name: Some("israeli".to_string()),
            birthday: Some("not a date".to_string()),
            marital_status: None,
        }
        .validate()
        .unwrap();

        assert_eq!(user.birthday, default_birthday());
        assert_eq!(user.marital_status, DEFAULT_MARITAL_STATUS);
        assert_eq!(user.total, 0.0);
    }

    #[test]
    fn birthday_is_parsed_when_valid() {
        let user = NewUser {
            id: Some("1".to_string()),
            first_name: Some("a".to_string()),
            last_name: Some("b".to_string()),
            birthday: Some("1990-01-01".to_string()),
            marital_status: Some("married".to_string()),
        }
        .validate()
        .unwrap();

        assert_eq!(user.birthday, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert_eq!(user.marital_status, "married");
    }

    #[test]
    fn names_are_required() {
        let err = NewUser {
            id: Some("1".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, EngineError::MissingFields(vec!["first_name", "last_name"]));
    }
}
