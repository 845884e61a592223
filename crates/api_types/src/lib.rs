use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub mod cost {
    use super::*;

    /// A user id as sent by the client.
    ///
    /// Clients use both JSON strings and JSON integers; the original form is
    /// kept so responses echo what was submitted.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum UserId {
        Number(i64),
        Text(String),
    }

    impl std::fmt::Display for UserId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Number(n) => write!(f, "{n}"),
                Self::Text(s) => f.write_str(s),
            }
        }
    }

    /// `created_at` as sent by the client.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum Timestamp {
        /// Milliseconds since the Unix epoch.
        Millis(i64),
        /// RFC 3339 timestamp or `YYYY-MM-DD`.
        Text(String),
        Other(serde_json::Value),
    }

    /// Request body of `POST /api/add`.
    ///
    /// All fields are optional at the wire level; the engine reports the
    /// missing ones.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CostNew {
        pub description: Option<String>,
        pub category: Option<String>,
        pub sum: Option<f64>,
        pub userid: Option<UserId>,
        /// Defaults to now, also when the value cannot be read.
        #[serde(alias = "createdAt")]
        pub created_at: Option<Timestamp>,
    }

    /// A stored cost item.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CostView {
        pub id: Uuid,
        pub description: String,
        pub category: String,
        pub sum: f64,
        pub userid: UserId,
        pub created_at: DateTime<Utc>,
    }
}

pub mod report {
    use std::collections::BTreeMap;

    use super::*;

    /// Query string of `GET /api/report`.
    ///
    /// Kept as raw strings so missing and malformed values produce distinct
    /// errors.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ReportQuery {
        pub id: Option<String>,
        pub year: Option<String>,
        pub month: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReportLineView {
        pub sum: f64,
        pub description: String,
        pub day: u32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthlyReportView {
        pub userid: String,
        pub year: i32,
        pub month: u32,
        /// One single-key object per category, e.g. `{"food": [...]}`.
        pub costs: Vec<BTreeMap<String, Vec<ReportLineView>>>,
    }
}

pub mod user {
    use super::*;

    pub use super::cost::UserId;

    /// Request body of `POST /api/adduser`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct UserNew {
        pub id: Option<UserId>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        /// `YYYY-MM-DD`.
        pub birthday: Option<String>,
        pub marital_status: Option<String>,
    }

    /// Response of `GET /api/users/{id}`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserDetails {
        pub id: String,
        pub first_name: String,
        pub last_name: String,
        pub total: f64,
    }

    /// Response of `POST /api/adduser`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserCreated {
        pub id: String,
        pub first_name: String,
        pub last_name: String,
        pub birthday: NaiveDate,
        pub marital_status: String,
        pub total: f64,
    }
}

pub mod about {
    use super::*;

    /// A developer listed by `GET /api/about`. Exactly two fields.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TeamMember {
        pub first_name: String,
        pub last_name: String,
    }
}
