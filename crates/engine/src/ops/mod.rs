use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::{Clock, CreatedAt, ResultEngine, SystemClock, TeamMember, team::TEAM, util::parse_timestamp};

mod costs;
mod reports;
mod users;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// The cost ledger.
///
/// Owns the database holding users and costs, the clock used to stamp new
/// costs and the timezone that defines calendar months.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The development team. Fixed, never touches the database.
    pub fn team(&self) -> &'static [TeamMember] {
        &TEAM
    }

    /// Resolve the timestamp of a new cost.
    ///
    /// Absent or unusable input falls back to the clock.
    fn resolve_created_at(&self, raw: Option<&CreatedAt>) -> DateTime<Utc> {
        let resolved = match raw {
            None => return self.clock.now(),
            Some(CreatedAt::Text(text)) if text.trim().is_empty() => return self.clock.now(),
            Some(CreatedAt::Text(text)) => parse_timestamp(text, self.timezone),
            Some(CreatedAt::Millis(millis)) => DateTime::from_timestamp_millis(*millis),
            Some(CreatedAt::Other(_)) => None,
        };
        resolved.unwrap_or_else(|| {
            tracing::warn!(created_at = ?raw, "unusable created_at, using current time");
            self.clock.now()
        })
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    clock: Option<Arc<dyn Clock>>,
    timezone: Option<Tz>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Clock used to stamp costs submitted without `created_at`.
    ///
    /// Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> EngineBuilder {
        self.clock = Some(clock);
        self
    }

    /// Timezone defining month boundaries. Defaults to UTC.
    pub fn timezone(mut self, timezone: Tz) -> EngineBuilder {
        self.timezone = Some(timezone);
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            timezone: self.timezone.unwrap_or(Tz::UTC),
        })
    }
}
