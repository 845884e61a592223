//! Cost ledger: users, their cost items and monthly reports.
//!
//! Everything goes through [`Engine`], built with [`Engine::builder`] on top of
//! a sea-orm database connection.

pub use category::Category;
pub use clock::{Clock, FixedClock, SystemClock};
pub use costs::{Cost, CreatedAt, NewCost};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use report::{MonthlyReport, ReportLine};
pub use team::TeamMember;
pub use users::{NewUser, User};

mod category;
mod clock;
mod costs;
mod error;
mod ops;
mod report;
mod team;
mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
