pub use sea_orm_migration::prelude::*;

mod m20250105_090000_users;
mod m20250105_091500_costs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250105_090000_users::Migration),
            Box::new(m20250105_091500_costs::Migration),
        ]
    }
}
