use sea_orm_migration::prelude::*;

use super::m20250105_090000_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Costs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Costs::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Costs::Description).string().not_null())
                    .col(ColumnDef::new(Costs::Category).string().not_null())
                    .col(ColumnDef::new(Costs::Sum).double().not_null())
                    .col(ColumnDef::new(Costs::UserId).string().not_null())
                    .col(ColumnDef::new(Costs::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-costs-user_id")
                            .from(Costs::Table, Costs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reports always filter by owner and month window.
        manager
            .create_index(
                Index::create()
                    .name("idx-costs-user_id-created_at")
                    .table(Costs::Table)
                    .col(Costs::UserId)
                    .col(Costs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Costs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Costs {
    Table,
    Id,
    Description,
    Category,
    Sum,
    UserId,
    CreatedAt,
}
