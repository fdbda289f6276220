//! Create `customer` table.
//!
//! Ids come from a bigint sequence; email uniqueness is enforced by the index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customer::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Customer::Name, 128).not_null())
                    .col(integer(Customer::Age).not_null())
                    .col(string_len(Customer::Email, 255).not_null())
                    .col(timestamp_with_time_zone(Customer::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Customer::UpdatedAt).not_null())
                    .check(Expr::col(Customer::Age).gte(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, Id, Name, Age, Email, CreatedAt, UpdatedAt }
