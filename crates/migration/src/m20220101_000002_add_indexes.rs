use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Customer: unique email, backs the service-level duplicate check
        manager
            .create_index(
                Index::create()
                    .name("uniq_customer_email")
                    .table(Customer::Table)
                    .col(Customer::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_customer_email").table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, Email }
