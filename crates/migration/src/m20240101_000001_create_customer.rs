//! Create `customer` table.
//! Ids come from the database sequence; audit timestamps are written by the store.
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
                    .col(big_integer(Customer::Id).auto_increment().primary_key())
                    .col(string_len(Customer::Name, 30).not_null())
                    .col(string_len_null(Customer::Address, 300))
                    .col(string_len_null(Customer::MobileNumber, 30))
                    .col(timestamp_with_time_zone(Customer::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Customer::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    Id,
    Name,
    Address,
    MobileNumber,
    CreatedAt,
    UpdatedAt,
}
