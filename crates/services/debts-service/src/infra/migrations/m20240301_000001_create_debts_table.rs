//! Migration: Create debts table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Debts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Debts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Debts::Document).string_len(11).not_null())
                    .col(ColumnDef::new(Debts::Amount).double().not_null())
                    .col(ColumnDef::new(Debts::DueDate).date().not_null())
                    .col(
                        ColumnDef::new(Debts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Debts are always listed per document
        manager
            .create_index(
                Index::create()
                    .name("idx_debts_document")
                    .table(Debts::Table)
                    .col(Debts::Document)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Debts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Debts {
    Table,
    Id,
    Document,
    Amount,
    DueDate,
    CreatedAt,
}
