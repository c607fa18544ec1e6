use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiningTables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DiningTables::TableId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DiningTables::NumberOfGuests)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DiningTables::TableNumber).integer().not_null())
                    .col(ColumnDef::new(DiningTables::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(DiningTables::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiningTables::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum DiningTables {
    Table,
    TableId,
    NumberOfGuests,
    TableNumber,
    CreatedAt,
    UpdatedAt,
}
