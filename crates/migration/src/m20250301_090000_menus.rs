use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Menus::MenuId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Menus::Name).string().not_null())
                    .col(ColumnDef::new(Menus::Category).string().not_null())
                    .col(ColumnDef::new(Menus::StartDate).timestamp())
                    .col(ColumnDef::new(Menus::EndDate).timestamp())
                    .col(ColumnDef::new(Menus::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Menus::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub enum Menus {
    Table,
    MenuId,
    Name,
    Category,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}
