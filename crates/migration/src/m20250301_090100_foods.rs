use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Foods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Foods::FoodId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Foods::Name).string().not_null())
                    .col(ColumnDef::new(Foods::Price).double().not_null())
                    .col(ColumnDef::new(Foods::FoodImage).string().not_null())
                    .col(ColumnDef::new(Foods::MenuId).string().not_null())
                    .col(ColumnDef::new(Foods::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Foods::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-foods-menu_id")
                    .table(Foods::Table)
                    .col(Foods::MenuId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Foods::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Foods {
    Table,
    FoodId,
    Name,
    Price,
    FoodImage,
    MenuId,
    CreatedAt,
    UpdatedAt,
}
