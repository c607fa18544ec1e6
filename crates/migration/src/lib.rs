pub use sea_orm_migration::prelude::*;

mod m20250301_090000_menus;
mod m20250301_090100_foods;
mod m20250301_090200_dining_tables;
mod m20250301_090300_orders;
mod m20250301_090400_invoices;
mod m20250301_090500_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_090000_menus::Migration),
            Box::new(m20250301_090100_foods::Migration),
            Box::new(m20250301_090200_dining_tables::Migration),
            Box::new(m20250301_090300_orders::Migration),
            Box::new(m20250301_090400_invoices::Migration),
            Box::new(m20250301_090500_users::Migration),
        ]
    }
}
