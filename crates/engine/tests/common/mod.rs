#![allow(dead_code)]

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, Food, FoodCmd, MenuCmd, TableCmd};
use migration::MigratorTrait;

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

pub async fn count_rows(db: &DatabaseConnection, table: &str) -> i64 {
    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(
            backend,
            format!("SELECT COUNT(*) AS n FROM {table}"),
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get::<i64>("", "n").unwrap()
}

pub async fn execute(db: &DatabaseConnection, sql: &str, values: Vec<sea_orm::Value>) {
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(backend, sql, values))
        .await
        .unwrap();
}

/// A menu with two foods: "Pizza" at 5.00 and "Tiramisu" at 3.33.
pub async fn catalog(engine: &Engine) -> (Food, Food) {
    let menu = engine
        .create_menu(MenuCmd::new("Dinner", "Italian"))
        .await
        .unwrap();
    let pizza = engine
        .create_food(FoodCmd::new("Pizza", 5.0, "pizza.png", &menu.menu_id))
        .await
        .unwrap();
    let tiramisu = engine
        .create_food(FoodCmd::new("Tiramisu", 3.33, "tiramisu.png", &menu.menu_id))
        .await
        .unwrap();
    (pizza, tiramisu)
}

pub async fn table(engine: &Engine, table_number: i32) -> String {
    engine
        .create_table(TableCmd::new(4, table_number))
        .await
        .unwrap()
        .table_id
}
