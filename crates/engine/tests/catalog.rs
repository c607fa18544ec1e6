mod common;

use chrono::{Duration, Utc};

use common::engine_with_db;
use engine::{EngineError, FoodCmd, MenuCmd, PageRequest, TableCmd};

#[tokio::test]
async fn food_needs_an_existing_menu() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .create_food(FoodCmd::new("Pizza", 5.0, "pizza.png", "no-menu"))
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::KeyNotFound("menu no-menu".to_string()));
}

#[tokio::test]
async fn food_price_is_normalized_on_every_write() {
    let (engine, _db) = engine_with_db().await;
    let menu = engine
        .create_menu(MenuCmd::new("Lunch", "Street food"))
        .await
        .unwrap();

    let food = engine
        .create_food(FoodCmd::new("Arancino", 2.345, "arancino.png", &menu.menu_id))
        .await
        .unwrap();
    assert_eq!(food.price, 2.35);
    assert_eq!(engine.food(&food.food_id).await.unwrap().price, 2.35);

    let food = engine
        .update_food(
            &food.food_id,
            FoodCmd {
                price: Some(3.345),
                ..FoodCmd::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(food.price, 3.35);
    assert_eq!(food.name, "Arancino");
}

#[tokio::test]
async fn food_update_validates_the_menu() {
    let (engine, _db) = engine_with_db().await;
    let menu = engine
        .create_menu(MenuCmd::new("Lunch", "Street food"))
        .await
        .unwrap();
    let other = engine
        .create_menu(MenuCmd::new("Dinner", "Italian"))
        .await
        .unwrap();
    let food = engine
        .create_food(FoodCmd::new("Arancino", 2.5, "arancino.png", &menu.menu_id))
        .await
        .unwrap();

    let moved = engine
        .update_food(
            &food.food_id,
            FoodCmd {
                menu_id: Some(other.menu_id.clone()),
                ..FoodCmd::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.menu_id, other.menu_id);

    let err = engine
        .update_food(
            &food.food_id,
            FoodCmd {
                menu_id: Some("gone".to_string()),
                ..FoodCmd::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("menu gone".to_string()));
}

#[tokio::test]
async fn food_update_upserts_only_complete_patches() {
    let (engine, _db) = engine_with_db().await;
    let menu = engine
        .create_menu(MenuCmd::new("Lunch", "Street food"))
        .await
        .unwrap();

    let err = engine
        .update_food(
            "food-1",
            FoodCmd {
                name: Some("Panino".to_string()),
                ..FoodCmd::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("food food-1".to_string()));

    let food = engine
        .update_food(
            "food-1",
            FoodCmd::new("Panino", 4.5, "panino.png", &menu.menu_id),
        )
        .await
        .unwrap();
    assert_eq!(food.food_id, "food-1");
    let page = engine.foods(PageRequest::default()).await.unwrap();
    assert_eq!(page.total_count, 1);
}

#[tokio::test]
async fn menu_window_rules() {
    let (engine, _db) = engine_with_db().await;
    let now = Utc::now();

    let err = engine
        .create_menu(
            MenuCmd::new("Brunch", "Weekend")
                .window(now - Duration::days(1), now + Duration::days(1)),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidInput("kindly retype the time".to_string())
    );

    let menu = engine
        .create_menu(MenuCmd::new("Brunch", "Weekend"))
        .await
        .unwrap();
    let start = now + Duration::days(1);
    let end = now + Duration::days(30);
    let menu = engine
        .update_menu(&menu.menu_id, MenuCmd::default().window(start, end))
        .await
        .unwrap();
    assert_eq!(menu.start_date, Some(start));
    assert_eq!(menu.end_date, Some(end));
    assert_eq!(menu.name, "Brunch");

    let err = engine
        .update_menu(
            &menu.menu_id,
            MenuCmd {
                end_date: Some(start - Duration::hours(1)),
                start_date: Some(start),
                ..MenuCmd::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[tokio::test]
async fn tables_round_trip() {
    let (engine, _db) = engine_with_db().await;

    let table = engine.create_table(TableCmd::new(6, 12)).await.unwrap();
    let updated = engine
        .update_table(
            &table.table_id,
            TableCmd {
                number_of_guests: Some(8),
                table_number: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.number_of_guests, 8);
    assert_eq!(updated.table_number, 12);
    assert_eq!(engine.tables().await.unwrap(), vec![updated]);

    let err = engine.create_table(TableCmd::new(0, 1)).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
    let err = engine.table("missing").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("table missing".to_string()));
}
