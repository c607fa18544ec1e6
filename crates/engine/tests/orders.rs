mod common;

use common::{catalog, count_rows, engine_with_db, table};
use engine::{EngineError, OrderCmd, OrderItemCmd, PlaceOrder};

#[tokio::test]
async fn place_order_stores_order_and_lines() {
    let (engine, db) = engine_with_db().await;
    let (pizza, tiramisu) = catalog(&engine).await;
    let table_id = table(&engine, 1).await;

    let order_id = engine
        .place_order(
            PlaceOrder::new(Some(table_id.clone()))
                .item(OrderItemCmd::new(&pizza.food_id, 2, 4.999))
                .item(OrderItemCmd::new(&tiramisu.food_id, 1, 3.335)),
        )
        .await
        .unwrap();

    let order = engine.order(&order_id).await.unwrap();
    assert_eq!(order.table_id.as_deref(), Some(table_id.as_str()));
    assert_eq!(count_rows(&db, "orders").await, 1);

    let lines = engine.order_items().await.unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.order_id == order_id));
    let prices: Vec<f64> = lines.iter().map(|line| line.unit_price).collect();
    assert!(prices.contains(&5.0));
    assert!(prices.contains(&3.34));
}

#[tokio::test]
async fn unknown_food_writes_nothing() {
    let (engine, db) = engine_with_db().await;
    let (pizza, _) = catalog(&engine).await;

    let err = engine
        .place_order(
            PlaceOrder::new(None)
                .item(OrderItemCmd::new(&pizza.food_id, 1, 5.0))
                .item(OrderItemCmd::new("missing-food", 1, 2.0)),
        )
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::KeyNotFound("food missing-food".to_string()));
    assert_eq!(count_rows(&db, "orders").await, 0);
    assert_eq!(count_rows(&db, "order_items").await, 0);
}

#[tokio::test]
async fn unknown_table_writes_nothing() {
    let (engine, db) = engine_with_db().await;
    let (pizza, _) = catalog(&engine).await;

    let err = engine
        .place_order(
            PlaceOrder::new(Some("table-9".to_string()))
                .item(OrderItemCmd::new(&pizza.food_id, 1, 5.0)),
        )
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::KeyNotFound("table table-9".to_string()));
    assert_eq!(count_rows(&db, "orders").await, 0);
}

#[tokio::test]
async fn invalid_lines_are_rejected_before_the_store() {
    let (engine, db) = engine_with_db().await;

    let empty = engine.place_order(PlaceOrder::new(None)).await.unwrap_err();
    assert!(matches!(empty, EngineError::InvalidInput(_)));

    let negative = engine
        .place_order(PlaceOrder::new(None).item(OrderItemCmd::new("f1", -1, 2.0)))
        .await
        .unwrap_err();
    assert!(matches!(negative, EngineError::InvalidInput(_)));

    let no_price = engine
        .place_order(PlaceOrder::new(None).item(OrderItemCmd {
            food_id: Some("f1".to_string()),
            quantity: Some(1),
            unit_price: None,
        }))
        .await
        .unwrap_err();
    assert_eq!(
        no_price,
        EngineError::InvalidInput("unit_price is required".to_string())
    );

    assert_eq!(count_rows(&db, "orders").await, 0);
}

#[tokio::test]
async fn update_order_checks_the_table() {
    let (engine, _db) = engine_with_db().await;
    let first = table(&engine, 1).await;
    let second = table(&engine, 2).await;

    let order = engine
        .create_order(OrderCmd {
            table_id: Some(first),
            order_date: None,
        })
        .await
        .unwrap();

    let moved = engine
        .update_order(
            &order.order_id,
            OrderCmd {
                table_id: Some(second.clone()),
                order_date: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.table_id, Some(second));
    assert!(moved.updated_at >= order.updated_at);

    let err = engine
        .update_order(
            &order.order_id,
            OrderCmd {
                table_id: Some("nowhere".to_string()),
                order_date: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("table nowhere".to_string()));
}

#[tokio::test]
async fn update_on_missing_order_upserts_when_complete() {
    let (engine, _db) = engine_with_db().await;
    let table_id = table(&engine, 3).await;

    let err = engine
        .update_order("order-x", OrderCmd::default())
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("order order-x".to_string()));

    let created = engine
        .update_order(
            "order-x",
            OrderCmd {
                table_id: Some(table_id.clone()),
                order_date: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.order_id, "order-x");
    assert_eq!(engine.order("order-x").await.unwrap().table_id, Some(table_id));
}
