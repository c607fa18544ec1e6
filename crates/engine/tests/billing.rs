mod common;

use common::{catalog, engine_with_db, execute, table};
use engine::{EngineError, OrderCmd, OrderItemCmd, PlaceOrder};

#[tokio::test]
async fn billing_groups_an_order() {
    let (engine, _db) = engine_with_db().await;
    let (pizza, tiramisu) = catalog(&engine).await;
    let table_id = table(&engine, 7).await;

    let order_id = engine
        .place_order(
            PlaceOrder::new(Some(table_id.clone()))
                .item(OrderItemCmd::new(&pizza.food_id, 2, 5.0))
                .item(OrderItemCmd::new(&tiramisu.food_id, 1, 3.33)),
        )
        .await
        .unwrap();

    let views = engine.compute_billing(&order_id).await.unwrap();

    assert_eq!(views.len(), 1);
    let view = &views[0];
    assert_eq!(view.payment_due, 13.33);
    assert_eq!(view.total_count, 2);
    assert_eq!(view.order_id, order_id);
    assert_eq!(view.table_id.as_deref(), Some(table_id.as_str()));
    assert_eq!(view.table_number, Some(7));

    let pizza_line = &view.order_items[0];
    assert_eq!(pizza_line.food_name.as_deref(), Some("Pizza"));
    assert_eq!(pizza_line.food_image.as_deref(), Some("pizza.png"));
    assert_eq!(pizza_line.price, 5.0);
    assert_eq!(pizza_line.quantity, 2);
    assert_eq!(pizza_line.amount, 10.0);

    let tiramisu_line = &view.order_items[1];
    assert_eq!(tiramisu_line.food_name.as_deref(), Some("Tiramisu"));
    assert_eq!(tiramisu_line.price, 3.33);
    assert_eq!(tiramisu_line.quantity, 1);
}

#[tokio::test]
async fn payment_due_is_the_sum_of_lines() {
    let (engine, _db) = engine_with_db().await;
    let (pizza, tiramisu) = catalog(&engine).await;

    let order_id = engine
        .place_order(
            PlaceOrder::new(None)
                .item(OrderItemCmd::new(&pizza.food_id, 3, 0.1))
                .item(OrderItemCmd::new(&tiramisu.food_id, 7, 1.15))
                .item(OrderItemCmd::new(&pizza.food_id, 0, 9.99))
                .item(OrderItemCmd::new(&tiramisu.food_id, 1, 2.345)),
        )
        .await
        .unwrap();

    let views = engine.compute_billing(&order_id).await.unwrap();

    // 0.30 + 8.05 + 0.00 + 2.35
    assert_eq!(views[0].payment_due, 10.7);
    assert_eq!(views[0].total_count, 4);
    assert_eq!(views[0].table_id, None);
    assert_eq!(views[0].table_number, None);
}

#[tokio::test]
async fn deleted_food_keeps_its_line() {
    let (engine, db) = engine_with_db().await;
    let (pizza, tiramisu) = catalog(&engine).await;

    let order_id = engine
        .place_order(
            PlaceOrder::new(None)
                .item(OrderItemCmd::new(&pizza.food_id, 1, 5.0))
                .item(OrderItemCmd::new(&tiramisu.food_id, 2, 3.33)),
        )
        .await
        .unwrap();
    execute(
        &db,
        "DELETE FROM foods WHERE food_id = ?",
        vec![tiramisu.food_id.clone().into()],
    )
    .await;

    let views = engine.compute_billing(&order_id).await.unwrap();

    let lines = &views[0].order_items;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].food_name, None);
    assert_eq!(lines[1].food_image, None);
    assert_eq!(lines[1].amount, 6.66);
    assert_eq!(views[0].payment_due, 11.66);
}

#[tokio::test]
async fn order_without_items_has_no_billing() {
    let (engine, _db) = engine_with_db().await;

    let order = engine.create_order(OrderCmd::default()).await.unwrap();

    assert!(engine.compute_billing(&order.order_id).await.unwrap().is_empty());
    assert!(engine.compute_billing("no-such-order").await.unwrap().is_empty());
}

#[tokio::test]
async fn billing_follows_line_item_updates() {
    let (engine, _db) = engine_with_db().await;
    let (pizza, _) = catalog(&engine).await;

    let order_id = engine
        .place_order(PlaceOrder::new(None).item(OrderItemCmd::new(&pizza.food_id, 1, 5.0)))
        .await
        .unwrap();
    let line = engine.order_items().await.unwrap().remove(0);

    engine
        .update_order_item(
            &line.order_item_id,
            OrderItemCmd {
                quantity: Some(4),
                unit_price: Some(4.999),
                ..OrderItemCmd::default()
            },
        )
        .await
        .unwrap();

    let views = engine.compute_billing(&order_id).await.unwrap();
    assert_eq!(views[0].order_items[0].price, 5.0);
    assert_eq!(views[0].payment_due, 20.0);

    let err = engine
        .update_order_item(
            &line.order_item_id,
            OrderItemCmd {
                food_id: Some("ghost".to_string()),
                ..OrderItemCmd::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("food ghost".to_string()));
}
