mod common;

use common::engine_with_db;
use engine::{FoodCmd, MenuCmd, PageRequest};

async fn twelve_foods(engine: &engine::Engine) {
    let menu = engine
        .create_menu(MenuCmd::new("All day", "Bar"))
        .await
        .unwrap();
    for i in 0..12 {
        engine
            .create_food(FoodCmd::new(
                format!("Dish {i:02}"),
                1.0 + f64::from(i),
                format!("dish-{i}.png"),
                &menu.menu_id,
            ))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn second_page_of_five() {
    let (engine, _db) = engine_with_db().await;
    twelve_foods(&engine).await;

    let all = engine
        .foods(PageRequest::new(Some(1), Some(100)))
        .await
        .unwrap();
    let page = engine
        .foods(PageRequest::new(Some(2), Some(5)))
        .await
        .unwrap();

    assert_eq!(all.items.len(), 12);
    assert_eq!(page.total_count, 12);
    assert_eq!(page.items, all.items[5..10].to_vec());
}

#[tokio::test]
async fn last_page_is_short_and_past_the_end_is_empty() {
    let (engine, _db) = engine_with_db().await;
    twelve_foods(&engine).await;

    let last = engine
        .foods(PageRequest::new(Some(3), Some(5)))
        .await
        .unwrap();
    assert_eq!(last.items.len(), 2);

    let past = engine
        .foods(PageRequest::new(Some(9), Some(5)))
        .await
        .unwrap();
    assert!(past.items.is_empty());
    assert_eq!(past.total_count, 12);
}

#[tokio::test]
async fn start_index_overrides_the_page() {
    let (engine, _db) = engine_with_db().await;
    twelve_foods(&engine).await;

    let all = engine.foods(PageRequest::new(None, Some(100))).await.unwrap();
    let page = engine
        .foods(PageRequest::new(Some(3), Some(4)).start_index(Some(1)))
        .await
        .unwrap();

    assert_eq!(page.items, all.items[1..5].to_vec());
}

#[tokio::test]
async fn empty_collection() {
    let (engine, _db) = engine_with_db().await;

    let page = engine.foods(PageRequest::default()).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn huge_page_is_empty() {
    let (engine, _db) = engine_with_db().await;
    twelve_foods(&engine).await;

    for request in [
        PageRequest::new(Some(i64::MAX), Some(i64::MAX)),
        PageRequest::new(Some(1 << 62), Some(4)),
    ] {
        let page = engine.foods(request).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 12);
    }

    let users = engine
        .users(PageRequest::new(Some(i64::MAX), Some(i64::MAX)))
        .await
        .unwrap();
    assert!(users.items.is_empty());
}
