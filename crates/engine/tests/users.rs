mod common;

use common::{engine_with_db, execute};
use engine::{Credentials, EngineError, PageRequest, SignUp};

fn sign_up(email: &str, phone: &str) -> SignUp {
    SignUp {
        first_name: Some("Giulia".to_string()),
        last_name: Some("Bianchi".to_string()),
        email: Some(email.to_string()),
        password: Some("correct horse".to_string()),
        phone: Some(phone.to_string()),
        avatar: None,
    }
}

#[tokio::test]
async fn sign_up_then_login() {
    let (engine, _db) = engine_with_db().await;

    let user = engine
        .sign_up(sign_up("giulia@osteria.it", "+39 02 555"))
        .await
        .unwrap();
    assert_eq!(user.email, "giulia@osteria.it");
    assert_eq!(user.token, None);

    let logged = engine
        .login(Credentials::new("Giulia@Osteria.it", "correct horse"))
        .await
        .unwrap();
    assert_eq!(logged.user_id, user.user_id);
}

#[tokio::test]
async fn bad_credentials() {
    let (engine, _db) = engine_with_db().await;
    engine
        .sign_up(sign_up("giulia@osteria.it", "+39 02 555"))
        .await
        .unwrap();

    let wrong_password = engine
        .login(Credentials::new("giulia@osteria.it", "battery staple"))
        .await
        .unwrap_err();
    assert_eq!(wrong_password, EngineError::InvalidCredentials);

    let unknown = engine
        .login(Credentials::new("nobody@osteria.it", "correct horse"))
        .await
        .unwrap_err();
    assert_eq!(unknown, EngineError::InvalidCredentials);
}

#[tokio::test]
async fn email_and_phone_are_unique() {
    let (engine, _db) = engine_with_db().await;
    engine
        .sign_up(sign_up("giulia@osteria.it", "+39 02 555"))
        .await
        .unwrap();

    let err = engine
        .sign_up(sign_up("giulia@osteria.it", "+39 02 777"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("giulia@osteria.it".to_string()));

    let err = engine
        .sign_up(sign_up("marco@osteria.it", "+39 02 555"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("+39 02 555".to_string()));
}

#[tokio::test]
async fn tokens_are_stored() {
    let (engine, _db) = engine_with_db().await;
    let user = engine
        .sign_up(sign_up("giulia@osteria.it", "+39 02 555"))
        .await
        .unwrap();

    engine
        .update_tokens(&user.user_id, "access", "refresh")
        .await
        .unwrap();

    let stored = engine.user(&user.user_id).await.unwrap();
    assert_eq!(stored.token.as_deref(), Some("access"));
    assert_eq!(stored.refresh_token.as_deref(), Some("refresh"));

    let err = engine.update_tokens("ghost", "a", "b").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("user ghost".to_string()));
}

#[tokio::test]
async fn users_are_paginated() {
    let (engine, _db) = engine_with_db().await;
    for i in 0..3 {
        engine
            .sign_up(sign_up(&format!("user{i}@osteria.it"), &format!("+39 {i}")))
            .await
            .unwrap();
    }

    let page = engine
        .users(PageRequest::new(Some(2), Some(2)))
        .await
        .unwrap();

    assert_eq!(page.total_count, 3);
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn row_written_outside_the_engine_still_conflicts() {
    let (engine, db) = engine_with_db().await;
    execute(
        &db,
        "INSERT INTO users (user_id, first_name, last_name, password, email, phone, created_at, updated_at) \
         VALUES ('u0', 'Old', 'Account', 'x', 'giulia@osteria.it', '+39 02 000', '2025-01-01 00:00:00', '2025-01-01 00:00:00')",
        Vec::new(),
    )
    .await;

    let err = engine
        .sign_up(sign_up("giulia@osteria.it", "+39 02 555"))
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::ExistingKey("giulia@osteria.it".to_string()));
}
