use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, SqlErr, TransactionTrait, prelude::*};

use crate::{
    Credentials, EngineError, Page, PageRequest, ResultEngine, SignUp, User,
    pagination::list_page,
    users::{self, hash_password, verify_password},
    util::{new_id, normalize_optional_text, require, require_text, validate_len},
};

use super::{Engine, with_tx};

struct NewUser {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    phone: String,
    avatar: Option<String>,
}

impl NewUser {
    fn validate(cmd: SignUp) -> ResultEngine<Self> {
        let first_name = require_text(cmd.first_name, "first_name")?;
        validate_len(&first_name, "first_name", 2, 100)?;
        let last_name = require_text(cmd.last_name, "last_name")?;
        validate_len(&last_name, "last_name", 2, 100)?;

        let email = require_text(cmd.email, "email")?.to_lowercase();
        if !is_email(&email) {
            return Err(EngineError::InvalidInput(format!("invalid email: {email}")));
        }

        let password = require(cmd.password, "password")?;
        validate_len(&password, "password", 6, 128)?;
        let phone = require_text(cmd.phone, "phone")?;

        Ok(Self {
            first_name,
            last_name,
            email,
            password,
            phone,
            avatar: normalize_optional_text(cmd.avatar),
        })
    }
}

/// `local@domain.tld` with no spaces: enough to catch typos.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// A concurrent sign-up can win the race between the uniqueness checks and
/// the insert; its unique index violation is still a duplicate account.
fn unique_violation(err: DbErr, key: String) -> EngineError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EngineError::ExistingKey(key),
        _ => EngineError::Database(err),
    }
}

impl Engine {
    /// Register a user. Email and phone must be unused.
    pub async fn sign_up(&self, cmd: SignUp) -> ResultEngine<User> {
        let new_user = NewUser::validate(cmd)?;
        let password = hash_password(&new_user.password)?;
        let now = Utc::now();

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                let email_taken = users::Entity::find()
                    .filter(users::Column::Email.eq(new_user.email.as_str()))
                    .count(&db_tx)
                    .await?
                    > 0;
                if email_taken {
                    return Err(EngineError::ExistingKey(new_user.email));
                }
                let phone_taken = users::Entity::find()
                    .filter(users::Column::Phone.eq(new_user.phone.as_str()))
                    .count(&db_tx)
                    .await?
                    > 0;
                if phone_taken {
                    return Err(EngineError::ExistingKey(new_user.phone));
                }

                let email = new_user.email.clone();
                let model = users::ActiveModel {
                    user_id: ActiveValue::Set(new_id()),
                    first_name: ActiveValue::Set(new_user.first_name),
                    last_name: ActiveValue::Set(new_user.last_name),
                    password: ActiveValue::Set(password),
                    email: ActiveValue::Set(new_user.email),
                    phone: ActiveValue::Set(new_user.phone),
                    avatar: ActiveValue::Set(new_user.avatar),
                    token: ActiveValue::Set(None),
                    refresh_token: ActiveValue::Set(None),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                }
                .insert(&db_tx)
                .await
                .map_err(|err| unique_violation(err, email))?;

                tracing::info!("signed up user {}", model.user_id);
                Ok(User::from(model))
            })
        })
        .await
    }

    /// Check email and password. Both an unknown email and a wrong password
    /// fail with `InvalidCredentials`.
    pub async fn login(&self, credentials: Credentials) -> ResultEngine<User> {
        let email = require_text(credentials.email, "email")?.to_lowercase();
        let password = require(credentials.password, "password")?;

        self.bounded(async move {
            let model = users::Entity::find()
                .filter(users::Column::Email.eq(email.as_str()))
                .one(&self.database)
                .await?
                .ok_or(EngineError::InvalidCredentials)?;

            if !verify_password(&password, &model.password) {
                return Err(EngineError::InvalidCredentials);
            }
            Ok(User::from(model))
        })
        .await
    }

    pub async fn user(&self, user_id: &str) -> ResultEngine<User> {
        self.bounded(async move {
            users::Entity::find_by_id(user_id.to_string())
                .one(&self.database)
                .await?
                .map(User::from)
                .ok_or_else(|| EngineError::KeyNotFound(format!("user {user_id}")))
        })
        .await
    }

    pub async fn users(&self, request: PageRequest) -> ResultEngine<Page<User>> {
        self.bounded(async move {
            with_tx!(self, |db_tx| {
                let select = users::Entity::find()
                    .order_by_asc(users::Column::CreatedAt)
                    .order_by_asc(users::Column::UserId);
                list_page(&db_tx, select, request)
                    .await
                    .map(|page| page.map(User::from))
            })
        })
        .await
    }

    /// Store freshly issued session tokens.
    pub async fn update_tokens(
        &self,
        user_id: &str,
        token: &str,
        refresh_token: &str,
    ) -> ResultEngine<User> {
        let now = Utc::now();

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                let model = users::Entity::find_by_id(user_id.to_string())
                    .one(&db_tx)
                    .await?
                    .ok_or_else(|| EngineError::KeyNotFound(format!("user {user_id}")))?;

                let mut active: users::ActiveModel = model.into();
                active.token = ActiveValue::Set(Some(token.to_string()));
                active.refresh_token = ActiveValue::Set(Some(refresh_token.to_string()));
                active.updated_at = ActiveValue::Set(now);
                let model = active.update(&db_tx).await?;
                Ok(User::from(model))
            })
        })
        .await
    }
}
