use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, Menu, MenuCmd, ResultEngine, menus,
    util::{normalize_optional_text, require, validate_len},
};

use super::{Engine, with_tx};

const WINDOW_ERROR: &str = "kindly retype the time";

struct MenuPatch {
    name: Option<String>,
    category: Option<String>,
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl MenuPatch {
    fn validate(cmd: MenuCmd, now: DateTime<Utc>) -> ResultEngine<Self> {
        let name = normalize_optional_text(cmd.name);
        if let Some(name) = &name {
            validate_len(name, "name", 1, 100)?;
        }
        let category = normalize_optional_text(cmd.category);
        if let Some(category) = &category {
            validate_len(category, "category", 1, 100)?;
        }

        Ok(Self {
            name,
            category,
            window: validate_window(cmd.start_date, cmd.end_date, now)?,
        })
    }
}

/// A window needs both bounds, a start in the future and an end after it.
fn validate_window(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> ResultEngine<Option<(DateTime<Utc>, DateTime<Utc>)>> {
    match (start_date, end_date) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) if start > now && end > start => Ok(Some((start, end))),
        _ => Err(EngineError::InvalidInput(WINDOW_ERROR.to_string())),
    }
}

impl Engine {
    pub async fn create_menu(&self, cmd: MenuCmd) -> ResultEngine<Menu> {
        let now = Utc::now();
        let patch = MenuPatch::validate(cmd, now)?;
        let mut menu = Menu::new(
            require(patch.name, "name")?,
            require(patch.category, "category")?,
            now,
        );
        if let Some((start, end)) = patch.window {
            menu.start_date = Some(start);
            menu.end_date = Some(end);
        }

        self.bounded(async move {
            menus::ActiveModel::from(&menu).insert(&self.database).await?;
            tracing::info!("created menu {} ({})", menu.name, menu.menu_id);
            Ok(menu)
        })
        .await
    }

    pub async fn menu(&self, menu_id: &str) -> ResultEngine<Menu> {
        self.bounded(async move {
            menus::Entity::find_by_id(menu_id.to_string())
                .one(&self.database)
                .await?
                .map(Menu::from)
                .ok_or_else(|| EngineError::KeyNotFound(format!("menu {menu_id}")))
        })
        .await
    }

    pub async fn menus(&self) -> ResultEngine<Vec<Menu>> {
        self.bounded(async move {
            let models = menus::Entity::find()
                .order_by_asc(menus::Column::CreatedAt)
                .order_by_asc(menus::Column::MenuId)
                .all(&self.database)
                .await?;
            Ok(models.into_iter().map(Menu::from).collect())
        })
        .await
    }

    /// Patch a menu. A missing menu is created when name and category are given.
    pub async fn update_menu(&self, menu_id: &str, cmd: MenuCmd) -> ResultEngine<Menu> {
        let now = Utc::now();
        let patch = MenuPatch::validate(cmd, now)?;

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                match menus::Entity::find_by_id(menu_id.to_string())
                    .one(&db_tx)
                    .await?
                {
                    Some(model) => {
                        let mut active: menus::ActiveModel = model.into();
                        if let Some(name) = patch.name {
                            active.name = ActiveValue::Set(name);
                        }
                        if let Some(category) = patch.category {
                            active.category = ActiveValue::Set(category);
                        }
                        if let Some((start, end)) = patch.window {
                            active.start_date = ActiveValue::Set(Some(start));
                            active.end_date = ActiveValue::Set(Some(end));
                        }
                        active.updated_at = ActiveValue::Set(now);
                        let model = active.update(&db_tx).await?;
                        Ok(Menu::from(model))
                    }
                    None => match (patch.name, patch.category) {
                        (Some(name), Some(category)) => {
                            let mut menu = Menu::with_id(menu_id.to_string(), name, category, now);
                            if let Some((start, end)) = patch.window {
                                menu.start_date = Some(start);
                                menu.end_date = Some(end);
                            }
                            menus::ActiveModel::from(&menu).insert(&db_tx).await?;
                            tracing::info!("created menu {menu_id} on update");
                            Ok(menu)
                        }
                        _ => Err(EngineError::KeyNotFound(format!("menu {menu_id}"))),
                    },
                }
            })
        })
        .await
    }

    pub(crate) async fn require_menu<C: ConnectionTrait>(
        &self,
        db: &C,
        menu_id: &str,
    ) -> ResultEngine<menus::Model> {
        menus::Entity::find_by_id(menu_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("menu {menu_id}")))
    }
}
