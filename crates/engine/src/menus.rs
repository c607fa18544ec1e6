//! The module contains the `Menu` struct and its entity.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::Serialize;

use crate::util::new_id;

/// A menu groups foods under a name and a category.
///
/// A menu may be limited to a time window; both bounds are set together.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Menu {
    pub menu_id: String,
    pub name: String,
    pub category: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    pub(crate) fn new(name: String, category: String, now: DateTime<Utc>) -> Self {
        Self::with_id(new_id(), name, category, now)
    }

    pub(crate) fn with_id(
        menu_id: String,
        name: String,
        category: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            menu_id,
            name,
            category,
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub menu_id: String,
    pub name: String,
    pub category: String,
    pub start_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Menu> for ActiveModel {
    fn from(value: &Menu) -> Self {
        Self {
            menu_id: ActiveValue::Set(value.menu_id.clone()),
            name: ActiveValue::Set(value.name.clone()),
            category: ActiveValue::Set(value.category.clone()),
            start_date: ActiveValue::Set(value.start_date),
            end_date: ActiveValue::Set(value.end_date),
            created_at: ActiveValue::Set(value.created_at),
            updated_at: ActiveValue::Set(value.updated_at),
        }
    }
}

impl From<Model> for Menu {
    fn from(model: Model) -> Self {
        Self {
            menu_id: model.menu_id,
            name: model.name,
            category: model.category,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
