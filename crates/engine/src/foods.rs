//! The module contains the `Food` struct and its entity.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::Serialize;

use crate::util::new_id;

/// A catalog entry. `price` is always stored normalized to two decimals.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Food {
    pub food_id: String,
    pub name: String,
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Food {
    pub(crate) fn new(
        name: String,
        price: f64,
        food_image: String,
        menu_id: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self::with_id(new_id(), name, price, food_image, menu_id, now)
    }

    pub(crate) fn with_id(
        food_id: String,
        name: String,
        price: f64,
        food_image: String,
        menu_id: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            food_id,
            name,
            price,
            food_image,
            menu_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub food_id: String,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menus::Entity",
        from = "Column::MenuId",
        to = "super::menus::Column::MenuId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Menus,
}

impl Related<super::menus::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Menus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Food> for ActiveModel {
    fn from(value: &Food) -> Self {
        Self {
            food_id: ActiveValue::Set(value.food_id.clone()),
            name: ActiveValue::Set(value.name.clone()),
            price: ActiveValue::Set(value.price),
            food_image: ActiveValue::Set(value.food_image.clone()),
            menu_id: ActiveValue::Set(value.menu_id.clone()),
            created_at: ActiveValue::Set(value.created_at),
            updated_at: ActiveValue::Set(value.updated_at),
        }
    }
}

impl From<Model> for Food {
    fn from(model: Model) -> Self {
        Self {
            food_id: model.food_id,
            name: model.name,
            price: model.price,
            food_image: model.food_image,
            menu_id: model.menu_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
