//! The module contains the `OrderItem` struct and its entity.
//!
//! Order items are the rows the billing pipeline starts from: it matches them
//! by `order_id` and left-joins foods, orders and dining tables on top.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::Serialize;

use crate::util::new_id;

/// One line of an order.
///
/// `unit_price` is stored normalized to two decimals and is captured when the
/// line is placed, so later catalog price changes do not alter past orders.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderItem {
    pub order_item_id: String,
    pub order_id: String,
    pub food_id: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    pub(crate) fn new(
        order_id: String,
        food_id: String,
        quantity: i64,
        unit_price: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            order_item_id: new_id(),
            order_id,
            food_id,
            quantity,
            unit_price,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_item_id: String,
    pub order_id: String,
    pub food_id: String,
    pub quantity: i64,
    #[sea_orm(column_type = "Double")]
    pub unit_price: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::foods::Entity",
        from = "Column::FoodId",
        to = "super::foods::Column::FoodId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Foods,
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::OrderId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Orders,
}

impl Related<super::foods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Foods.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&OrderItem> for ActiveModel {
    fn from(value: &OrderItem) -> Self {
        Self {
            order_item_id: ActiveValue::Set(value.order_item_id.clone()),
            order_id: ActiveValue::Set(value.order_id.clone()),
            food_id: ActiveValue::Set(value.food_id.clone()),
            quantity: ActiveValue::Set(value.quantity),
            unit_price: ActiveValue::Set(value.unit_price),
            created_at: ActiveValue::Set(value.created_at),
            updated_at: ActiveValue::Set(value.updated_at),
        }
    }
}

impl From<Model> for OrderItem {
    fn from(model: Model) -> Self {
        Self {
            order_item_id: model.order_item_id,
            order_id: model.order_id,
            food_id: model.food_id,
            quantity: model.quantity,
            unit_price: model.unit_price,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
