//! The module contains the `Order` struct and its entity.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::Serialize;

use crate::util::new_id;

/// An order, optionally attached to a dining table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Order {
    pub order_id: String,
    pub table_id: Option<String>,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        table_id: Option<String>,
        order_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self::with_id(new_id(), table_id, order_date, now)
    }

    pub(crate) fn with_id(
        order_id: String,
        table_id: Option<String>,
        order_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id,
            table_id,
            order_date,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: String,
    pub table_id: Option<String>,
    pub order_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dining_tables::Entity",
        from = "Column::TableId",
        to = "super::dining_tables::Column::TableId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    DiningTables,
}

impl Related<super::dining_tables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiningTables.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Order> for ActiveModel {
    fn from(value: &Order) -> Self {
        Self {
            order_id: ActiveValue::Set(value.order_id.clone()),
            table_id: ActiveValue::Set(value.table_id.clone()),
            order_date: ActiveValue::Set(value.order_date),
            created_at: ActiveValue::Set(value.created_at),
            updated_at: ActiveValue::Set(value.updated_at),
        }
    }
}

impl From<Model> for Order {
    fn from(model: Model) -> Self {
        Self {
            order_id: model.order_id,
            table_id: model.table_id,
            order_date: model.order_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
