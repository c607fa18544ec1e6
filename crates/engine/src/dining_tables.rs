//! The module contains the `DiningTable` struct and its entity.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::Serialize;

use crate::util::new_id;

/// A table in the dining room.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiningTable {
    pub table_id: String,
    pub number_of_guests: i32,
    pub table_number: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiningTable {
    pub(crate) fn new(number_of_guests: i32, table_number: i32, now: DateTime<Utc>) -> Self {
        Self::with_id(new_id(), number_of_guests, table_number, now)
    }

    pub(crate) fn with_id(
        table_id: String,
        number_of_guests: i32,
        table_number: i32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            table_id,
            number_of_guests,
            table_number,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dining_tables")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub table_id: String,
    pub number_of_guests: i32,
    pub table_number: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&DiningTable> for ActiveModel {
    fn from(value: &DiningTable) -> Self {
        Self {
            table_id: ActiveValue::Set(value.table_id.clone()),
            number_of_guests: ActiveValue::Set(value.number_of_guests),
            table_number: ActiveValue::Set(value.table_number),
            created_at: ActiveValue::Set(value.created_at),
            updated_at: ActiveValue::Set(value.updated_at),
        }
    }
}

impl From<Model> for DiningTable {
    fn from(model: Model) -> Self {
        Self {
            table_id: model.table_id,
            number_of_guests: model.number_of_guests,
            table_number: model.table_number,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
