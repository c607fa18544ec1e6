use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    DiningTable, EngineError, ResultEngine, TableCmd, dining_tables,
    util::{require, validate_positive},
};

use super::{Engine, with_tx};

struct TablePatch {
    number_of_guests: Option<i32>,
    table_number: Option<i32>,
}

impl TablePatch {
    fn validate(cmd: TableCmd) -> ResultEngine<Self> {
        Ok(Self {
            number_of_guests: cmd
                .number_of_guests
                .map(|value| validate_positive(value, "number_of_guests"))
                .transpose()?,
            table_number: cmd
                .table_number
                .map(|value| validate_positive(value, "table_number"))
                .transpose()?,
        })
    }
}

impl Engine {
    pub async fn create_table(&self, cmd: TableCmd) -> ResultEngine<DiningTable> {
        let patch = TablePatch::validate(cmd)?;
        let table = DiningTable::new(
            require(patch.number_of_guests, "number_of_guests")?,
            require(patch.table_number, "table_number")?,
            Utc::now(),
        );

        self.bounded(async move {
            dining_tables::ActiveModel::from(&table)
                .insert(&self.database)
                .await?;
            tracing::info!("created table {} ({})", table.table_number, table.table_id);
            Ok(table)
        })
        .await
    }

    pub async fn table(&self, table_id: &str) -> ResultEngine<DiningTable> {
        self.bounded(async move {
            dining_tables::Entity::find_by_id(table_id.to_string())
                .one(&self.database)
                .await?
                .map(DiningTable::from)
                .ok_or_else(|| EngineError::KeyNotFound(format!("table {table_id}")))
        })
        .await
    }

    pub async fn tables(&self) -> ResultEngine<Vec<DiningTable>> {
        self.bounded(async move {
            let models = dining_tables::Entity::find()
                .order_by_asc(dining_tables::Column::TableNumber)
                .order_by_asc(dining_tables::Column::TableId)
                .all(&self.database)
                .await?;
            Ok(models.into_iter().map(DiningTable::from).collect())
        })
        .await
    }

    /// Patch a table. A missing table is created when the patch is complete.
    pub async fn update_table(&self, table_id: &str, cmd: TableCmd) -> ResultEngine<DiningTable> {
        let patch = TablePatch::validate(cmd)?;
        let now = Utc::now();

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                match dining_tables::Entity::find_by_id(table_id.to_string())
                    .one(&db_tx)
                    .await?
                {
                    Some(model) => {
                        let mut active: dining_tables::ActiveModel = model.into();
                        if let Some(number_of_guests) = patch.number_of_guests {
                            active.number_of_guests = ActiveValue::Set(number_of_guests);
                        }
                        if let Some(table_number) = patch.table_number {
                            active.table_number = ActiveValue::Set(table_number);
                        }
                        active.updated_at = ActiveValue::Set(now);
                        let model = active.update(&db_tx).await?;
                        Ok(DiningTable::from(model))
                    }
                    None => match (patch.number_of_guests, patch.table_number) {
                        (Some(number_of_guests), Some(table_number)) => {
                            let table = DiningTable::with_id(
                                table_id.to_string(),
                                number_of_guests,
                                table_number,
                                now,
                            );
                            dining_tables::ActiveModel::from(&table)
                                .insert(&db_tx)
                                .await?;
                            tracing::info!("created table {table_id} on update");
                            Ok(table)
                        }
                        _ => Err(EngineError::KeyNotFound(format!("table {table_id}"))),
                    },
                }
            })
        })
        .await
    }

    /// Fail with `KeyNotFound` unless the table exists.
    pub(crate) async fn require_table<C: ConnectionTrait>(
        &self,
        db: &C,
        table_id: &str,
    ) -> ResultEngine<dining_tables::Model> {
        dining_tables::Entity::find_by_id(table_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("table {table_id}")))
    }
}
