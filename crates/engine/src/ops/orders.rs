use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*};

use crate::{
    EngineError, Order, OrderCmd, OrderItem, PlaceOrder, ResultEngine, foods, order_items, orders,
    util::{normalize_optional_text, require, validate_price, validate_quantity},
};

use super::{Engine, with_tx};

/// A requested line that passed validation.
struct ItemRequest {
    food_id: String,
    quantity: i64,
    unit_price: f64,
}

fn validate_items(cmd: PlaceOrder) -> ResultEngine<(Option<String>, Vec<ItemRequest>)> {
    if cmd.order_items.is_empty() {
        return Err(EngineError::InvalidInput(
            "order_items must not be empty".to_string(),
        ));
    }

    let items = cmd
        .order_items
        .into_iter()
        .map(|item| {
            Ok(ItemRequest {
                food_id: require(normalize_optional_text(item.food_id), "food_id")?,
                quantity: validate_quantity(require(item.quantity, "quantity")?)?,
                unit_price: validate_price(require(item.unit_price, "unit_price")?, "unit_price")?,
            })
        })
        .collect::<ResultEngine<Vec<_>>>()?;

    Ok((normalize_optional_text(cmd.table_id), items))
}

impl Engine {
    /// Create an order without line items. The table must exist when given.
    pub async fn create_order(&self, cmd: OrderCmd) -> ResultEngine<Order> {
        let now = Utc::now();
        let order = Order::new(
            normalize_optional_text(cmd.table_id),
            cmd.order_date.unwrap_or(now),
            now,
        );

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                if let Some(table_id) = &order.table_id {
                    self.require_table(&db_tx, table_id).await?;
                }
                orders::ActiveModel::from(&order).insert(&db_tx).await?;
                tracing::info!("created order {}", order.order_id);
                Ok(order)
            })
        })
        .await
    }

    pub async fn order(&self, order_id: &str) -> ResultEngine<Order> {
        self.bounded(async move {
            self.require_order(&self.database, order_id)
                .await
                .map(Order::from)
        })
        .await
    }

    pub async fn orders(&self) -> ResultEngine<Vec<Order>> {
        self.bounded(async move {
            let models = orders::Entity::find()
                .order_by_asc(orders::Column::CreatedAt)
                .order_by_asc(orders::Column::OrderId)
                .all(&self.database)
                .await?;
            Ok(models.into_iter().map(Order::from).collect())
        })
        .await
    }

    /// Point an order at another table, after checking the table exists.
    ///
    /// A missing order is created when the patch names a table.
    pub async fn update_order(&self, order_id: &str, cmd: OrderCmd) -> ResultEngine<Order> {
        let table_id = normalize_optional_text(cmd.table_id);
        let order_date = cmd.order_date;
        let now = Utc::now();

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                if let Some(table_id) = &table_id {
                    self.require_table(&db_tx, table_id).await?;
                }

                match orders::Entity::find_by_id(order_id.to_string())
                    .one(&db_tx)
                    .await?
                {
                    Some(model) => {
                        let mut active: orders::ActiveModel = model.into();
                        if let Some(table_id) = table_id {
                            active.table_id = ActiveValue::Set(Some(table_id));
                        }
                        if let Some(order_date) = order_date {
                            active.order_date = ActiveValue::Set(order_date);
                        }
                        active.updated_at = ActiveValue::Set(now);
                        let model = active.update(&db_tx).await?;
                        Ok(Order::from(model))
                    }
                    None if table_id.is_some() => {
                        let order = Order::with_id(
                            order_id.to_string(),
                            table_id,
                            order_date.unwrap_or(now),
                            now,
                        );
                        orders::ActiveModel::from(&order).insert(&db_tx).await?;
                        tracing::info!("created order {order_id} on update");
                        Ok(order)
                    }
                    None => Err(EngineError::KeyNotFound(format!("order {order_id}"))),
                }
            })
        })
        .await
    }

    /// Place an order: the parent order and all of its line items, atomically.
    ///
    /// Every line is validated before the store is touched. Then the table
    /// and every food are resolved before anything is written, so an unknown
    /// reference leaves no order and no line behind. Unit prices are stored
    /// normalized to two decimals.
    pub async fn place_order(&self, cmd: PlaceOrder) -> ResultEngine<String> {
        let (table_id, items) = validate_items(cmd)?;
        let now = Utc::now();

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                if let Some(table_id) = &table_id {
                    self.require_table(&db_tx, table_id).await?;
                }
                self.require_foods(&db_tx, &items).await?;

                let order = Order::new(table_id, now, now);
                orders::ActiveModel::from(&order).insert(&db_tx).await?;

                let lines: Vec<order_items::ActiveModel> = items
                    .into_iter()
                    .map(|item| {
                        let line = OrderItem::new(
                            order.order_id.clone(),
                            item.food_id,
                            item.quantity,
                            item.unit_price,
                            now,
                        );
                        order_items::ActiveModel::from(&line)
                    })
                    .collect();
                let count = lines.len();
                order_items::Entity::insert_many(lines)
                    .exec_without_returning(&db_tx)
                    .await?;

                tracing::info!("placed order {} with {count} items", order.order_id);
                Ok(order.order_id)
            })
        })
        .await
    }

    pub(crate) async fn require_order<C: ConnectionTrait>(
        &self,
        db: &C,
        order_id: &str,
    ) -> ResultEngine<orders::Model> {
        orders::Entity::find_by_id(order_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("order {order_id}")))
    }

    /// Fail on the first requested food that does not exist.
    async fn require_foods<C: ConnectionTrait>(
        &self,
        db: &C,
        items: &[ItemRequest],
    ) -> ResultEngine<()> {
        let wanted: Vec<&str> = items.iter().map(|item| item.food_id.as_str()).collect();
        let found: HashSet<String> = foods::Entity::find()
            .select_only()
            .column(foods::Column::FoodId)
            .filter(foods::Column::FoodId.is_in(wanted.iter().copied()))
            .into_tuple::<String>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        match wanted.into_iter().find(|food_id| !found.contains(*food_id)) {
            Some(food_id) => Err(EngineError::KeyNotFound(format!("food {food_id}"))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrderItemCmd;

    #[test]
    fn empty_batch_is_rejected() {
        let result = validate_items(PlaceOrder::new(None));

        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn every_line_is_checked() {
        let cmd = PlaceOrder::new(Some("t1".to_string()))
            .item(OrderItemCmd::new("f1", 1, 2.0))
            .item(OrderItemCmd {
                food_id: Some("f2".to_string()),
                quantity: None,
                unit_price: Some(1.0),
            });

        assert_eq!(
            validate_items(cmd).err(),
            Some(EngineError::InvalidInput("quantity is required".to_string()))
        );
    }

    #[test]
    fn unit_prices_are_normalized() {
        let cmd = PlaceOrder::new(None).item(OrderItemCmd::new("f1", 2, 4.005));
        let (table_id, items) = validate_items(cmd).unwrap();

        assert_eq!(table_id, None);
        assert_eq!(items[0].unit_price, 4.01);
    }
}
