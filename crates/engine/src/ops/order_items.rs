use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr};

use crate::{
    EngineError, OrderItem, OrderItemCmd, ResultEngine, foods, order_items,
    util::{normalize_optional_text, validate_price, validate_quantity},
};

use super::{Engine, with_tx};

impl Engine {
    pub async fn order_item(&self, order_item_id: &str) -> ResultEngine<OrderItem> {
        self.bounded(async move {
            order_items::Entity::find_by_id(order_item_id.to_string())
                .one(&self.database)
                .await?
                .map(OrderItem::from)
                .ok_or_else(|| EngineError::KeyNotFound(format!("order item {order_item_id}")))
        })
        .await
    }

    pub async fn order_items(&self) -> ResultEngine<Vec<OrderItem>> {
        self.bounded(async move {
            let models = order_items::Entity::find()
                .order_by_asc(order_items::Column::CreatedAt)
                .order_by_asc(Expr::cust("order_items.rowid"))
                .all(&self.database)
                .await?;
            Ok(models.into_iter().map(OrderItem::from).collect())
        })
        .await
    }

    /// Patch a line item. A new food must exist; a new unit price is normalized.
    ///
    /// A line item cannot exist without its order, so a missing id is always
    /// `KeyNotFound`.
    pub async fn update_order_item(
        &self,
        order_item_id: &str,
        cmd: OrderItemCmd,
    ) -> ResultEngine<OrderItem> {
        let food_id = normalize_optional_text(cmd.food_id);
        let quantity = cmd.quantity.map(validate_quantity).transpose()?;
        let unit_price = cmd
            .unit_price
            .map(|price| validate_price(price, "unit_price"))
            .transpose()?;
        let now = Utc::now();

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                let model = order_items::Entity::find_by_id(order_item_id.to_string())
                    .one(&db_tx)
                    .await?
                    .ok_or_else(|| {
                        EngineError::KeyNotFound(format!("order item {order_item_id}"))
                    })?;

                let mut active: order_items::ActiveModel = model.into();
                if let Some(food_id) = food_id {
                    foods::Entity::find_by_id(food_id.clone())
                        .one(&db_tx)
                        .await?
                        .ok_or_else(|| EngineError::KeyNotFound(format!("food {food_id}")))?;
                    active.food_id = ActiveValue::Set(food_id);
                }
                if let Some(quantity) = quantity {
                    active.quantity = ActiveValue::Set(quantity);
                }
                if let Some(unit_price) = unit_price {
                    active.unit_price = ActiveValue::Set(unit_price);
                }
                active.updated_at = ActiveValue::Set(now);
                let model = active.update(&db_tx).await?;
                Ok(OrderItem::from(model))
            })
        })
        .await
    }
}
