use sea_orm::{JoinType, QueryFilter, QueryOrder, QuerySelect, prelude::*, sea_query::Expr};

use crate::{
    BillingView, EngineError, ResultEngine,
    billing::{JoinedRow, group_lines},
    dining_tables, foods, order_items, orders,
};

use super::Engine;

impl Engine {
    /// Rebuild the billing views of an order from its line items.
    ///
    /// An order without line items yields an empty list.
    pub async fn compute_billing(&self, order_id: &str) -> ResultEngine<Vec<BillingView>> {
        self.bounded(self.billing(order_id)).await
    }

    /// Match, left-join foods, orders and tables, and project: one statement.
    /// Grouping then runs over the typed rows.
    pub(crate) async fn billing(&self, order_id: &str) -> ResultEngine<Vec<BillingView>> {
        let rows = order_items::Entity::find()
            .select_only()
            .column_as(order_items::Column::OrderId, "order_id")
            .column_as(order_items::Column::Quantity, "quantity")
            .column_as(order_items::Column::UnitPrice, "unit_price")
            .column_as(foods::Column::Name, "food_name")
            .column_as(foods::Column::FoodImage, "food_image")
            .column_as(dining_tables::Column::TableId, "table_id")
            .column_as(dining_tables::Column::TableNumber, "table_number")
            .join(JoinType::LeftJoin, order_items::Relation::Foods.def())
            .join(JoinType::LeftJoin, order_items::Relation::Orders.def())
            .join(JoinType::LeftJoin, orders::Relation::DiningTables.def())
            .filter(order_items::Column::OrderId.eq(order_id))
            .order_by_asc(order_items::Column::CreatedAt)
            .order_by_asc(Expr::cust("order_items.rowid"))
            .into_model::<JoinedRow>()
            .all(&self.database)
            .await
            .map_err(|err| EngineError::Pipeline(err.to_string()))?;

        tracing::debug!("billing for order {order_id}: {} rows", rows.len());
        group_lines(rows)
    }
}
