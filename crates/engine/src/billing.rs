//! Billing views.
//!
//! A billing view is never stored: it is rebuilt on every read from the order
//! items of one order. The store runs the match and the three left joins and
//! hands back one [`JoinedRow`] per order item; this module turns those rows
//! into typed [`BillingLine`]s, groups them into [`BillingView`]s and reshapes
//! a view into an [`InvoiceView`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::FromQueryResult;
use serde::Serialize;

use crate::{EngineError, Invoice, PaymentMethod, PaymentStatus, ResultEngine, money};

/// One order item with the food, order and table columns joined in.
///
/// Food and table columns are `None` when the referenced row is missing.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub(crate) struct JoinedRow {
    pub order_id: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub table_id: Option<String>,
    pub table_number: Option<i32>,
}

/// A flat billing line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BillingLine {
    /// `price * quantity`.
    pub amount: f64,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub table_number: Option<i32>,
    pub table_id: Option<String>,
    pub order_id: String,
    /// Unit price captured on the order item.
    pub price: f64,
    pub quantity: i64,
}

/// The billing summary of one order at one table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BillingView {
    pub payment_due: f64,
    pub total_count: usize,
    pub table_number: Option<i32>,
    pub order_id: String,
    pub table_id: Option<String>,
    pub order_items: Vec<BillingLine>,
}

/// Invoice metadata merged with the billing of its order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InvoiceView {
    pub invoice_id: String,
    /// `"CARD"`, `"CASH"`, or the literal `"null"` when no method was chosen.
    pub payment_method: String,
    pub order_id: String,
    pub payment_status: PaymentStatus,
    pub payment_due: f64,
    pub table_number: Option<i32>,
    pub payment_due_date: DateTime<Utc>,
    pub order_details: Vec<BillingLine>,
}

impl InvoiceView {
    /// Merge `invoice` with the first billing group of its order.
    pub(crate) fn compose(invoice: Invoice, groups: Vec<BillingView>) -> ResultEngine<Self> {
        let Some(group) = groups.into_iter().next() else {
            return Err(EngineError::EmptyBilling(invoice.order_id));
        };

        Ok(Self {
            invoice_id: invoice.invoice_id,
            payment_method: invoice
                .payment_method
                .map_or("null", PaymentMethod::as_str)
                .to_string(),
            order_id: invoice.order_id,
            payment_status: invoice.payment_status,
            payment_due: group.payment_due,
            table_number: group.table_number,
            payment_due_date: invoice.payment_due_date,
            order_details: group.order_items,
        })
    }
}

/// Project a joined row into a flat line, computing its amount.
pub(crate) fn project(row: JoinedRow) -> ResultEngine<(BillingLine, Decimal)> {
    let amount = money::line_amount(row.unit_price, row.quantity).ok_or_else(|| {
        EngineError::Pipeline(format!(
            "line amount out of range: {} x {}",
            row.unit_price, row.quantity
        ))
    })?;

    let line = BillingLine {
        amount: money::to_price(amount),
        food_name: row.food_name,
        food_image: row.food_image,
        table_number: row.table_number,
        table_id: row.table_id,
        order_id: row.order_id,
        price: row.unit_price,
        quantity: row.quantity,
    };
    Ok((line, amount))
}

struct Group {
    due: Decimal,
    view: BillingView,
}

/// Group flat lines by `(order_id, table_id, table_number)`.
///
/// Groups come out in the order their first line was seen, and lines keep
/// their input order inside a group. `payment_due` is the exact decimal sum
/// of the line amounts, rounded once at the end.
pub(crate) fn group_lines(rows: Vec<JoinedRow>) -> ResultEngine<Vec<BillingView>> {
    let mut groups: Vec<Group> = Vec::new();

    for row in rows {
        let (line, amount) = project(row)?;
        let position = groups.iter().position(|group| {
            group.view.order_id == line.order_id
                && group.view.table_id == line.table_id
                && group.view.table_number == line.table_number
        });
        let group = match position {
            Some(index) => &mut groups[index],
            None => {
                groups.push(Group {
                    due: Decimal::ZERO,
                    view: BillingView {
                        payment_due: 0.0,
                        total_count: 0,
                        table_number: line.table_number,
                        order_id: line.order_id.clone(),
                        table_id: line.table_id.clone(),
                        order_items: Vec::new(),
                    },
                });
                let last = groups.len() - 1;
                &mut groups[last]
            }
        };

        group.due = group
            .due
            .checked_add(amount)
            .ok_or_else(|| EngineError::Pipeline("payment due overflow".to_string()))?;
        group.view.order_items.push(line);
    }

    Ok(groups
        .into_iter()
        .map(|group| {
            let mut view = group.view;
            view.payment_due = money::to_price(group.due);
            view.total_count = view.order_items.len();
            view
        })
        .collect())
}
