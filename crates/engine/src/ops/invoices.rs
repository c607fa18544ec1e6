use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, Invoice, InvoiceCmd, InvoiceView, ResultEngine, invoices,
    util::{normalize_optional_text, require},
};

use super::{Engine, with_tx};

/// An invoice is due one day after its order was created.
fn payment_due_date(order_created_at: DateTime<Utc>) -> DateTime<Utc> {
    order_created_at + Duration::days(1)
}

impl Engine {
    /// Issue an invoice for an existing order.
    ///
    /// The status defaults to `PENDING`.
    pub async fn create_invoice(&self, cmd: InvoiceCmd) -> ResultEngine<Invoice> {
        let order_id = require(normalize_optional_text(cmd.order_id), "order_id")?;
        let now = Utc::now();

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                let order = self.require_order(&db_tx, &order_id).await?;
                let invoice = Invoice::new(
                    order.order_id,
                    cmd.payment_method,
                    cmd.payment_status.unwrap_or_default(),
                    payment_due_date(order.created_at),
                    now,
                );
                invoices::ActiveModel::from(&invoice).insert(&db_tx).await?;
                tracing::info!(
                    "created invoice {} for order {}",
                    invoice.invoice_id,
                    invoice.order_id
                );
                Ok(invoice)
            })
        })
        .await
    }

    pub async fn invoice(&self, invoice_id: &str) -> ResultEngine<Invoice> {
        self.bounded(self.find_invoice(invoice_id)).await
    }

    pub async fn invoices(&self) -> ResultEngine<Vec<Invoice>> {
        self.bounded(async move {
            invoices::Entity::find()
                .order_by_asc(invoices::Column::CreatedAt)
                .order_by_asc(invoices::Column::InvoiceId)
                .all(&self.database)
                .await?
                .into_iter()
                .map(Invoice::try_from)
                .collect::<ResultEngine<Vec<_>>>()
        })
        .await
    }

    /// Patch payment method, status or order of an invoice.
    ///
    /// An absent status keeps the stored one. A missing invoice is created
    /// when the patch names an existing order.
    pub async fn update_invoice(&self, invoice_id: &str, cmd: InvoiceCmd) -> ResultEngine<Invoice> {
        let order_id = normalize_optional_text(cmd.order_id);
        let now = Utc::now();

        self.bounded(async move {
            with_tx!(self, |db_tx| {
                let order = match &order_id {
                    Some(order_id) => Some(self.require_order(&db_tx, order_id).await?),
                    None => None,
                };

                match invoices::Entity::find_by_id(invoice_id.to_string())
                    .one(&db_tx)
                    .await?
                {
                    Some(model) => {
                        let mut active: invoices::ActiveModel = model.into();
                        if let Some(order) = order {
                            active.order_id = ActiveValue::Set(order.order_id);
                            active.payment_due_date =
                                ActiveValue::Set(payment_due_date(order.created_at));
                        }
                        if let Some(method) = cmd.payment_method {
                            active.payment_method =
                                ActiveValue::Set(Some(method.as_str().to_string()));
                        }
                        if let Some(status) = cmd.payment_status {
                            active.payment_status = ActiveValue::Set(status.as_str().to_string());
                        }
                        active.updated_at = ActiveValue::Set(now);
                        Invoice::try_from(active.update(&db_tx).await?)
                    }
                    None => match order {
                        Some(order) => {
                            let invoice = Invoice::with_id(
                                invoice_id.to_string(),
                                order.order_id,
                                cmd.payment_method,
                                cmd.payment_status.unwrap_or_default(),
                                payment_due_date(order.created_at),
                                now,
                            );
                            invoices::ActiveModel::from(&invoice).insert(&db_tx).await?;
                            tracing::info!("created invoice {invoice_id} on update");
                            Ok(invoice)
                        }
                        None => Err(EngineError::KeyNotFound(format!("invoice {invoice_id}"))),
                    },
                }
            })
        })
        .await
    }

    /// The invoice merged with the billing of its order.
    ///
    /// Fails with `EmptyBilling` when the order has no line items.
    pub async fn invoice_view(&self, invoice_id: &str) -> ResultEngine<InvoiceView> {
        self.bounded(async move {
            let invoice = self.find_invoice(invoice_id).await?;
            let groups = self.billing(&invoice.order_id).await?;
            InvoiceView::compose(invoice, groups)
        })
        .await
    }

    async fn find_invoice(&self, invoice_id: &str) -> ResultEngine<Invoice> {
        let model = invoices::Entity::find_by_id(invoice_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("invoice {invoice_id}")))?;
        Invoice::try_from(model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn due_one_day_after_the_order() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 21, 30, 0).unwrap();

        assert_eq!(
            payment_due_date(created),
            Utc.with_ymd_and_hms(2025, 3, 2, 21, 30, 0).unwrap()
        );
    }
}
