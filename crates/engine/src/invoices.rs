//! The module contains the `Invoice` struct, its payment enums and its entity.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine, util::new_id};

/// How an invoice is settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "CARD",
            Self::Cash => "CASH",
        }
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = EngineError;

    fn try_from(value: &str) -> ResultEngine<Self> {
        match value {
            "CARD" => Ok(Self::Card),
            "CASH" => Ok(Self::Cash),
            other => Err(EngineError::InvalidInput(format!(
                "unknown payment method: {other}"
            ))),
        }
    }
}

/// Whether an invoice has been paid. New invoices start as `PENDING`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
}

impl PaymentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
        }
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> ResultEngine<Self> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            other => Err(EngineError::InvalidInput(format!(
                "unknown payment status: {other}"
            ))),
        }
    }
}

/// An invoice for one order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Invoice {
    pub invoice_id: String,
    pub order_id: String,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    pub payment_due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    pub(crate) fn new(
        order_id: String,
        payment_method: Option<PaymentMethod>,
        payment_status: PaymentStatus,
        payment_due_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self::with_id(
            new_id(),
            order_id,
            payment_method,
            payment_status,
            payment_due_date,
            now,
        )
    }

    pub(crate) fn with_id(
        invoice_id: String,
        order_id: String,
        payment_method: Option<PaymentMethod>,
        payment_status: PaymentStatus,
        payment_due_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            invoice_id,
            order_id,
            payment_method,
            payment_status,
            payment_due_date,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub invoice_id: String,
    pub order_id: String,
    pub payment_method: Option<String>,
    pub payment_status: String,
    pub payment_due_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::OrderId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Orders,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Invoice> for ActiveModel {
    fn from(value: &Invoice) -> Self {
        Self {
            invoice_id: ActiveValue::Set(value.invoice_id.clone()),
            order_id: ActiveValue::Set(value.order_id.clone()),
            payment_method: ActiveValue::Set(
                value.payment_method.map(|method| method.as_str().to_string()),
            ),
            payment_status: ActiveValue::Set(value.payment_status.as_str().to_string()),
            payment_due_date: ActiveValue::Set(value.payment_due_date),
            created_at: ActiveValue::Set(value.created_at),
            updated_at: ActiveValue::Set(value.updated_at),
        }
    }
}

impl TryFrom<Model> for Invoice {
    type Error = EngineError;

    fn try_from(model: Model) -> ResultEngine<Self> {
        let payment_method = model
            .payment_method
            .as_deref()
            .map(PaymentMethod::try_from)
            .transpose()?;
        Ok(Self {
            invoice_id: model.invoice_id,
            order_id: model.order_id,
            payment_method,
            payment_status: PaymentStatus::try_from(model.payment_status.as_str())?,
            payment_due_date: model.payment_due_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
