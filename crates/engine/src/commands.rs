//! Command structs for engine operations.
//!
//! Every field is optional: commands arrive straight from request bodies and
//! the engine decides, once per command, whether they describe a complete
//! record. Create commands need all required fields, update commands are
//! sparse patches.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{PaymentMethod, PaymentStatus};

/// Create or patch a menu.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MenuCmd {
    pub name: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl MenuCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn window(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }
}

/// Create or patch a food.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FoodCmd {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>,
}

impl FoodCmd {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: f64,
        food_image: impl Into<String>,
        menu_id: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            food_image: Some(food_image.into()),
            menu_id: Some(menu_id.into()),
        }
    }
}

/// Create or patch a dining table.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TableCmd {
    pub number_of_guests: Option<i32>,
    pub table_number: Option<i32>,
}

impl TableCmd {
    #[must_use]
    pub fn new(number_of_guests: i32, table_number: i32) -> Self {
        Self {
            number_of_guests: Some(number_of_guests),
            table_number: Some(table_number),
        }
    }
}

/// Create or patch an order.
///
/// `order_date` defaults to now on creation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrderCmd {
    pub table_id: Option<String>,
    pub order_date: Option<DateTime<Utc>>,
}

/// One requested line of an order placement, or a patch of an existing line.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrderItemCmd {
    pub food_id: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
}

impl OrderItemCmd {
    #[must_use]
    pub fn new(food_id: impl Into<String>, quantity: i64, unit_price: f64) -> Self {
        Self {
            food_id: Some(food_id.into()),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
        }
    }
}

/// Place an order: one parent order plus its batch of line items.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlaceOrder {
    pub table_id: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItemCmd>,
}

impl PlaceOrder {
    #[must_use]
    pub fn new(table_id: Option<String>) -> Self {
        Self {
            table_id,
            order_items: Vec::new(),
        }
    }

    #[must_use]
    pub fn item(mut self, item: OrderItemCmd) -> Self {
        self.order_items.push(item);
        self
    }
}

/// Create or patch an invoice.
///
/// On creation `payment_status` defaults to [`PaymentStatus::Pending`]; on
/// update an absent status leaves the stored one untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InvoiceCmd {
    pub order_id: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: Option<PaymentStatus>,
}

impl InvoiceCmd {
    #[must_use]
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    #[must_use]
    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }
}

/// Register a new user.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SignUp {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}
