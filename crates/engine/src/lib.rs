//! Restaurant back-office engine.
//!
//! The [`Engine`] owns the database handle and exposes every operation:
//! catalog (menus, foods), dining tables, orders and their line items,
//! invoices and users. Billing views are derived on read from the line items
//! of an order, see [`Engine::compute_billing`] and [`Engine::invoice_view`].

pub use billing::{BillingLine, BillingView, InvoiceView};
pub use commands::{
    Credentials, FoodCmd, InvoiceCmd, MenuCmd, OrderCmd, OrderItemCmd, PlaceOrder, SignUp,
    TableCmd,
};
pub use dining_tables::DiningTable;
pub use error::EngineError;
pub use foods::Food;
pub use invoices::{Invoice, PaymentMethod, PaymentStatus};
pub use menus::Menu;
pub use money::{PRICE_PRECISION, normalize};
pub use ops::{DEFAULT_REQUEST_TIMEOUT, Engine, EngineBuilder};
pub use order_items::OrderItem;
pub use orders::Order;
pub use pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Page, PageRequest};
pub use users::User;

mod billing;
mod commands;
mod dining_tables;
mod error;
mod foods;
mod invoices;
mod menus;
mod money;
mod ops;
mod order_items;
mod orders;
mod pagination;
mod users;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;
