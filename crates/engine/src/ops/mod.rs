use std::{future::Future, time::Duration};

use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod billing;
mod foods;
mod invoices;
mod menus;
mod order_items;
mod orders;
mod tables;
mod users;

/// Budget given to a single engine operation unless the builder overrides it.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(100);

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    request_timeout: Duration,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Drive `operation` to completion within the request budget.
    ///
    /// On timeout the operation future is dropped, which rolls back any open
    /// transaction.
    pub(crate) async fn bounded<T>(
        &self,
        operation: impl Future<Output = ResultEngine<T>>,
    ) -> ResultEngine<T> {
        tokio::time::timeout(self.request_timeout, operation)
            .await
            .map_err(|_| EngineError::Timeout(self.request_timeout))?
    }
}

/// The builder for `Engine`
pub struct EngineBuilder {
    database: DatabaseConnection,
    request_timeout: Duration,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            database: DatabaseConnection::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> EngineBuilder {
        self.request_timeout = timeout;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        if self.request_timeout.is_zero() {
            return Err(EngineError::InvalidInput(
                "request timeout must be > 0".to_string(),
            ));
        }
        Ok(Engine {
            database: self.database,
            request_timeout: self.request_timeout,
        })
    }
}
