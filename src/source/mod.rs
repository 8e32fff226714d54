//! Order data sources.
//!
//! The coordinator only knows about the [`OrderSource`] trait. Matching
//! semantics for search queries belong to the source, not the coordinator.

mod sample;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Order;

pub use sample::SampleOrders;

/// Errors a data source may report.
///
/// The coordinator does not distinguish failure causes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("Failed to fetch orders: {reason}")]
    FetchFailed { reason: String },
}

impl SourceError {
    pub fn fetch_failed(reason: impl Into<String>) -> Self {
        SourceError::FetchFailed {
            reason: reason.into(),
        }
    }
}

/// Asynchronous provider of orders.
#[async_trait]
pub trait OrderSource: Send + Sync + 'static {
    /// Returns every order, in source order.
    async fn get_all_orders(&self) -> Result<Vec<Order>, SourceError>;

    /// Returns the orders matching `query`, in source order.
    async fn search_orders(&self, query: &str) -> Result<Vec<Order>, SourceError>;
}
