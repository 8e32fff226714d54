use std::fs;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{ConfigError, SourceConfig};
use crate::model::Order;
use crate::source::{OrderSource, SourceError};

const CUSTOMERS: &[&str] = &[
    "Ada Lovelace",
    "Grace Hopper",
    "Alan Turing",
    "Katherine Johnson",
    "Linus Torvalds",
    "Margaret Hamilton",
    "Dennis Ritchie",
    "Barbara Liskov",
];

/// Product name and unit price in cents.
const PRODUCTS: &[(&str, u64)] = &[
    ("Mechanical Keyboard", 12_900),
    ("USB-C Hub", 4_550),
    ("Standing Desk", 49_900),
    ("Noise Cancelling Headphones", 29_999),
    ("4K Monitor", 38_900),
    ("Laptop Stand", 3_999),
    ("Webcam", 7_450),
    ("Ergonomic Mouse", 5_990),
    ("Desk Lamp", 2_700),
];

const FIRST_ORDER_ID: u32 = 1001;

#[derive(Debug, Deserialize)]
struct OrdersFile {
    #[serde(default)]
    orders: Vec<Order>,
}

/// In-memory order catalogue with simulated latency.
///
/// Search is a case-insensitive substring match on id, customer and product.
/// When `fail_requests` is set every call returns [`SourceError::FetchFailed`]
/// after the simulated latency.
#[derive(Debug, Clone)]
pub struct SampleOrders {
    orders: Vec<Order>,
    latency: Duration,
    fail_requests: bool,
}

impl SampleOrders {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            latency: Duration::ZERO,
            fail_requests: false,
        }
    }

    /// Deterministic catalogue of `count` orders.
    pub fn generated(count: usize) -> Self {
        let orders = (0..count)
            .map(|i| {
                let customer = CUSTOMERS[i % CUSTOMERS.len()];
                let (product, unit_price) = PRODUCTS[(i * 7) % PRODUCTS.len()];
                let quantity = (i % 4) as u32 + 1;
                Order {
                    id: FIRST_ORDER_ID + i as u32,
                    customer: customer.to_string(),
                    product: product.to_string(),
                    quantity,
                    total_cents: unit_price * u64::from(quantity),
                }
            })
            .collect();
        Self::new(orders)
    }

    /// Reads `[[orders]]` entries from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::OrdersReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: OrdersFile =
            toml::from_str(&content).map_err(|e| ConfigError::OrdersParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Self::new(file.orders))
    }

    /// Builds the source described by the `[source]` config section.
    pub fn from_config(config: &SourceConfig) -> Result<Self, ConfigError> {
        let source = match &config.orders_file {
            Some(path) => Self::from_file(path)?,
            None => Self::generated(config.order_count),
        };
        Ok(source
            .with_latency(Duration::from_millis(config.latency_ms))
            .failing(config.fail_requests))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn failing(mut self, fail_requests: bool) -> Self {
        self.fail_requests = fail_requests;
        self
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    async fn respond<F>(&self, select: F) -> Result<Vec<Order>, SourceError>
    where
        F: FnOnce(&[Order]) -> Vec<Order>,
    {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.fail_requests {
            return Err(SourceError::fetch_failed("sample source configured to fail"));
        }
        Ok(select(&self.orders))
    }
}

#[async_trait]
impl OrderSource for SampleOrders {
    async fn get_all_orders(&self) -> Result<Vec<Order>, SourceError> {
        self.respond(|orders| orders.to_vec()).await
    }

    async fn search_orders(&self, query: &str) -> Result<Vec<Order>, SourceError> {
        let needle = query.trim().to_lowercase();
        self.respond(|orders| {
            orders
                .iter()
                .filter(|order| order.matches(&needle))
                .cloned()
                .collect()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_catalogue_is_deterministic() {
        let first = SampleOrders::generated(12);
        let second = SampleOrders::generated(12);
        assert_eq!(first.orders(), second.orders());
        assert_eq!(first.orders().len(), 12);
        assert_eq!(first.orders()[0].id, FIRST_ORDER_ID);
        assert_eq!(first.orders()[11].id, FIRST_ORDER_ID + 11);
    }

    #[test]
    fn generated_totals_are_quantity_times_price() {
        let source = SampleOrders::generated(4);
        for order in source.orders() {
            let (_, price) = PRODUCTS
                .iter()
                .find(|(name, _)| *name == order.product)
                .copied()
                .unwrap();
            assert_eq!(order.total_cents, price * u64::from(order.quantity));
        }
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_keeps_order() {
        let source = SampleOrders::generated(20);
        let results = source.search_orders("  GRACE ").await.unwrap();
        assert!(!results.is_empty());
        assert!(results.iter().all(|o| o.customer == "Grace Hopper"));
        assert!(results.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn search_without_match_returns_empty_list() {
        let source = SampleOrders::generated(20);
        let results = source.search_orders("no such thing").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn failing_source_reports_fetch_failed() {
        let source = SampleOrders::generated(3).failing(true);
        assert!(matches!(
            source.get_all_orders().await,
            Err(SourceError::FetchFailed { .. })
        ));
        assert!(source.search_orders("ada").await.is_err());
    }
}
