//! Shared test utilities: a scripted order source and order fixtures.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use order_search::config::ResultPolicy;
use order_search::coordinator::{CoordinatorSettings, OrderSearchCoordinator};
use order_search::model::Order;
use order_search::source::{OrderSource, SourceError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const DEBOUNCE: Duration = Duration::from_millis(500);

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Orders with the given ids, in the given order.
pub fn orders(ids: &[u32]) -> Vec<Order> {
    ids.iter()
        .map(|&id| Order {
            id,
            customer: format!("Customer {id}"),
            product: format!("Product {id}"),
            quantity: 1,
            total_cents: u64::from(id) * 100,
        })
        .collect()
}

/// A request the coordinator made to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    All,
    Search(String),
}

/// What the source answers, and after how long.
#[derive(Debug, Clone)]
pub struct Reply {
    pub latency: Duration,
    pub result: Result<Vec<Order>, SourceError>,
}

impl Reply {
    pub fn ok(orders: Vec<Order>) -> Self {
        Self {
            latency: Duration::ZERO,
            result: Ok(orders),
        }
    }

    pub fn err() -> Self {
        Self {
            latency: Duration::ZERO,
            result: Err(SourceError::fetch_failed("scripted failure")),
        }
    }

    pub fn after(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

/// Order source whose answers are set up by the test and whose calls are
/// recorded in order.
pub struct ScriptedSource {
    calls: Mutex<Vec<Call>>,
    all: Mutex<Reply>,
    searches: Mutex<HashMap<String, Reply>>,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            all: Mutex::new(Reply::ok(Vec::new())),
            searches: Mutex::new(HashMap::new()),
        })
    }

    pub fn on_all(&self, reply: Reply) {
        *self.all.lock() = reply;
    }

    pub fn on_search(&self, query: &str, reply: Reply) {
        self.searches.lock().insert(query.to_string(), reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    async fn answer(reply: Reply) -> Result<Vec<Order>, SourceError> {
        if !reply.latency.is_zero() {
            tokio::time::sleep(reply.latency).await;
        }
        reply.result
    }
}

#[async_trait]
impl OrderSource for ScriptedSource {
    async fn get_all_orders(&self) -> Result<Vec<Order>, SourceError> {
        self.calls.lock().push(Call::All);
        let reply = self.all.lock().clone();
        Self::answer(reply).await
    }

    async fn search_orders(&self, query: &str) -> Result<Vec<Order>, SourceError> {
        self.calls.lock().push(Call::Search(query.to_string()));
        let reply = self
            .searches
            .lock()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Reply::ok(Vec::new()));
        Self::answer(reply).await
    }
}

pub fn coordinator(source: &Arc<ScriptedSource>, policy: ResultPolicy) -> OrderSearchCoordinator {
    let source: Arc<dyn OrderSource> = source.clone();
    OrderSearchCoordinator::new(
        source,
        CoordinatorSettings {
            debounce: DEBOUNCE,
            policy,
        },
    )
}

/// Lets spawned tasks run and the paused clock move forward.
pub async fn settle(duration: Duration) {
    tokio::time::sleep(duration).await;
}
