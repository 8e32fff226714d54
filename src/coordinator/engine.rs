use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::{ResultPolicy, SearchConfig};
use crate::model::{LoadingState, Order};
use crate::shutdown::ShutdownSignal;
use crate::source::OrderSource;
use crate::ui::mvi::Reducer;

use super::intent::OrdersIntent;
use super::reducer::OrdersReducer;
use super::state::OrdersState;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Tuning knobs for [`OrderSearchCoordinator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorSettings {
    pub debounce: Duration,
    pub policy: ResultPolicy,
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            policy: ResultPolicy::default(),
        }
    }
}

impl From<&SearchConfig> for CoordinatorSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            debounce: config.debounce(),
            policy: config.result_policy,
        }
    }
}

/// Which fetch produced a completion.
#[derive(Debug, Clone, Copy)]
enum FetchTicket {
    All { generation: u64 },
    Search { generation: u64, search: u64 },
}

impl FetchTicket {
    fn generation(&self) -> u64 {
        match self {
            FetchTicket::All { generation } | FetchTicket::Search { generation, .. } => *generation,
        }
    }
}

struct Tracked {
    state: OrdersState,
    /// Bumped for every started fetch.
    fetch_generation: u64,
    /// Bumped for every started search; one result channel per search.
    search_generation: u64,
}

struct Inner {
    source: Arc<dyn OrderSource>,
    settings: CoordinatorSettings,
    tracked: Mutex<Tracked>,
    status_tx: watch::Sender<Option<LoadingState>>,
    orders_tx: watch::Sender<Option<Vec<Order>>>,
    debounce_task: Mutex<Option<JoinHandle<()>>>,
    shutdown: ShutdownSignal,
}

/// View-state coordinator for the order list screen.
///
/// Must be used from within a Tokio runtime: the debounce timer and every
/// fetch run as spawned tasks. Dropping the coordinator tears it down (see
/// [`OrderSearchCoordinator::shutdown`]).
pub struct OrderSearchCoordinator {
    inner: Arc<Inner>,
}

impl OrderSearchCoordinator {
    pub fn new(source: Arc<dyn OrderSource>, settings: CoordinatorSettings) -> Self {
        let (status_tx, _) = watch::channel(None);
        let (orders_tx, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                source,
                settings,
                tracked: Mutex::new(Tracked {
                    state: OrdersState::default(),
                    fetch_generation: 0,
                    search_generation: 0,
                }),
                status_tx,
                orders_tx,
                debounce_task: Mutex::new(None),
                shutdown: ShutdownSignal::new(),
            }),
        }
    }

    pub fn settings(&self) -> CoordinatorSettings {
        self.inner.settings
    }

    /// Loads the full list unless it is already loaded and non-empty.
    pub fn on_view_ready(&self) {
        if self.inner.shutdown.is_shutting_down() {
            return;
        }
        let needs_full_list = self.inner.tracked.lock().state.needs_full_list();
        if needs_full_list {
            self.inner.fetch_all();
        } else {
            tracing::debug!("Full order list already loaded, skipping fetch");
        }
    }

    /// Restarts the debounce timer for `query`.
    ///
    /// Only the last query of a burst is dispatched: an empty query reloads
    /// the full list, anything else is searched.
    pub fn on_search_query(&self, query: impl Into<String>) {
        if self.inner.shutdown.is_shutting_down() {
            return;
        }
        let query = query.into();
        let inner = Arc::clone(&self.inner);
        let delay = self.inner.settings.debounce;

        let mut slot = self.inner.debounce_task.lock();
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if inner.shutdown.is_shutting_down() {
                return;
            }
            tracing::debug!(query = %query, "Search query debounced");
            if query.is_empty() {
                inner.fetch_all();
            } else {
                inner.fetch_by_query(query);
            }
        }));
    }

    /// Latest status; new subscribers see the current value immediately.
    pub fn subscribe_status(&self) -> watch::Receiver<Option<LoadingState>> {
        self.inner.status_tx.subscribe()
    }

    /// Latest visible list; new subscribers see the current value immediately.
    pub fn subscribe_orders(&self) -> watch::Receiver<Option<Vec<Order>>> {
        self.inner.orders_tx.subscribe()
    }

    pub fn status(&self) -> Option<LoadingState> {
        *self.inner.status_tx.borrow()
    }

    pub fn orders(&self) -> Option<Vec<Order>> {
        self.inner.orders_tx.borrow().clone()
    }

    /// Cancels the pending debounce, stops in-flight fetches and stops
    /// publishing. Idempotent.
    pub fn shutdown(&self) {
        if self.inner.shutdown.signal() {
            tracing::info!("Order search coordinator shut down");
        }
        if let Some(task) = self.inner.debounce_task.lock().take() {
            task.abort();
        }
    }
}

impl Drop for OrderSearchCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Inner {
    fn fetch_all(self: &Arc<Self>) {
        let ticket = {
            let mut tracked = self.tracked.lock();
            tracked.fetch_generation += 1;
            let ticket = FetchTicket::All {
                generation: tracked.fetch_generation,
            };
            self.apply(&mut tracked, OrdersIntent::FetchStarted);
            ticket
        };
        tracing::debug!(generation = ticket.generation(), "Fetching all orders");

        let inner = Arc::clone(self);
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = inner.shutdown.wait() => return,
                result = inner.source.get_all_orders() => result,
            };
            let intent = match result {
                Ok(orders) => OrdersIntent::AllOrdersLoaded { orders },
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to load all orders");
                    OrdersIntent::FetchFailed
                }
            };
            inner.complete(ticket, intent);
        });
    }

    fn fetch_by_query(self: &Arc<Self>, query: String) {
        let ticket = {
            let mut tracked = self.tracked.lock();
            tracked.fetch_generation += 1;
            tracked.search_generation += 1;
            let ticket = FetchTicket::Search {
                generation: tracked.fetch_generation,
                search: tracked.search_generation,
            };
            self.apply(&mut tracked, OrdersIntent::FetchStarted);
            ticket
        };
        tracing::debug!(generation = ticket.generation(), query = %query, "Searching orders");

        let inner = Arc::clone(self);
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = inner.shutdown.wait() => return,
                result = inner.source.search_orders(&query) => result,
            };
            let intent = match result {
                Ok(orders) => OrdersIntent::SearchResultsLoaded { orders },
                Err(err) => {
                    tracing::warn!(error = %err, query = %query, "Failed to search orders");
                    OrdersIntent::FetchFailed
                }
            };
            inner.complete(ticket, intent);
        });
    }

    fn complete(&self, ticket: FetchTicket, intent: OrdersIntent) {
        let mut tracked = self.tracked.lock();
        if self.shutdown.is_shutting_down() {
            return;
        }

        if self.settings.policy == ResultPolicy::LatestRequest
            && ticket.generation() != tracked.fetch_generation
        {
            tracing::debug!(
                generation = ticket.generation(),
                latest = tracked.fetch_generation,
                "Discarding stale fetch result"
            );
            return;
        }

        let intent = match (ticket, intent) {
            (FetchTicket::Search { search, .. }, OrdersIntent::SearchResultsLoaded { .. })
                if search != tracked.search_generation =>
            {
                tracing::debug!(search, "Dropping results of superseded search");
                OrdersIntent::SearchSuperseded
            }
            (_, intent) => intent,
        };

        self.apply(&mut tracked, intent);
    }

    /// Reduces and publishes. Called with the state lock held so that
    /// publish order matches reduce order.
    fn apply(&self, tracked: &mut Tracked, intent: OrdersIntent) {
        let touches_list = intent.touches_visible_list();
        tracked.state = OrdersReducer::reduce(std::mem::take(&mut tracked.state), intent);

        self.status_tx.send_replace(tracked.state.status);
        if touches_list {
            self.orders_tx.send_replace(tracked.state.visible.clone());
        }
    }
}
