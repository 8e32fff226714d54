//! Order search coordinator.
//!
//! Mediates between display-layer signals ("view ready", "query changed")
//! and the asynchronous [`OrderSource`](crate::source::OrderSource), and
//! exposes two latest-value cells: the [`LoadingState`](crate::model::LoadingState)
//! and the visible order list.
//!
//! # Architecture
//!
//! ```text
//! on_view_ready ──────────────┐
//!                             ├─→ fetch task ─→ OrdersIntent ─→ OrdersReducer ─→ watch cells
//! on_search_query ─→ debounce ┘
//! ```
//!
//! - `state.rs` - What the screen shows (status, visible list, full list)
//! - `intent.rs` - Fetch lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `engine.rs` - Debouncing, task spawning, staleness checks, publishing

mod engine;
mod intent;
mod reducer;
mod state;

pub use engine::{CoordinatorSettings, OrderSearchCoordinator, DEFAULT_DEBOUNCE};
pub use intent::OrdersIntent;
pub use reducer::OrdersReducer;
pub use state::OrdersState;
