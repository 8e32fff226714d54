use crate::model::{LoadingState, Order};
use crate::ui::mvi::UiState;

/// Everything the coordinator knows about the order screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrdersState {
    /// `None` until the first fetch starts.
    pub status: Option<LoadingState>,
    /// The list shown to the user: the full list or the latest search result.
    pub visible: Option<Vec<Order>>,
    /// Last successful "load all" result.
    pub all_orders: Option<Vec<Order>>,
}

impl UiState for OrdersState {}

impl OrdersState {
    /// True when the full list was never loaded or came back empty.
    pub fn needs_full_list(&self) -> bool {
        self.all_orders.as_ref().map_or(true, |orders| orders.is_empty())
    }
}
