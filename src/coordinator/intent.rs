use crate::model::Order;
use crate::ui::mvi::Intent;

/// Fetch lifecycle events applied to [`super::OrdersState`].
#[derive(Debug, Clone)]
pub enum OrdersIntent {
    /// A fetch of either kind was issued.
    FetchStarted,
    AllOrdersLoaded {
        orders: Vec<Order>,
    },
    SearchResultsLoaded {
        orders: Vec<Order>,
    },
    /// A search finished after a newer search was dispatched. Its status is
    /// still reported, its list is not.
    SearchSuperseded,
    FetchFailed,
}

impl Intent for OrdersIntent {}

impl OrdersIntent {
    /// Whether applying this intent can change the visible list.
    pub fn touches_visible_list(&self) -> bool {
        matches!(
            self,
            OrdersIntent::AllOrdersLoaded { .. } | OrdersIntent::SearchResultsLoaded { .. }
        )
    }
}
