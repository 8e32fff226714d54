use crate::model::LoadingState;
use crate::ui::mvi::Reducer;

use super::intent::OrdersIntent;
use super::state::OrdersState;

/// Pure state transitions for the order screen.
///
/// Staleness decisions are made by the coordinator before dispatch; the
/// reducer applies whatever it is given.
pub struct OrdersReducer;

impl Reducer for OrdersReducer {
    type State = OrdersState;
    type Intent = OrdersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OrdersIntent::FetchStarted => OrdersState {
                status: Some(LoadingState::Loading),
                ..state
            },
            OrdersIntent::AllOrdersLoaded { orders } => OrdersState {
                status: Some(LoadingState::Loaded),
                visible: Some(orders.clone()),
                all_orders: Some(orders),
            },
            OrdersIntent::SearchResultsLoaded { orders } => OrdersState {
                status: Some(LoadingState::Loaded),
                visible: Some(orders),
                ..state
            },
            OrdersIntent::SearchSuperseded => OrdersState {
                status: Some(LoadingState::Loaded),
                ..state
            },
            OrdersIntent::FetchFailed => OrdersState {
                status: Some(LoadingState::Error),
                ..state
            },
        }
    }
}
