use crate::coordinator::OrderSearchCoordinator;
use crate::model::{LoadingState, Order};
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchInputIntent, SearchInputReducer, SearchInputState};
use crate::ui::visibility::Visibility;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Display-layer state for the order screen.
///
/// Mirrors the coordinator's two cells (`status`, `orders`) and owns the
/// local-only bits: query editing, list selection, spinner frame.
pub struct App {
    should_quit: bool,
    coordinator: OrderSearchCoordinator,
    search: SearchInputState,
    status: Option<LoadingState>,
    orders: Vec<Order>,
    selection: usize,
    spinner_frame: usize,
}

impl App {
    pub fn new(coordinator: OrderSearchCoordinator) -> Self {
        let status = coordinator.status();
        let orders = coordinator.orders().unwrap_or_default();
        Self {
            should_quit: false,
            coordinator,
            search: SearchInputState::default(),
            status,
            orders,
            selection: 0,
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Screen became active.
    pub fn on_view_ready(&self) {
        self.coordinator.on_view_ready();
    }

    /// Dispatches the current query again. An empty query reloads the full
    /// list; this also recovers from a failed search.
    pub fn reload(&self) {
        self.coordinator.on_search_query(self.search.text.clone());
    }

    /// Applies a line-editing intent and forwards the query when the text
    /// changed, including when it became empty.
    pub fn on_search_input(&mut self, intent: SearchInputIntent) {
        let previous = self.search.text.clone();
        dispatch_mvi!(self, search, SearchInputReducer, intent);
        if self.search.text != previous {
            self.coordinator.on_search_query(self.search.text.clone());
        }
    }

    pub fn on_status(&mut self, status: Option<LoadingState>) {
        self.status = status;
    }

    pub fn on_orders(&mut self, orders: Option<Vec<Order>>) {
        self.orders = orders.unwrap_or_default();
        self.selection = self.selection.min(self.orders.len().saturating_sub(1));
    }

    pub fn on_tick(&mut self) {
        if self.status == Some(LoadingState::Loading) {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.orders.is_empty() {
            self.selection = 0;
            return;
        }
        let last = self.orders.len() - 1;
        self.selection = self.selection.saturating_add_signed(delta).min(last);
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::for_status(self.status)
    }

    pub fn search(&self) -> &SearchInputState {
        &self.search
    }

    pub fn status(&self) -> Option<LoadingState> {
        self.status
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn coordinator(&self) -> &OrderSearchCoordinator {
        &self.coordinator
    }
}
