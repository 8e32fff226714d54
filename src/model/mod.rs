//! Domain types shared by the data source, the coordinator and the UI.

mod loading;
mod order;

pub use loading::LoadingState;
pub use order::Order;
