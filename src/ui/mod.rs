//! Terminal display layer for the order screen.
//!
//! A thin consumer of [`OrderSearchCoordinator`](crate::coordinator::OrderSearchCoordinator):
//! it forwards "view ready" and query changes, and renders whatever the
//! coordinator publishes.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
pub mod visibility;

pub use runtime::run;
