//! Search input feature module.
//!
//! Line editing for the query box. The App forwards every text change to the
//! coordinator.

mod intent;
mod reducer;
mod state;

pub use intent::SearchInputIntent;
pub use reducer::SearchInputReducer;
pub use state::SearchInputState;
