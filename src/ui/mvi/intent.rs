//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses in the search box)
/// - System events (fetch started, fetch completed, fetch failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
