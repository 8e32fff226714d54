/// Outcome of the most recent fetch, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadingState {
    Loading,
    Loaded,
    Error,
}

impl LoadingState {
    pub fn label(&self) -> &'static str {
        match self {
            LoadingState::Loading => "Loading",
            LoadingState::Loaded => "Loaded",
            LoadingState::Error => "Error",
        }
    }
}
