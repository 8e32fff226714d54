use crate::model::LoadingState;

/// Which parts of the order screen are shown for a given status.
///
/// The flags are mutually exclusive per status: a loaded screen shows the
/// search input and list, a failed one shows only the error message, a
/// loading one shows only the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub search_input: bool,
    pub list: bool,
    pub error: bool,
    pub progress: bool,
}

impl Visibility {
    pub fn for_status(status: Option<LoadingState>) -> Self {
        let is = |expected: LoadingState| status == Some(expected);
        Self {
            search_input: is(LoadingState::Loaded),
            list: is(LoadingState::Loaded),
            error: is(LoadingState::Error),
            progress: is(LoadingState::Loading),
        }
    }
}
