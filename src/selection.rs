//! Current-activity selection

use crate::catalog::ActivityOption;

/// Holds the activity the user is currently doing, if any
///
/// Starts empty and is never cleared; any option may be selected, including
/// one no longer visible under the active filter.
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    current: Option<ActivityOption>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, option: ActivityOption) {
        self.current = Some(option);
    }

    pub fn current(&self) -> Option<&ActivityOption> {
        self.current.as_ref()
    }
}
