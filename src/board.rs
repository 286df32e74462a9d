//! The activity board: one screen's worth of state and its change feed
//!
//! Owns the catalog, the debounced filter controller, the selection, and the
//! add-affordance flag, and pushes a fresh [`Snapshot`] to every subscriber
//! on each committed change. Subscribers get the current snapshot the moment
//! they attach, so late bindings render correctly without polling.

use std::time::Instant;

use crate::catalog::{ActivityCatalog, ActivityOption};
use crate::error::ValidationError;
use crate::filter::{AddAffordance, FilterController};
use crate::selection::SelectionState;

/// Everything the presentation layer needs to render the screen
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Activities to show as tiles, already filtered, insertion order.
    pub display: Vec<ActivityOption>,
    /// Whether the "add activity" affordance is visible.
    pub show_add: bool,
    /// The activity currently being done, if any.
    pub current: Option<ActivityOption>,
}

type Observer = Box<dyn FnMut(&Snapshot)>;

/// Screen controller composing catalog, filter, selection and affordance
pub struct ActivityBoard {
    catalog: ActivityCatalog,
    selection: SelectionState,
    filter: FilterController,
    affordance: AddAffordance,
    observers: Vec<Observer>,
}

impl ActivityBoard {
    pub fn new(filter: FilterController) -> Self {
        Self {
            catalog: ActivityCatalog::new(),
            selection: SelectionState::new(),
            filter,
            affordance: AddAffordance::default(),
            observers: Vec::new(),
        }
    }

    /// Initialize the catalog and push the first snapshot.
    pub fn seed<I, S>(&mut self, initial: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog.seed(initial);
        tracing::info!(count = self.catalog.full_list().len(), "catalog seeded");
        self.notify();
    }

    /// Register an observer; it immediately receives the current snapshot.
    pub fn subscribe<F>(&mut self, mut observer: F)
    where
        F: FnMut(&Snapshot) + 'static,
    {
        observer(&self.snapshot());
        self.observers.push(Box::new(observer));
    }

    /// Record a raw filter-field change; applied later via [`tick`].
    ///
    /// [`tick`]: ActivityBoard::tick
    pub fn input_changed(&mut self, raw: &str, now: Instant) {
        self.filter.note_input(raw, now);
    }

    /// Poll the debounce window; applies and pushes when an input matured.
    ///
    /// Returns true when a filter application happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(applied) = self.filter.poll(now) else {
            return false;
        };

        self.catalog.set_filter(&applied);
        let flipped = self.affordance.apply(self.catalog.filter_active());
        tracing::debug!(
            filter = %applied,
            add_visible = self.affordance.is_visible(),
            flipped,
            "filter applied"
        );
        self.notify();
        true
    }

    /// Append a new activity under the currently applied filter.
    ///
    /// An empty code is rejected without any state change; callers may treat
    /// that as a silent no-op.
    pub fn add(&mut self, code: &str) -> Result<(), ValidationError> {
        self.catalog.add(code)?;
        tracing::info!(code, "activity added");
        self.notify();
        Ok(())
    }

    /// Select an activity as the one currently being done.
    pub fn select(&mut self, option: ActivityOption) {
        tracing::info!(code = option.code(), "activity selected");
        self.selection.select(option);
        self.notify();
    }

    /// Whether a filter input is waiting out its debounce window.
    pub fn has_pending_filter(&self) -> bool {
        self.filter.has_pending()
    }

    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    /// Current screen state as a value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.catalog.display_list(),
            show_add: self.affordance.is_visible(),
            current: self.selection.current().cloned(),
        }
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}
