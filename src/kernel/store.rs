use std::sync::Arc;

use super::layout::{DefaultLayoutResolver, LayoutResolver};
use super::reducer::reduce;
use super::{Action, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub state_changed: bool,
}

/// Holds the committed snapshot. Committed snapshots are immutable; a
/// dispatch either replaces the `Arc` or leaves it untouched.
pub struct Store {
    state: Arc<AppState>,
    resolver: Arc<dyn LayoutResolver>,
}

impl Store {
    pub fn new(state: AppState, resolver: Arc<dyn LayoutResolver>) -> Self {
        Self {
            state: Arc::new(state),
            resolver,
        }
    }

    pub fn with_default_resolver(state: AppState) -> Self {
        Self::new(state, Arc::new(DefaultLayoutResolver))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn resolver(&self) -> &dyn LayoutResolver {
        self.resolver.as_ref()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let name = action.name();
        let next = reduce(&self.state, action, self.resolver.as_ref());
        if next == *self.state {
            tracing::trace!(action = name, "state unchanged");
            return DispatchResult {
                state_changed: false,
            };
        }

        self.state = Arc::new(next);
        tracing::trace!(action = name, "state committed");
        DispatchResult {
            state_changed: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
