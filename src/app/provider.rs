//! Store lifecycle: one provider per mounted view tree.
//!
//! The provider owns the [`Store`], keeps a memoized [`StoreValue`] (the
//! committed snapshot merged with bound operations) and notifies
//! subscribers after each commit. Everything here lives on the UI thread.

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use compact_str::CompactString;
use slotmap::{new_key_type, SlotMap};

use crate::kernel::services::ports::Settings;
use crate::kernel::services::{KernelBusReceiver, KernelMessage};
use crate::kernel::{
    Action, AppState, DefaultLayoutResolver, DispatchResult, GraphData, InitialState,
    LayoutResolver, MetricsPatch, RawLayout, StateDefaults, Store,
};

new_key_type! {
    pub struct SubscriptionId;
}

type Subscriber = Rc<dyn Fn(&Rc<StoreValue>)>;

struct ProviderInner {
    store: RefCell<Store>,
    value: RefCell<Rc<StoreValue>>,
    subscribers: RefCell<SlotMap<SubscriptionId, Subscriber>>,
}

impl ProviderInner {
    fn dispatch(self: &Rc<Self>, action: Action) -> DispatchResult {
        let result = self.store.borrow_mut().dispatch(action);
        if !result.state_changed {
            return result;
        }

        let value = Rc::new(StoreValue {
            state: self.store.borrow().snapshot(),
            ops: StoreOps::bound(Rc::downgrade(self)),
        });
        *self.value.borrow_mut() = Rc::clone(&value);

        // Collected up front so callbacks may subscribe, unsubscribe or
        // dispatch without tripping a borrow.
        let subscribers: Vec<(SubscriptionId, Subscriber)> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(id, subscriber)| (id, Rc::clone(subscriber)))
            .collect();
        for (id, subscriber) in subscribers {
            // A nested dispatch already delivered a newer value to everyone.
            if !Rc::ptr_eq(&value, &*self.value.borrow()) {
                break;
            }
            // Removed by an earlier callback in this pass.
            if !self.subscribers.borrow().contains_key(id) {
                continue;
            }
            subscriber(&value);
        }
        result
    }
}

impl Drop for ProviderInner {
    fn drop(&mut self) {
        tracing::debug!("store provider unmounted");
    }
}

#[derive(Clone)]
pub struct StoreProvider {
    inner: Rc<ProviderInner>,
}

impl StoreProvider {
    pub fn new(initial: InitialState) -> Self {
        Self::with_parts(
            &StateDefaults::default(),
            initial,
            Arc::new(DefaultLayoutResolver),
        )
    }

    pub fn with_resolver(initial: InitialState, resolver: Arc<dyn LayoutResolver>) -> Self {
        Self::with_parts(&StateDefaults::default(), initial, resolver)
    }

    pub fn from_settings(settings: &Settings, initial: InitialState) -> Self {
        Self::with_parts(
            &settings.state_defaults(),
            initial,
            Arc::new(DefaultLayoutResolver),
        )
    }

    pub fn with_parts(
        defaults: &StateDefaults,
        initial: InitialState,
        resolver: Arc<dyn LayoutResolver>,
    ) -> Self {
        let state = AppState::seeded(defaults, initial, resolver.as_ref());
        tracing::debug!(repository = %state.active_repository, "store provider mounted");
        let store = Store::new(state, resolver);

        let inner = Rc::new_cyclic(|weak: &Weak<ProviderInner>| {
            let value = Rc::new(StoreValue {
                state: store.snapshot(),
                ops: StoreOps::bound(weak.clone()),
            });
            ProviderInner {
                store: RefCell::new(store),
                value: RefCell::new(value),
                subscribers: RefCell::new(SlotMap::with_key()),
            }
        });
        Self { inner }
    }

    /// Current merged value. Identity only changes when the snapshot does.
    pub fn value(&self) -> Rc<StoreValue> {
        Rc::clone(&*self.inner.value.borrow())
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        self.inner.store.borrow().snapshot()
    }

    pub fn ops(&self) -> StoreOps {
        StoreOps::bound(Rc::downgrade(&self.inner))
    }

    pub fn dispatch(&self, action: Action) -> DispatchResult {
        self.inner.dispatch(action)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Rc<StoreValue>) + 'static,
    {
        self.inner.subscribers.borrow_mut().insert(Rc::new(callback))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.subscribers.borrow_mut().remove(id).is_some()
    }

    /// Applies actions queued by background collaborators, in send order.
    /// Returns how many were applied.
    pub fn drain_bus(&self, rx: &mut KernelBusReceiver) -> usize {
        let messages = rx.drain();
        let count = messages.len();
        for msg in messages {
            match msg {
                KernelMessage::Action(action) => {
                    self.dispatch(action);
                }
            }
        }
        count
    }
}

/// Mutation operations bound to a provider, or detached from any.
///
/// Every method returns whether the call reached a provider. Detached
/// calls log a diagnostic and change nothing.
#[derive(Clone)]
pub struct StoreOps {
    target: Option<Weak<ProviderInner>>,
}

impl StoreOps {
    fn bound(target: Weak<ProviderInner>) -> Self {
        Self {
            target: Some(target),
        }
    }

    pub fn detached() -> Self {
        Self { target: None }
    }

    pub fn is_bound(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| target.strong_count() > 0)
    }

    pub fn update_api_data(
        &self,
        data: impl Into<GraphData>,
        layout: RawLayout,
        repository: impl Into<CompactString>,
    ) -> bool {
        self.dispatch(Action::update_api_data(data, layout, repository))
    }

    pub fn update_layout(&self, layout: RawLayout) -> bool {
        self.dispatch(Action::UpdateLayout(layout))
    }

    /// `None` requests a forced redraw.
    pub fn update_graph(&self, force_redraw: impl Into<Option<bool>>) -> bool {
        self.dispatch(Action::update_graph(force_redraw.into()))
    }

    pub fn set_debug_metrics(&self, metrics: impl Into<MetricsPatch>) -> bool {
        self.dispatch(Action::SetDebugMetrics(metrics.into()))
    }

    fn dispatch(&self, action: Action) -> bool {
        match self.target.as_ref().and_then(Weak::upgrade) {
            Some(inner) => {
                inner.dispatch(action);
                true
            }
            None => {
                tracing::error!(
                    action = action.name(),
                    "store used without a StoreProvider; call ignored"
                );
                false
            }
        }
    }
}

/// Snapshot fields plus the four operations, as handed to views.
pub struct StoreValue {
    state: Arc<AppState>,
    ops: StoreOps,
}

impl StoreValue {
    /// Value seen by views mounted outside any provider: default state,
    /// operations that only log.
    pub fn detached() -> Rc<Self> {
        Rc::new(Self {
            state: Arc::new(AppState::new(&DefaultLayoutResolver)),
            ops: StoreOps::detached(),
        })
    }

    pub fn snapshot(&self) -> &Arc<AppState> {
        &self.state
    }

    pub fn ops(&self) -> &StoreOps {
        &self.ops
    }

    pub fn update_api_data(
        &self,
        data: impl Into<GraphData>,
        layout: RawLayout,
        repository: impl Into<CompactString>,
    ) -> bool {
        self.ops.update_api_data(data, layout, repository)
    }

    pub fn update_layout(&self, layout: RawLayout) -> bool {
        self.ops.update_layout(layout)
    }

    pub fn update_graph(&self, force_redraw: impl Into<Option<bool>>) -> bool {
        self.ops.update_graph(force_redraw)
    }

    pub fn set_debug_metrics(&self, metrics: impl Into<MetricsPatch>) -> bool {
        self.ops.set_debug_metrics(metrics)
    }
}

impl Deref for StoreValue {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.state
    }
}

impl std::fmt::Debug for StoreValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreValue")
            .field("state", &self.state)
            .field("bound", &self.ops.is_bound())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/provider.rs"]
mod tests;
