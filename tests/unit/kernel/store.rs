use super::*;
use crate::kernel::layout::{LayoutConfig, LayoutName, RawLayout};
use crate::kernel::metrics::{MetricsPatch, FPS};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;

fn new_store() -> Store {
    Store::with_default_resolver(AppState::new(&DefaultLayoutResolver))
}

#[test]
fn dispatch_commits_a_new_snapshot() {
    let mut store = new_store();
    let before = store.snapshot();

    let result = store.dispatch(Action::update_api_data(
        json!({"n": []}),
        RawLayout::named("grid"),
        "org/repo",
    ));

    assert!(result.state_changed);
    let after = store.snapshot();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.active_repository, "moul/depviz-test");
    assert_eq!(after.active_repository, "org/repo");
    assert_eq!(after.layout_config.name, LayoutName::Grid);
}

#[test]
fn unchanged_state_keeps_the_snapshot() {
    let mut store = new_store();
    let before = store.snapshot();

    let result = store.dispatch(Action::update_graph(Some(false)));

    assert!(!result.state_changed);
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn nan_metric_does_not_make_every_dispatch_a_change() {
    let mut store = new_store();
    assert!(
        store
            .dispatch(Action::SetDebugMetrics(MetricsPatch::from([(FPS, f64::NAN)])))
            .state_changed
    );
    let before = store.snapshot();

    let result = store.dispatch(Action::update_graph(Some(false)));
    assert!(!result.state_changed);
    assert!(Arc::ptr_eq(&before, &store.snapshot()));

    let result = store.dispatch(Action::SetDebugMetrics(MetricsPatch::from([(FPS, f64::NAN)])));
    assert!(!result.state_changed);
}

#[test]
fn held_snapshots_never_change() {
    let mut store = new_store();
    let held = store.snapshot();

    store.dispatch(Action::SetDebugMetrics(MetricsPatch::from([(FPS, 60.0)])));
    store.dispatch(Action::update_graph(None));

    assert_eq!(held.debug_metrics.fps(), 0.0);
    assert!(!held.force_redraw);
    assert_eq!(store.state().debug_metrics.fps(), 60.0);
    assert!(store.state().force_redraw);
}

#[test]
fn calls_apply_in_order_on_the_latest_snapshot() {
    let mut store = new_store();
    store.dispatch(Action::update_graph(None));
    store.dispatch(Action::UpdateLayout(RawLayout::named("cose")));

    // The layout update saw the forced redraw and reset it.
    assert!(!store.state().force_redraw);
    assert!(store.state().is_loading_graph);
    assert_eq!(store.state().layout_config.name, LayoutName::Cose);
}

#[test]
fn store_uses_its_resolver() {
    let calls = Rc::new(Cell::new(0));
    let counted = Rc::clone(&calls);
    let resolver = move |_: &RawLayout| {
        counted.set(counted.get() + 1);
        LayoutConfig::defaults_for(LayoutName::Concentric)
    };
    let mut store = Store::new(AppState::new(&DefaultLayoutResolver), Arc::new(resolver));

    store.dispatch(Action::UpdateLayout(RawLayout::named("grid")));

    assert_eq!(calls.get(), 1);
    assert_eq!(store.state().layout_config.name, LayoutName::Concentric);
    assert_eq!(
        store.resolver().resolve(&RawLayout::named("x")).name,
        LayoutName::Concentric
    );
}
