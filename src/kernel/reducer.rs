use super::action::Action;
use super::layout::LayoutResolver;
use super::state::AppState;

/// Pure state transition: the only place an [`AppState`] is derived from
/// another. `state` is never modified; the result is a fresh value.
pub fn reduce(state: &AppState, action: Action, resolver: &dyn LayoutResolver) -> AppState {
    match action {
        Action::UpdateApiData {
            data,
            layout,
            repository,
        } => AppState {
            graph_data: data,
            active_repository: repository,
            layout_config: resolver.resolve(&layout),
            force_redraw: false,
            is_loading_graph: false,
            ..state.clone()
        },
        Action::UpdateLayout(layout) => AppState {
            layout_config: resolver.resolve(&layout),
            is_loading_graph: true,
            force_redraw: false,
            ..state.clone()
        },
        Action::UpdateGraph { force_redraw } => AppState {
            force_redraw,
            ..state.clone()
        },
        Action::SetDebugMetrics(patch) => AppState {
            debug_metrics: state.debug_metrics.merged(&patch),
            ..state.clone()
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/reducer.rs"]
mod tests;
