use std::sync::Arc;

use compact_str::CompactString;
use serde_json::{Map, Value};

use super::layout::{LayoutConfig, LayoutResolver, RawLayout};
use super::metrics::{DebugMetrics, MetricsPatch};

pub const DEFAULT_REPOSITORY: &str = "moul/depviz-test";

/// Raw graph payload as delivered by the API collaborator.
///
/// Shared behind an `Arc`: snapshots clone it freely and it is only ever
/// replaced as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphData(Arc<Value>);

impl GraphData {
    pub fn new(value: Value) -> Self {
        Self(Arc::new(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        match self.0.as_ref() {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn ptr_eq(&self, other: &GraphData) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for GraphData {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()))
    }
}

impl From<Value> for GraphData {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub graph_data: GraphData,
    pub is_loading_graph: bool,
    pub layout_config: LayoutConfig,
    pub active_repository: CompactString,
    pub force_redraw: bool,
    pub debug_metrics: DebugMetrics,
}

/// Defaults an [`AppState`] falls back to for fields the caller leaves unset.
#[derive(Debug, Clone, PartialEq)]
pub struct StateDefaults {
    pub repository: CompactString,
    pub layout: RawLayout,
}

impl Default for StateDefaults {
    fn default() -> Self {
        Self {
            repository: CompactString::from(DEFAULT_REPOSITORY),
            layout: RawLayout::default(),
        }
    }
}

/// Caller-supplied seed; every field is optional.
#[derive(Debug, Clone, Default)]
pub struct InitialState {
    pub graph_data: Option<GraphData>,
    pub is_loading_graph: Option<bool>,
    pub layout: Option<RawLayout>,
    pub active_repository: Option<CompactString>,
    pub force_redraw: Option<bool>,
    pub debug_metrics: Option<MetricsPatch>,
}

impl InitialState {
    pub fn with_graph_data(mut self, data: impl Into<GraphData>) -> Self {
        self.graph_data = Some(data.into());
        self
    }

    pub fn with_loading_graph(mut self, loading: bool) -> Self {
        self.is_loading_graph = Some(loading);
        self
    }

    pub fn with_layout(mut self, layout: RawLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_repository(mut self, repository: impl Into<CompactString>) -> Self {
        self.active_repository = Some(repository.into());
        self
    }

    pub fn with_force_redraw(mut self, force_redraw: bool) -> Self {
        self.force_redraw = Some(force_redraw);
        self
    }

    pub fn with_debug_metrics(mut self, metrics: impl Into<MetricsPatch>) -> Self {
        self.debug_metrics = Some(metrics.into());
        self
    }
}

impl AppState {
    pub fn new(resolver: &dyn LayoutResolver) -> Self {
        Self::seeded(&StateDefaults::default(), InitialState::default(), resolver)
    }

    /// Layers `initial` over `defaults`. The layout is always resolved, even
    /// when supplied by the caller.
    pub fn seeded(
        defaults: &StateDefaults,
        initial: InitialState,
        resolver: &dyn LayoutResolver,
    ) -> Self {
        let layout = initial.layout.as_ref().unwrap_or(&defaults.layout);
        let mut debug_metrics = DebugMetrics::default();
        if let Some(patch) = &initial.debug_metrics {
            debug_metrics.merge(patch);
        }

        Self {
            graph_data: initial.graph_data.unwrap_or_default(),
            is_loading_graph: initial.is_loading_graph.unwrap_or(false),
            layout_config: resolver.resolve(layout),
            active_repository: initial
                .active_repository
                .unwrap_or_else(|| defaults.repository.clone()),
            force_redraw: initial.force_redraw.unwrap_or(false),
            debug_metrics,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
