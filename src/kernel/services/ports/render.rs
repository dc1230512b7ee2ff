use crate::kernel::layout::LayoutConfig;
use crate::kernel::state::{AppState, GraphData};

/// The slice of state a rendering surface consumes.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub graph_data: &'a GraphData,
    pub layout_config: &'a LayoutConfig,
    pub force_redraw: bool,
    pub is_loading_graph: bool,
}

impl<'a> RenderInput<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        Self {
            graph_data: &state.graph_data,
            layout_config: &state.layout_config,
            force_redraw: state.force_redraw,
            is_loading_graph: state.is_loading_graph,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub nodes: usize,
    pub edges: usize,
}

/// Draws nodes and edges. Failures on malformed payloads are the surface's
/// to report; the store never sees them.
pub trait RenderSurface {
    fn render(&mut self, frame: RenderInput<'_>) -> RenderReport;
}
