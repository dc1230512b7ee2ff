use compact_str::CompactString;

use crate::kernel::layout::RawLayout;
use crate::kernel::metrics::MetricsPatch;
use crate::kernel::state::GraphData;

#[derive(Debug, Clone)]
pub enum Action {
    UpdateApiData {
        data: GraphData,
        layout: RawLayout,
        repository: CompactString,
    },
    UpdateLayout(RawLayout),
    UpdateGraph {
        force_redraw: bool,
    },
    SetDebugMetrics(MetricsPatch),
}

impl Action {
    pub fn update_api_data(
        data: impl Into<GraphData>,
        layout: RawLayout,
        repository: impl Into<CompactString>,
    ) -> Self {
        Self::UpdateApiData {
            data: data.into(),
            layout,
            repository: repository.into(),
        }
    }

    /// `None` requests a forced redraw.
    pub fn update_graph(force_redraw: Option<bool>) -> Self {
        Self::UpdateGraph {
            force_redraw: force_redraw.unwrap_or(true),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateApiData { .. } => "update_api_data",
            Self::UpdateLayout(_) => "update_layout",
            Self::UpdateGraph { .. } => "update_graph",
            Self::SetDebugMetrics(_) => "set_debug_metrics",
        }
    }
}
