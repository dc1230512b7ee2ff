use std::time::Instant;

use crate::kernel::metrics::{EDGES, FPS, NODES};
use crate::kernel::services::ports::{RenderInput, RenderReport, RenderSurface};
use crate::kernel::{FrameCounter, GraphStats, MetricsPatch};

use super::provider::StoreValue;

/// Drives one render pass from `value` and publishes the frame's metrics.
///
/// A consumed forced redraw is cleared afterwards. Metrics are merged with
/// a single `set_debug_metrics` call per frame.
pub fn render_frame(
    value: &StoreValue,
    surface: &mut dyn RenderSurface,
    counter: &mut FrameCounter,
    now: Instant,
) -> RenderReport {
    let input = RenderInput::from_state(value);
    let forced = input.force_redraw;
    let report = surface.render(input);
    let fps = counter.tick(now);

    if forced {
        value.update_graph(false);
    }

    let mut patch = GraphStats::from_value(value.graph_data.as_value()).to_patch();
    patch.extend(
        MetricsPatch::new()
            .with(FPS, fps)
            .with(NODES, report.nodes as f64)
            .with(EDGES, report.edges as f64),
    );
    value.set_debug_metrics(patch);

    report
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;
