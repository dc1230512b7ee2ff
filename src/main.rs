//! depviz: load a graph payload into a store and render one headless frame.
//!
//! Usage: depviz [GRAPH_JSON] [REPOSITORY] [LAYOUT]

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use depviz::app::{render_frame, StoreProvider, ViewContext};
use depviz::kernel::services::adapters::{ensure_settings_file, load_settings};
use depviz::kernel::services::kernel_bus;
use depviz::kernel::services::ports::{RenderInput, RenderReport, RenderSurface};
use depviz::kernel::{Action, FrameCounter, GraphStats, InitialState, RawLayout};

/// Surface that only logs what it would draw.
struct LogSurface;

impl RenderSurface for LogSurface {
    fn render(&mut self, frame: RenderInput<'_>) -> RenderReport {
        let stats = GraphStats::from_value(frame.graph_data.as_value());
        tracing::info!(
            layout = %frame.layout_config.name,
            force_redraw = frame.force_redraw,
            loading = frame.is_loading_graph,
            nodes = stats.nodes,
            edges = stats.edges,
            "render pass"
        );
        RenderReport {
            nodes: stats.nodes,
            edges: stats.edges,
        }
    }
}

fn main() -> ExitCode {
    let logging = logging::init();
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    let settings = load_settings().unwrap_or_default();

    let mut args = std::env::args().skip(1);
    let graph_path = args.next().map(PathBuf::from);
    let repository = args
        .next()
        .unwrap_or_else(|| settings.default_repository.clone());
    let layout = args
        .next()
        .map(RawLayout::named)
        .unwrap_or_else(|| settings.default_layout.clone());

    let provider = StoreProvider::from_settings(&settings, InitialState::default());
    let root = ViewContext::root().with_provider(provider.clone());
    let subscription = provider.subscribe(|value| {
        tracing::debug!(
            repository = %value.active_repository,
            loading = value.is_loading_graph,
            force_redraw = value.force_redraw,
            "snapshot committed"
        );
    });

    if let Some(path) = graph_path {
        root.use_store().update_layout(layout.clone());

        let (tx, mut rx) = kernel_bus();
        let fetch = std::thread::spawn(move || -> Result<(), String> {
            let text = std::fs::read_to_string(&path)
                .map_err(|err| format!("read {}: {err}", path.display()))?;
            let data: serde_json::Value = serde_json::from_str(&text)
                .map_err(|err| format!("parse {}: {err}", path.display()))?;
            tx.send_action(Action::update_api_data(data, layout, repository))
                .map_err(|err| err.to_string())
        });

        match fetch.join() {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::error!(error = %err, "graph fetch failed");
                eprintln!("depviz: {err}");
                return ExitCode::FAILURE;
            }
            Err(_) => {
                eprintln!("depviz: fetch thread panicked");
                return ExitCode::FAILURE;
            }
        }
        provider.drain_bus(&mut rx);
    }

    let mut counter = FrameCounter::default();
    let view = root.child().use_store();
    let report = render_frame(&view, &mut LogSurface, &mut counter, Instant::now());
    provider.unsubscribe(subscription);

    let value = root.use_store();
    println!("repository: {}", value.active_repository);
    println!("layout:     {}", value.layout_config.name);
    println!("nodes:      {}", report.nodes);
    println!("edges:      {}", report.edges);
    println!("metrics:");
    for (name, metric) in value.debug_metrics.iter() {
        println!("  {name:<14} {metric}");
    }
    if let Some(guard) = &logging {
        println!("logs:       {}", guard.log_dir().display());
    }
    ExitCode::SUCCESS
}
