//! Headless application core (state/action/reducer/store).

pub mod action;
pub mod graph;
pub mod layout;
pub mod metrics;
pub mod reducer;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use graph::{GraphStats, TaskKind};
pub use layout::{DefaultLayoutResolver, LayoutConfig, LayoutName, LayoutResolver, RawLayout};
pub use metrics::{DebugMetrics, FrameCounter, MetricsPatch};
pub use reducer::reduce;
pub use state::{AppState, GraphData, InitialState, StateDefaults, DEFAULT_REPOSITORY};
pub use store::{DispatchResult, Store};
