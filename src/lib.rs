//! depviz - headless client core for the dependency graph visualizer.
//!
//! Module layout:
//! - kernel: state, actions, the pure reducer, the store and service ports
//! - app: store provider, view context and the render driver

pub mod app;
pub mod kernel;
