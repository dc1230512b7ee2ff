//! Application layer: store lifecycle and the view-facing contract.

pub mod context;
pub mod provider;
pub mod render;

pub use context::ViewContext;
pub use provider::{StoreOps, StoreProvider, StoreValue, SubscriptionId};
pub use render::render_frame;
