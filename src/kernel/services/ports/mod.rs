//! Service ports: traits + data contracts.

pub mod api;
pub mod dialog;
pub mod render;
pub mod settings;

pub use api::{add_metadata_path, assign_path, github_login, ApiClient, ApiError, IssueTarget};
pub use dialog::{AssignDialog, DialogSubmit, MetadataDialog};
pub use render::{RenderInput, RenderReport, RenderSurface};
pub use settings::Settings;
