use serde_json::Value;

use super::api::{add_metadata_path, assign_path, ApiClient, ApiError, IssueTarget};

/// Submit side of a modal dialog. Dialogs talk to the API collaborator and
/// hand the outcome back to the panel; they never touch store state.
pub trait DialogSubmit {
    fn submit(&self, target: &IssueTarget, input: &str) -> Result<Value, ApiError>;
}

pub struct AssignDialog<'a, C: ApiClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: ApiClient + ?Sized> AssignDialog<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

impl<C: ApiClient + ?Sized> DialogSubmit for AssignDialog<'_, C> {
    fn submit(&self, target: &IssueTarget, input: &str) -> Result<Value, ApiError> {
        let assignee = input.trim().trim_start_matches('@');
        if assignee.is_empty() {
            return Err(ApiError::EmptyInput { field: "assignee" });
        }
        let path = assign_path(target, assignee);
        tracing::info!(%path, "assign issue");
        self.client.request(&path)
    }
}

pub struct MetadataDialog<'a, C: ApiClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: ApiClient + ?Sized> MetadataDialog<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

impl<C: ApiClient + ?Sized> DialogSubmit for MetadataDialog<'_, C> {
    fn submit(&self, target: &IssueTarget, input: &str) -> Result<Value, ApiError> {
        let metadata = input.trim();
        if metadata.is_empty() {
            return Err(ApiError::EmptyInput { field: "metadata" });
        }
        let path = add_metadata_path(target, metadata);
        tracing::info!(%path, "add issue metadata");
        self.client.request(&path)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/dialog.rs"]
mod tests;
