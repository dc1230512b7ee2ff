//! Statistics derived from a depviz graph payload.
//!
//! The payload is opaque to the store; this module reads it leniently
//! (missing or ill-typed fields count as absent) to feed the debug counters.

use rustc_hash::FxHashSet;
use serde_json::Value;

use super::metrics::{
    MetricsPatch, CLOSED_ISSUES, EDGES, EXT_DEPS_ISSUES, NODES, OPENED_ISSUES, PRS_ISSUES,
};

const TASKS: &str = "tasks";
const DEPENDENCY_FIELDS: [&str; 2] = ["is_depending_on", "is_blocking"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Issue,
    MergeRequest,
    Milestone,
}

impl TaskKind {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("MergeRequest") => Self::MergeRequest,
            Some("Milestone") => Self::Milestone,
            _ => Self::Issue,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub opened_issues: usize,
    pub closed_issues: usize,
    pub prs_issues: usize,
    /// Distinct dependency targets that are not part of the payload.
    pub ext_deps_issues: usize,
}

impl GraphStats {
    pub fn from_value(value: &Value) -> Self {
        let Some(tasks) = value.get(TASKS).and_then(Value::as_array) else {
            return Self::default();
        };

        let known: FxHashSet<&str> = tasks
            .iter()
            .filter_map(|task| task.get("id").and_then(Value::as_str))
            .collect();
        let mut external: FxHashSet<&str> = FxHashSet::default();
        let mut stats = Self {
            nodes: tasks.len(),
            ..Self::default()
        };

        for task in tasks {
            match TaskKind::parse(task.get("kind").and_then(Value::as_str)) {
                TaskKind::MergeRequest => stats.prs_issues += 1,
                TaskKind::Milestone => {}
                TaskKind::Issue => match task.get("state").and_then(Value::as_str) {
                    Some(state) if state.eq_ignore_ascii_case("open") => {
                        stats.opened_issues += 1
                    }
                    Some(state) if state.eq_ignore_ascii_case("closed") => {
                        stats.closed_issues += 1
                    }
                    _ => {}
                },
            }

            for field in DEPENDENCY_FIELDS {
                let Some(targets) = task.get(field).and_then(Value::as_array) else {
                    continue;
                };
                for target in targets.iter().filter_map(Value::as_str) {
                    stats.edges += 1;
                    if !known.contains(target) {
                        external.insert(target);
                    }
                }
            }
        }

        stats.ext_deps_issues = external.len();
        stats
    }

    pub fn to_patch(&self) -> MetricsPatch {
        MetricsPatch::new()
            .with(NODES, self.nodes as f64)
            .with(EDGES, self.edges as f64)
            .with(OPENED_ISSUES, self.opened_issues as f64)
            .with(CLOSED_ISSUES, self.closed_issues as f64)
            .with(PRS_ISSUES, self.prs_issues as f64)
            .with(EXT_DEPS_ISSUES, self.ext_deps_issues as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/graph.rs"]
mod tests;
