use std::collections::{BTreeMap, VecDeque};
use std::time::{Duration, Instant};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

pub const FPS: &str = "fps";
pub const NODES: &str = "nodes";
pub const EDGES: &str = "edges";
pub const OPENED_ISSUES: &str = "openedIssues";
pub const CLOSED_ISSUES: &str = "closedIssues";
pub const PRS_ISSUES: &str = "prsIssues";
pub const EXT_DEPS_ISSUES: &str = "extDepsIssues";

pub const DEFAULT_COUNTERS: [&str; 7] = [
    FPS,
    NODES,
    EDGES,
    OPENED_ISSUES,
    CLOSED_ISSUES,
    PRS_ISSUES,
    EXT_DEPS_ISSUES,
];

/// Named diagnostic counters. Only ever updated by merging a [`MetricsPatch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebugMetrics {
    values: BTreeMap<CompactString, f64>,
}

impl Default for DebugMetrics {
    fn default() -> Self {
        Self {
            values: DEFAULT_COUNTERS
                .into_iter()
                .map(|name| (CompactString::from(name), 0.0))
                .collect(),
        }
    }
}

/// Values compare by bit pattern, so a stored `NaN` equals itself and an
/// unchanged snapshot stays unchanged.
impl PartialEq for DebugMetrics {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|((ka, va), (kb, vb))| ka == kb && va.to_bits() == vb.to_bits())
    }
}

impl DebugMetrics {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn fps(&self) -> f64 {
        self.get(FPS).unwrap_or(0.0)
    }

    pub fn nodes(&self) -> f64 {
        self.get(NODES).unwrap_or(0.0)
    }

    pub fn edges(&self) -> f64 {
        self.get(EDGES).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Shallow merge: keys in `patch` overwrite, all others are kept.
    pub fn merge(&mut self, patch: &MetricsPatch) {
        for (name, value) in patch.iter() {
            self.values.insert(CompactString::from(name), value);
        }
    }

    pub fn merged(&self, patch: &MetricsPatch) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }
}

/// A subset of metric values to merge into [`DebugMetrics`].
///
/// Entries keep insertion order; when a name repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsPatch {
    entries: Vec<(CompactString, f64)>,
}

impl MetricsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<CompactString>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<CompactString>, value: f64) {
        self.entries.push((name.into(), value));
    }

    pub fn extend(&mut self, other: MetricsPatch) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<CompactString>> FromIterator<(K, f64)> for MetricsPatch {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<CompactString>, const N: usize> From<[(K, f64); N]> for MetricsPatch {
    fn from(entries: [(K, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Rolling frames-per-second estimate over a fixed time window.
#[derive(Debug, Clone)]
pub struct FrameCounter {
    window: Duration,
    frames: VecDeque<Instant>,
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl FrameCounter {
    pub fn new(window: Duration) -> Self {
        Self {
            window: window.max(Duration::from_millis(1)),
            frames: VecDeque::new(),
        }
    }

    /// Records a frame at `now` and returns the current estimate.
    pub fn tick(&mut self, now: Instant) -> f64 {
        if self.frames.back().is_some_and(|last| now < *last) {
            // Out-of-order sample: restart the window.
            self.frames.clear();
        }
        self.frames.push_back(now);
        while let Some(first) = self.frames.front() {
            if now.duration_since(*first) > self.window {
                self.frames.pop_front();
            } else {
                break;
            }
        }
        self.fps()
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let span = last.duration_since(*first).as_secs_f64();
        if self.frames.len() < 2 || span <= 0.0 {
            return 0.0;
        }
        (self.frames.len() - 1) as f64 / span
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/metrics.rs"]
mod tests;
