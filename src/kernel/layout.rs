//! Layout intent resolution.
//!
//! Views never build a [`LayoutConfig`] by hand: they hand a [`RawLayout`]
//! to the store, which runs it through a [`LayoutResolver`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLayout {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_overlap: Option<bool>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl RawLayout {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avoid_overlap: None,
            options: Map::new(),
        }
    }

    pub fn with_avoid_overlap(mut self, avoid_overlap: bool) -> Self {
        self.avoid_overlap = Some(avoid_overlap);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl Default for RawLayout {
    fn default() -> Self {
        Self::named(LayoutName::Circle.as_str()).with_avoid_overlap(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutName {
    Circle,
    Grid,
    Concentric,
    Breadthfirst,
    Cose,
    Random,
    Preset,
}

impl LayoutName {
    pub const ALL: [LayoutName; 7] = [
        LayoutName::Circle,
        LayoutName::Grid,
        LayoutName::Concentric,
        LayoutName::Breadthfirst,
        LayoutName::Cose,
        LayoutName::Random,
        LayoutName::Preset,
    ];

    /// Layout used when a requested name is not recognized.
    pub const FALLBACK: LayoutName = LayoutName::Circle;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Grid => "grid",
            Self::Concentric => "concentric",
            Self::Breadthfirst => "breadthfirst",
            Self::Cose => "cose",
            Self::Random => "random",
            Self::Preset => "preset",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for LayoutName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved layout handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub name: LayoutName,
    pub avoid_overlap: bool,
    pub fit: bool,
    pub padding: u32,
    pub animate: bool,
    pub spacing_factor: f64,
    pub directed: bool,
    pub node_dimensions_include_labels: bool,
    /// Options the resolver does not interpret, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutConfig {
    pub fn defaults_for(name: LayoutName) -> Self {
        let base = Self {
            name,
            avoid_overlap: true,
            fit: true,
            padding: 30,
            animate: false,
            spacing_factor: 1.0,
            directed: false,
            node_dimensions_include_labels: false,
            extra: Map::new(),
        };

        match name {
            LayoutName::Breadthfirst => Self {
                directed: true,
                spacing_factor: 1.75,
                ..base
            },
            LayoutName::Concentric => Self {
                spacing_factor: 1.25,
                ..base
            },
            LayoutName::Cose => Self {
                animate: true,
                node_dimensions_include_labels: true,
                ..base
            },
            LayoutName::Preset => Self {
                fit: false,
                ..base
            },
            LayoutName::Circle | LayoutName::Grid | LayoutName::Random => base,
        }
    }

    fn apply_option(&mut self, key: &str, value: &Value) {
        let applied = match key {
            "fit" => value.as_bool().map(|v| self.fit = v),
            "animate" => value.as_bool().map(|v| self.animate = v),
            "directed" => value.as_bool().map(|v| self.directed = v),
            "nodeDimensionsIncludeLabels" => value
                .as_bool()
                .map(|v| self.node_dimensions_include_labels = v),
            "padding" => value
                .as_u64()
                .map(|v| self.padding = u32::try_from(v).unwrap_or(u32::MAX)),
            "spacingFactor" => value
                .as_f64()
                .filter(|v| v.is_finite() && *v > 0.0)
                .map(|v| self.spacing_factor = v),
            _ => {
                self.extra.insert(key.to_string(), value.clone());
                Some(())
            }
        };

        if applied.is_none() {
            tracing::debug!(option = key, value = %value, "ignoring ill-typed layout option");
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        DefaultLayoutResolver.resolve(&RawLayout::default())
    }
}

/// Maps a raw layout intent to a resolved configuration.
///
/// Implementations must be pure: the same intent always resolves to the
/// same configuration, and no intent may fail to resolve.
pub trait LayoutResolver {
    fn resolve(&self, raw: &RawLayout) -> LayoutConfig;
}

impl<F> LayoutResolver for F
where
    F: Fn(&RawLayout) -> LayoutConfig,
{
    fn resolve(&self, raw: &RawLayout) -> LayoutConfig {
        self(raw)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLayoutResolver;

impl LayoutResolver for DefaultLayoutResolver {
    fn resolve(&self, raw: &RawLayout) -> LayoutConfig {
        let name = LayoutName::parse(&raw.name).unwrap_or_else(|| {
            tracing::debug!(
                layout = %raw.name,
                fallback = %LayoutName::FALLBACK,
                "unknown layout name"
            );
            LayoutName::FALLBACK
        });

        let mut config = LayoutConfig::defaults_for(name);
        config.avoid_overlap = raw.avoid_overlap.unwrap_or(true);
        for (key, value) in &raw.options {
            config.apply_option(key, value);
        }
        config
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
