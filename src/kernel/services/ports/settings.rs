use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::kernel::layout::RawLayout;
use crate::kernel::state::{StateDefaults, DEFAULT_REPOSITORY};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_repository")]
    pub default_repository: String,
    #[serde(default)]
    pub default_layout: RawLayout,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_repository() -> String {
    DEFAULT_REPOSITORY.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_repository: default_repository(),
            default_layout: RawLayout::default(),
            api_base: default_api_base(),
        }
    }
}

impl Settings {
    pub fn state_defaults(&self) -> StateDefaults {
        let repository = self.default_repository.trim();
        StateDefaults {
            repository: if repository.is_empty() {
                CompactString::from(DEFAULT_REPOSITORY)
            } else {
                CompactString::from(repository)
            },
            layout: self.default_layout.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
