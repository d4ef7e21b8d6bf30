//! Service configuration, read from the host's settings store.

use ert_editor_lang::SettingsStore;
use serde::{Deserialize, Serialize};

use crate::plot::PlotOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionOptions {
    /// Insert `${n:label}` snippets instead of bare labels.
    pub snippets: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self { snippets: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub completion: CompletionOptions,
    pub plot: PlotOptions,
}

impl ServiceConfig {
    /// Section key in the settings store.
    pub const SETTINGS_KEY: &'static str = "ert.services";

    /// Read the configuration, falling back to defaults when the section is absent or
    /// malformed.
    pub fn from_settings(store: &dyn SettingsStore) -> Self {
        let Some(value) = store.get(Self::SETTINGS_KEY) else {
            return Self::default();
        };
        serde_json::from_value(value).unwrap_or_else(|err| {
            log::warn!("ignoring malformed `{}` settings: {err}", Self::SETTINGS_KEY);
            Self::default()
        })
    }

    pub fn store(&self, store: &dyn SettingsStore) -> Result<(), serde_json::Error> {
        store.set(Self::SETTINGS_KEY, serde_json::to_value(self)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::PlotTheme;
    use ert_editor_lang::MemorySettings;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_settings(&MemorySettings::new());
        assert!(config.completion.snippets);
        assert_eq!(config.plot.width, 235);
        assert_eq!(config.plot.height, 235);
        assert_eq!(config.plot.theme, PlotTheme::Light);
    }

    #[test]
    fn test_partial_section() {
        let store = MemorySettings::new();
        store.set(
            ServiceConfig::SETTINGS_KEY,
            json!({ "plot": { "theme": "dark" } }),
        );
        let config = ServiceConfig::from_settings(&store);
        assert_eq!(config.plot.theme, PlotTheme::Dark);
        assert_eq!(config.plot.samples, 100);
        assert!(config.completion.snippets);
    }

    #[test]
    fn test_malformed_section_falls_back() {
        let store = MemorySettings::new();
        store.set(ServiceConfig::SETTINGS_KEY, json!({ "completion": 3 }));
        assert_eq!(ServiceConfig::from_settings(&store), ServiceConfig::default());
    }

    #[test]
    fn test_store_round_trip() {
        let store = MemorySettings::new();
        let config = ServiceConfig {
            completion: CompletionOptions { snippets: false },
            ..ServiceConfig::default()
        };
        config.store(&store).unwrap();
        assert_eq!(ServiceConfig::from_settings(&store), config);
    }
}
