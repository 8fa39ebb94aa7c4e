//! Example data configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Controls whether the sample employees are applied at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed an empty store with the sample employees on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
}

impl ExampleDataSettings {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
