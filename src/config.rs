//! Registry configuration
//!
//! Controls where assets are loaded from, how far a key press moves a light,
//! how finely the ground is subdivided and which shading algorithm is bound
//! at startup.

use std::env;

pub const BASE_URL_VAR: &str = "SCENES_BASE_URL";
pub const LIGHT_STEP_VAR: &str = "SCENES_LIGHT_STEP";
pub const SHADING_VAR: &str = "SCENES_SHADING";

/// Shading algorithm bound when nothing else is configured
pub const DEFAULT_SHADING: &str = "gouraud";

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    /// Prefix prepended to every relative asset path
    pub base_url: String,
    /// Distance a light moves per key press
    pub light_step: f32,
    /// Subdivision counts handed to the ground mesh factory
    pub ground_subdivisions: [u32; 2],
    pub shading_algorithm: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            light_step: 1.0,
            ground_subdivisions: [50, 50],
            shading_algorithm: DEFAULT_SHADING.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Reads overrides from the environment, falling back to defaults
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url;
        }

        if let Some(step) = lookup(LIGHT_STEP_VAR) {
            match step.parse::<f32>() {
                Ok(step) if step.is_finite() && step > 0.0 => config.light_step = step,
                _ => log::warn!("Ignoring {}={:?}: expected a positive number", LIGHT_STEP_VAR, step),
            }
        }

        if let Some(shading) = lookup(SHADING_VAR) {
            if shading.is_empty() {
                log::warn!("Ignoring empty {}", SHADING_VAR);
            } else {
                config.shading_algorithm = shading;
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_light_step(mut self, step: f32) -> Self {
        self.light_step = step;
        self
    }

    pub fn with_shading_algorithm(mut self, name: impl Into<String>) -> Self {
        self.shading_algorithm = name.into();
        self
    }

    /// Joins a relative asset path onto the base URL
    pub fn asset_url(&self, relative: &str) -> String {
        let relative = relative.trim_start_matches('/');
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, relative)
        } else {
            format!("{}/{}", self.base_url, relative)
        }
    }
}
