//! Chart documents
//!
//! A chart is a TOML file describing the parties of a parliament and, optionally,
//! the canvas and transition settings used to draw it:
//!
//! ```toml
//! [layout]
//! width = 600.0
//! inner_radius_coef = 0.4
//!
//! [[parties]]
//! id = "left"
//! fill = "party-1"
//! seats = 42
//!
//! [[parties]]
//! id = "green"
//! fill = "#2ca02c"
//! seats = [{ name = "Ada", size = 1.2 }, { name = "Grace" }]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ChartError;
use crate::layout::config::DEFAULT_INNER_RADIUS_COEF;
use crate::layout::{LayoutConfig, Party};
use crate::renderer::TransitionConfig;

/// Canvas width used when a chart does not set one
pub const DEFAULT_WIDTH: f64 = 600.0;

/// The `[layout]` table of a chart
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartLayout {
    /// Canvas width; the height is always half of it
    pub width: Option<f64>,
    pub inner_radius_coef: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: None,
            inner_radius_coef: DEFAULT_INNER_RADIUS_COEF,
        }
    }
}

/// A parsed chart document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chart {
    #[serde(default)]
    pub layout: ChartLayout,
    #[serde(default)]
    pub transitions: TransitionConfig,
    #[serde(default)]
    pub parties: Vec<Party>,
}

impl Chart {
    /// Load a chart from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ChartError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a chart from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ChartError> {
        Ok(toml::from_str(content)?)
    }

    /// Layout configuration for this chart
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::for_width(self.layout.width.unwrap_or(DEFAULT_WIDTH))
            .with_inner_radius_coef(self.layout.inner_radius_coef)
    }

    /// Override the canvas width
    pub fn with_width(mut self, width: f64) -> Self {
        self.layout.width = Some(width);
        self
    }
}
