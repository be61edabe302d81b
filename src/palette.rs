//! Palette system for party colors
//!
//! Party fills may name a symbolic color token (`party-3`, `accent`) instead of a
//! concrete CSS color. A palette resolves those tokens; anything it does not know is
//! treated as a literal color and passed through unchanged.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A palette mapping symbolic colors to concrete values
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Default palette: eight well separated party colors and a few neutrals
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
party-1 = "#d62728"
party-2 = "#ff7f0e"
party-3 = "#bcbd22"
party-4 = "#2ca02c"
party-5 = "#17becf"
party-6 = "#1f77b4"
party-7 = "#9467bd"
party-8 = "#8c564b"

accent = "#2196f3"
neutral = "#999999"
vacant = "#e0e0e0"
background = "#ffffff"
"##;

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from TOML string
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this palette.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a party fill to the color to draw
    ///
    /// Fallback order:
    /// 1. This palette
    /// 2. The default palette
    /// 3. The fill itself, taken as a literal CSS color
    pub fn fill_for(&self, fill: &str) -> String {
        if let Some(color) = self.resolve(fill) {
            return color.to_string();
        }
        if let Some(color) = Self::default().resolve(fill) {
            return color.to_string();
        }
        fill.to_string()
    }

    /// Merge another palette on top of this one
    pub fn with_overrides(mut self, other: &Palette) -> Self {
        for (token, color) in &other.colors {
            self.colors.insert(token.clone(), color.clone());
        }
        if other.name.is_some() {
            self.name = other.name.clone();
        }
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
