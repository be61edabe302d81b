//! Hemicycle - parliament seating charts
//!
//! This library computes the seat layout of a parliament hemicycle: how many
//! concentric rows are needed, where every seat sits, and which party (and member)
//! holds it. A renderer turns the layout into SVG, optionally animating the change
//! from an earlier layout.
//!
//! # Example
//!
//! ```rust
//! use hemicycle::{compute, LayoutConfig, Party};
//!
//! let parties = vec![Party::new("A", "red", 3), Party::new("B", "blue", 2)];
//! let layout = compute(&parties, &LayoutConfig::default()).unwrap();
//!
//! assert_eq!(layout.seats.len(), 5);
//! assert_eq!(layout.seats[0].class_name(), "seat A");
//! ```

pub mod chart;
pub mod error;
pub mod layout;
pub mod palette;
pub mod renderer;

pub use chart::Chart;
pub use error::ChartError;
pub use layout::{
    compute, compute_with_total, Layout, LayoutConfig, LayoutError, Member, Party, PartySeats, Seat,
};
pub use palette::Palette;
pub use renderer::{render_svg, render_transition_svg, SvgConfig, TransitionConfig};

use log::{debug, warn};
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while reading a chart
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error while serializing a layout
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Palette for party fill resolution
    pub palette: Palette,
    /// Canvas width overriding the one in the chart
    pub width: Option<f64>,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the palette for fill resolution
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Override the canvas width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    fn load_chart(&self, source: &str) -> Result<Chart, ChartError> {
        let chart = Chart::from_str(source)?;
        Ok(match self.width {
            Some(width) => chart.with_width(width),
            None => chart,
        })
    }
}

/// Render a chart to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use hemicycle::render;
///
/// let svg = render(r##"
///     [[parties]]
///     id = "left"
///     fill = "#d62728"
///     seats = 4
///
///     [[parties]]
///     id = "right"
///     fill = "#1f77b4"
///     seats = 3
/// "##).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("seat left"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render a chart to SVG with custom configuration
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let chart = config.load_chart(source)?;
    let layout = compute(&chart.parties, &chart.layout_config())?;
    debug!(
        "laid out {} seats in {} rows (row width {})",
        layout.len(),
        layout.rows.len(),
        layout.row_width
    );

    Ok(render_svg(&layout, &config.svg, &config.palette))
}

/// Compute a chart's layout and serialize it as pretty-printed JSON
pub fn render_json(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let chart = config.load_chart(source)?;
    let layout = compute(&chart.parties, &chart.layout_config())?;
    Ok(serde_json::to_string_pretty(&layout)?)
}

/// Render the animated change from one chart to another
///
/// Canvas size and transition policy come from the new chart. A previous chart
/// without any seats makes every seat enter.
pub fn render_transition(
    previous_source: &str,
    source: &str,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let previous = config.load_chart(previous_source)?;
    let chart = config.load_chart(source)?;
    let layout_config = chart.layout_config();

    let layout = compute(&chart.parties, &layout_config)?;
    let before = if layout::types::total_seats(&previous.parties) == 0 {
        warn!("previous chart has no seats; every seat will enter");
        None
    } else {
        Some(compute(&previous.parties, &previous.layout_config())?)
    };
    let previous_seats = before.as_ref().map(|l| l.seats()).unwrap_or_default();

    let plan = renderer::plan_transitions(previous_seats, layout.seats(), &chart.transitions);
    Ok(render_transition_svg(
        &plan,
        &layout_config,
        &config.svg,
        &config.palette,
    ))
}
