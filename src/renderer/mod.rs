//! SVG renderer for seat layouts
//!
//! This module takes a computed [`Layout`](crate::layout::Layout) and draws it as SVG.
//! It also plans and renders animated transitions between two layouts.

pub mod config;
pub mod svg;
pub mod transition;

pub use config::SvgConfig;
pub use svg::{render_svg, render_transition_svg};
pub use transition::{
    plan_transitions, EnterStyle, ExitStyle, Phase, TransitionConfig, TransitionPlan, UpdateStyle,
};
