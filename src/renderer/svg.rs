//! SVG generation from seat layouts

use std::collections::HashMap;

use crate::layout::{Layout, LayoutConfig};
use crate::palette::Palette;

use super::transition::{CircleState, Phase, TransitionPlan};
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> &str {
        self.config.class_prefix.as_deref().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Prefix the leading `seat` token of a seat class name
    fn seat_class(&self, class_name: &str) -> String {
        format!("{}{}", self.prefix(), class_name)
    }

    /// Add a seat circle, optionally with a title and animation children
    pub fn add_seat(
        &mut self,
        class_name: &str,
        state: CircleState,
        fill: &str,
        title: Option<&str>,
        children: &[String],
    ) {
        let title = title.filter(|_| self.config.member_titles);
        let open = format!(
            r#"{}<circle class="{}" cx="{}" cy="{}" r="{}" fill="{}""#,
            self.indent_str(),
            escape_xml(&self.seat_class(class_name)),
            fmt_num(state.cx),
            fmt_num(state.cy),
            fmt_num(state.r),
            escape_xml(fill),
        );

        if title.is_none() && children.is_empty() {
            self.elements.push(format!("{}/>", open));
            return;
        }

        self.elements.push(format!("{}>", open));
        self.indent += 1;
        if let Some(title) = title {
            self.elements
                .push(format!("{}<title>{}</title>", self.indent_str(), escape_xml(title)));
        }
        for child in children {
            self.elements.push(format!("{}{}", self.indent_str(), child));
        }
        self.indent -= 1;
        self.elements.push(format!("{}</circle>", self.indent_str()));
    }

    /// Open the group holding all seats, centered on the hemicycle origin
    pub fn start_parliament(&mut self, center_x: f64, center_y: f64) {
        self.elements.push(format!(
            r#"{}<g class="{}parliament" transform="translate({},{})">"#,
            self.indent_str(),
            self.prefix(),
            fmt_num(center_x),
            fmt_num(center_y)
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string for a canvas of the given size
    pub fn build(self, width: f64, height: f64) -> String {
        let padding = self.config.padding;
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            fmt_num(width + 2.0 * padding),
            fmt_num(height + 2.0 * padding),
            fmt_num(-padding),
            fmt_num(-padding),
            fmt_num(width + 2.0 * padding),
            fmt_num(height + 2.0 * padding)
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Resolves party fills once per distinct fill
struct FillCache<'p> {
    palette: &'p Palette,
    resolved: HashMap<String, String>,
}

impl<'p> FillCache<'p> {
    fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            resolved: HashMap::new(),
        }
    }

    fn get(&mut self, fill: &str) -> String {
        if let Some(color) = self.resolved.get(fill) {
            return color.clone();
        }
        let color = self.palette.fill_for(fill);
        self.resolved.insert(fill.to_string(), color.clone());
        color
    }
}

/// Render a layout to a static SVG string
pub fn render_svg(layout: &Layout<'_>, config: &SvgConfig, palette: &Palette) -> String {
    let width = layout.outer_radius * 2.0;
    let mut builder = SvgBuilder::new(config.clone());
    let mut fills = FillCache::new(palette);

    builder.start_parliament(width / 2.0, layout.outer_radius);
    for seat in layout.seats() {
        let fill = fills.get(seat.fill());
        let title = seat.member.and_then(|m| m.name());
        builder.add_seat(&seat.class_name(), CircleState::of(seat), &fill, title, &[]);
    }
    builder.end_group();

    builder.build(width, layout.outer_radius)
}

/// Render a transition plan as an SVG with SMIL animations.
///
/// Seats start in their `from` state and animate to `to`; exiting seats are hidden
/// once their animation ends.
pub fn render_transition_svg(
    plan: &TransitionPlan,
    layout_config: &LayoutConfig,
    config: &SvgConfig,
    palette: &Palette,
) -> String {
    let width = layout_config.width();
    let mut builder = SvgBuilder::new(config.clone());
    let mut fills = FillCache::new(palette);
    let dur = format!("{}ms", plan.duration_ms);

    builder.start_parliament(width / 2.0, layout_config.outer_radius);
    for t in &plan.transitions {
        let mut children = Vec::new();
        if t.animated {
            let attrs = [
                ("cx", t.from.cx, t.to.cx),
                ("cy", t.from.cy, t.to.cy),
                ("r", t.from.r, t.to.r),
            ];
            for (name, from, to) in attrs {
                if from != to {
                    children.push(format!(
                        r#"<animate attributeName="{}" from="{}" to="{}" dur="{}" fill="freeze"/>"#,
                        name,
                        fmt_num(from),
                        fmt_num(to),
                        dur
                    ));
                }
            }
        }
        if t.phase == Phase::Exit {
            children.push(format!(
                r#"<set attributeName="visibility" to="hidden" begin="{}"/>"#,
                dur
            ));
        }
        let fill = fills.get(&t.fill);
        builder.add_seat(&t.class_name, t.from, &fill, t.title.as_deref(), &children);
    }
    builder.end_group();

    builder.build(width, layout_config.height())
}

/// Format a coordinate with at most three decimals
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid printing "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
