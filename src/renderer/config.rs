//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Padding around the hemicycle canvas
    pub padding: f64,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "hc-" for "hc-seat")
    pub class_prefix: Option<String>,

    /// Emit a `<title>` for seats whose member record has a `name`
    pub member_titles: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            padding: 0.0,
            standalone: true,
            pretty_print: true,
            class_prefix: None,
            member_titles: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Set whether member names become seat titles
    pub fn with_member_titles(mut self, titles: bool) -> Self {
        self.member_titles = titles;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.padding, 0.0);
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, None);
        assert!(config.member_titles);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_padding(10.0)
            .with_standalone(false)
            .with_pretty_print(false)
            .with_class_prefix("hc-")
            .with_member_titles(false);

        assert_eq!(config.padding, 10.0);
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, Some("hc-".to_string()));
        assert!(!config.member_titles);
    }
}
