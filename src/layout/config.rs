//! Configuration for the layout engine

use super::LayoutError;

/// Default ratio of the empty inner radius to the outer radius
pub const DEFAULT_INNER_RADIUS_COEF: f64 = 0.4;

/// Configuration options for layout computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Radius of the outermost edge of the hemicycle
    pub outer_radius: f64,

    /// Inner (empty) radius as a fraction of the outer radius
    pub inner_radius_coef: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            outer_radius: 100.0,
            inner_radius_coef: DEFAULT_INNER_RADIUS_COEF,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration filling a canvas of the given width.
    ///
    /// The canvas height is always `width / 2`, so the outer radius is half the width.
    pub fn for_width(width: f64) -> Self {
        Self::default().with_outer_radius(width / 2.0)
    }

    /// Set the outer radius
    pub fn with_outer_radius(mut self, radius: f64) -> Self {
        self.outer_radius = radius;
        self
    }

    /// Set the inner radius coefficient
    pub fn with_inner_radius_coef(mut self, coef: f64) -> Self {
        self.inner_radius_coef = coef;
        self
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius * self.inner_radius_coef
    }

    /// Width of the canvas that exactly contains the hemicycle
    pub fn width(&self) -> f64 {
        self.outer_radius * 2.0
    }

    /// Height of the canvas, always derived from the width
    pub fn height(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check both radii, returning the first problem found
    pub fn validate(&self) -> Result<(), LayoutError> {
        let coef = self.inner_radius_coef;
        if !(coef > 0.0 && coef < 1.0) {
            return Err(LayoutError::InvalidInnerRadiusCoef { coef });
        }
        if !(self.outer_radius.is_finite() && self.outer_radius > 0.0) {
            return Err(LayoutError::InvalidOuterRadius {
                radius: self.outer_radius,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.outer_radius, 100.0);
        assert_eq!(config.inner_radius_coef, 0.4);
        assert_eq!(config.inner_radius(), 40.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::for_width(600.0).with_inner_radius_coef(0.25);
        assert_eq!(config.outer_radius, 300.0);
        assert_eq!(config.height(), 300.0);
        assert_eq!(config.inner_radius(), 75.0);
    }

    #[test]
    fn test_validate() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert!(matches!(
            LayoutConfig::default().with_inner_radius_coef(0.0).validate(),
            Err(LayoutError::InvalidInnerRadiusCoef { .. })
        ));
        assert!(matches!(
            LayoutConfig::default().with_inner_radius_coef(f64::NAN).validate(),
            Err(LayoutError::InvalidInnerRadiusCoef { .. })
        ));
        assert!(matches!(
            LayoutConfig::default().with_outer_radius(-1.0).validate(),
            Err(LayoutError::InvalidOuterRadius { .. })
        ));
    }
}
