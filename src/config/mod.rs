//! Layout configuration: rafter grid, panel size, structural limits and
//! joint tolerances.
//!
//! Every structural constant is a named default here and travels into the
//! calculators through these structs, so alternate structural codes can be
//! evaluated without touching the algorithms.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default distance between consecutive rafters.
pub const DEFAULT_RAFTER_SPACING: f64 = 16.0;

/// Default x-coordinate of the first rafter.
pub const DEFAULT_FIRST_RAFTER_X: f64 = 0.0;

/// Default panel width.
pub const DEFAULT_PANEL_WIDTH: f64 = 44.7;

/// Default panel height.
pub const DEFAULT_PANEL_HEIGHT: f64 = 71.1;

/// Minimum distance between a mount and either vertical panel edge.
pub const EDGE_CLEARANCE: f64 = 2.0;

/// Maximum unsupported overhang from the outermost mount to the panel edge.
pub const CANTILEVER_LIMIT: f64 = 16.0;

/// Maximum distance between two consecutive mounts on one panel.
pub const SPAN_LIMIT: f64 = 48.0;

/// Mounts on one rafter closer than this are one physical fastener.
pub const MOUNT_MERGE_DISTANCE: f64 = 1.0;

/// Panels closer than this along an axis are adjacent.
pub const MAX_ADJACENCY_GAP: f64 = 1.0;

/// Corners closer than this in both axes are coincident.
pub const CORNER_PROXIMITY: f64 = 0.5;

/// Number of panels that must meet at a corner for it to be a joint.
pub const MIN_CORNER_PANELS: usize = 2;

fn require_finite(parameter: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { parameter, value })
    }
}

fn require_positive(parameter: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    require_finite(parameter, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { parameter, value })
    }
}

/// An evenly spaced progression of rafter lines at
/// `first_x + k * spacing` for `k >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RafterGrid {
    #[serde(rename = "rafter_spacing")]
    pub spacing: f64,
    #[serde(rename = "first_rafter_x")]
    pub first_x: f64,
}

impl Default for RafterGrid {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_RAFTER_SPACING,
            first_x: DEFAULT_FIRST_RAFTER_X,
        }
    }
}

impl RafterGrid {
    /// Creates a validated rafter grid.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `spacing` is not a positive finite number or
    /// `first_x` is not finite.
    pub fn new(spacing: f64, first_x: f64) -> Result<Self> {
        let grid = Self { spacing, first_x };
        grid.validate()?;
        Ok(grid)
    }

    /// Checks the grid parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        require_positive("rafter_spacing", self.spacing)?;
        require_finite("first_rafter_x", self.first_x)?;
        Ok(())
    }

    /// X-coordinate of rafter `k`.
    #[must_use]
    pub fn rafter_x(&self, k: f64) -> f64 {
        self.first_x + k * self.spacing
    }

    /// Returns `true` if `x` lies on a rafter line within `tolerance`.
    #[must_use]
    pub fn is_on_rafter(&self, x: f64, tolerance: f64) -> bool {
        let k = ((x - self.first_x) / self.spacing).round();
        k >= 0.0 && (self.rafter_x(k) - x).abs() <= tolerance
    }
}

/// Width and height shared by every panel of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PanelSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_PANEL_WIDTH,
            height: DEFAULT_PANEL_HEIGHT,
        }
    }
}

impl PanelSize {
    /// Creates a validated panel size.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either dimension is not a positive finite number.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Checks both dimensions.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid dimension.
    pub fn validate(&self) -> Result<()> {
        require_positive("panel_width", self.width)?;
        require_positive("panel_height", self.height)?;
        Ok(())
    }
}

/// Structural limits applied by the mount selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralLimits {
    pub edge_clearance: f64,
    pub cantilever_limit: f64,
    pub span_limit: f64,
    /// Mounts on a shared rafter closer than this collapse to one.
    pub mount_merge_distance: f64,
}

impl Default for StructuralLimits {
    fn default() -> Self {
        Self {
            edge_clearance: EDGE_CLEARANCE,
            cantilever_limit: CANTILEVER_LIMIT,
            span_limit: SPAN_LIMIT,
            mount_merge_distance: MOUNT_MERGE_DISTANCE,
        }
    }
}

impl StructuralLimits {
    /// Checks every limit.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the clearance is negative, another limit is
    /// not positive, or any limit is not finite.
    pub fn validate(&self) -> Result<()> {
        require_finite("edge_clearance", self.edge_clearance)?;
        if self.edge_clearance < 0.0 {
            return Err(ConfigError::Negative {
                parameter: "edge_clearance",
                value: self.edge_clearance,
            }
            .into());
        }
        require_positive("cantilever_limit", self.cantilever_limit)?;
        require_positive("span_limit", self.span_limit)?;
        require_positive("mount_merge_distance", self.mount_merge_distance)?;
        Ok(())
    }
}

/// Gap and proximity thresholds applied by the joint calculators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointTolerances {
    pub max_gap: f64,
    pub corner_proximity: f64,
    pub min_corner_panels: usize,
}

impl Default for JointTolerances {
    fn default() -> Self {
        Self {
            max_gap: MAX_ADJACENCY_GAP,
            corner_proximity: CORNER_PROXIMITY,
            min_corner_panels: MIN_CORNER_PANELS,
        }
    }
}

impl JointTolerances {
    /// Checks every tolerance.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a threshold is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        require_positive("max_gap", self.max_gap)?;
        require_positive("corner_proximity", self.corner_proximity)?;
        if self.min_corner_panels < 2 {
            return Err(ConfigError::BelowMinimum {
                parameter: "min_corner_panels",
                value: self.min_corner_panels,
                min: 2,
            }
            .into());
        }
        Ok(())
    }
}

/// Complete configuration for one layout run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    #[serde(flatten)]
    pub rafters: RafterGrid,
    pub panel: PanelSize,
    pub limits: StructuralLimits,
    pub tolerances: JointTolerances,
}

impl LayoutConfig {
    /// Creates a configuration with the given rafter grid and defaults elsewhere.
    #[must_use]
    pub fn with_rafters(rafters: RafterGrid) -> Self {
        Self {
            rafters,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` for unparsable JSON, or the first
    /// validation failure of the parsed values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        self.rafters.validate()?;
        self.panel.validate()?;
        self.limits.validate()?;
        self.tolerances.validate()?;
        Ok(())
    }
}
