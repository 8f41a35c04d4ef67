use serde::Serialize;
use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::{Joint, Mount, Panel};
use crate::input::panels_from_json;

use super::joint::JointCalculator;
use super::mount::MountCalculator;

/// Mount and joint points computed for one panel array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutResult {
    pub mounts: Vec<Mount>,
    pub joints: Vec<Joint>,
}

impl LayoutResult {
    /// Renders the result as pretty-printed JSON with rounded coordinates.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Serialization` if rendering fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LayoutError::Serialization(e.to_string()))
    }
}

/// Computes mount and joint points for a panel array.
///
/// The two pipelines are independent; the configuration is validated
/// before either runs.
#[derive(Debug)]
pub struct ArrayLayout {
    panels: Vec<Panel>,
    config: LayoutConfig,
}

impl ArrayLayout {
    /// Creates a new layout operation.
    #[must_use]
    pub fn new(panels: Vec<Panel>, config: LayoutConfig) -> Self {
        Self { panels, config }
    }

    /// Creates a layout from top-left corners, sized by `config.panel`.
    #[must_use]
    pub fn from_positions(positions: &[(f64, f64)], config: LayoutConfig) -> Self {
        let panels = positions
            .iter()
            .map(|&(x, y)| Panel::new(x, y, config.panel))
            .collect();
        Self::new(panels, config)
    }

    /// Creates a layout from a JSON list of `{ "x", "y" }` records.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the records are malformed, or `ConfigError`
    /// if the panel size is invalid.
    pub fn from_json(json: &str, config: LayoutConfig) -> Result<Self> {
        let panels = panels_from_json(json, config.panel)?;
        Ok(Self::new(panels, config))
    }

    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Executes both calculations.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any part of the configuration is invalid.
    /// Geometric degeneracies such as panels without rafters or isolated
    /// panels are not errors.
    pub fn execute(&self) -> Result<LayoutResult> {
        self.config.validate()?;
        let mounts = MountCalculator::new(self.config.rafters, self.config.limits)?;
        let joints = JointCalculator::new(self.config.tolerances)?;

        debug!(
            panels = self.panels.len(),
            rafter_spacing = self.config.rafters.spacing,
            first_rafter_x = self.config.rafters.first_x,
            "computing panel layout"
        );

        let (mounts, joints) = rayon::join(
            || mounts.execute(&self.panels),
            || joints.execute(&self.panels),
        );
        Ok(LayoutResult { mounts, joints })
    }
}
