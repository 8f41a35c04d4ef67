mod detect;
mod merge;

pub use detect::JointDetector;
pub use merge::merge_joints;

use tracing::debug;

use crate::config::JointTolerances;
use crate::error::Result;
use crate::geometry::{Joint, Panel};

/// Computes the merged joint points of a panel array.
#[derive(Debug, Clone, Copy)]
pub struct JointCalculator {
    detector: JointDetector,
    proximity: f64,
}

impl JointCalculator {
    /// Creates a new `JointCalculator`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the tolerances are invalid.
    pub fn new(tolerances: JointTolerances) -> Result<Self> {
        tolerances.validate()?;
        Ok(Self {
            detector: JointDetector::new(tolerances),
            proximity: tolerances.corner_proximity,
        })
    }

    /// Executes detection and merging over the full panel set.
    #[must_use]
    pub fn execute(&self, panels: &[Panel]) -> Vec<Joint> {
        let candidates = self.detector.candidates(panels);
        let joints = merge_joints(&candidates, self.proximity);
        debug!(
            panels = panels.len(),
            candidates = candidates.len(),
            joints = joints.len(),
            "joint calculation finished"
        );
        joints
    }
}
