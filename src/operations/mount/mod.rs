mod dedup;
mod selector;

pub use dedup::dedup_mounts;
pub use selector::MountSelector;

use rayon::prelude::*;
use tracing::debug;

use crate::config::{RafterGrid, StructuralLimits};
use crate::error::Result;
use crate::geometry::{Mount, Panel};

/// Computes the deduplicated mount points of a panel array.
#[derive(Debug, Clone, Copy)]
pub struct MountCalculator {
    selector: MountSelector,
    merge_distance: f64,
}

impl MountCalculator {
    /// Creates a new `MountCalculator`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the grid or limits are invalid.
    pub fn new(grid: RafterGrid, limits: StructuralLimits) -> Result<Self> {
        grid.validate()?;
        limits.validate()?;
        Ok(Self {
            selector: MountSelector::new(grid, limits),
            merge_distance: limits.mount_merge_distance,
        })
    }

    /// Executes the calculation over every panel.
    ///
    /// Panels without an available rafter contribute no mounts.
    #[must_use]
    pub fn execute(&self, panels: &[Panel]) -> Vec<Mount> {
        let per_panel: Vec<Vec<Mount>> = panels
            .par_iter()
            .map(|panel| self.selector.mounts_for(panel))
            .collect();

        let unsupported = per_panel.iter().filter(|m| m.is_empty()).count();
        let candidates: Vec<Mount> = per_panel.into_iter().flatten().collect();
        let mounts = dedup_mounts(&candidates, self.merge_distance);

        debug!(
            panels = panels.len(),
            unsupported,
            candidates = candidates.len(),
            mounts = mounts.len(),
            "mount calculation finished"
        );
        mounts
    }
}
