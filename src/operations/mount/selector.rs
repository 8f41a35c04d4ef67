use tracing::trace;

use crate::config::{RafterGrid, StructuralLimits};
use crate::geometry::{Mount, Panel};
use crate::math::interval::Interval;
use crate::math::TOLERANCE;

/// 2^53. From here on `k + 1.0` may equal `k`.
const MAX_EXACT_INDEX: f64 = 9_007_199_254_740_992.0;

/// Chooses the rafter crossings a single panel is fastened to.
///
/// The selection is a left-to-right greedy scan over the rafters that fall
/// inside the panel's clearance-reduced span. Rafters are evenly spaced and
/// the span and cantilever constraints are monotonic in position, so the
/// scan never needs to revisit an earlier choice.
#[derive(Debug, Clone, Copy)]
pub struct MountSelector {
    grid: RafterGrid,
    limits: StructuralLimits,
}

impl MountSelector {
    /// Creates a selector for an already validated grid and limits.
    #[must_use]
    pub fn new(grid: RafterGrid, limits: StructuralLimits) -> Self {
        Self { grid, limits }
    }

    /// The x-range a mount may occupy on `panel`.
    #[must_use]
    pub fn usable_range(&self, panel: &Panel) -> Interval {
        Interval::new(
            panel.x() + self.limits.edge_clearance,
            panel.right_edge() - self.limits.edge_clearance,
        )
    }

    /// Every rafter x inside the panel's usable range, ascending.
    ///
    /// Only rafters with a non-negative index are considered. A grid whose
    /// origin is so far from the panel that neighbouring rafter indices are
    /// no longer distinct `f64` values yields no rafters.
    #[must_use]
    pub fn available_rafters(&self, panel: &Panel) -> Vec<f64> {
        let usable = self.usable_range(panel);
        if usable.is_inverted() {
            return Vec::new();
        }

        let lo = usable.start - TOLERANCE;
        let hi = usable.end + TOLERANCE;
        let k_start = ((lo - self.grid.first_x) / self.grid.spacing).ceil().max(0.0);
        let k_end = ((hi - self.grid.first_x) / self.grid.spacing).floor();
        if !k_start.is_finite() || !k_end.is_finite() || k_end < k_start {
            return Vec::new();
        }
        if k_end >= MAX_EXACT_INDEX {
            trace!(
                x = panel.x(),
                first_x = self.grid.first_x,
                "rafter indices beyond f64 integer precision"
            );
            return Vec::new();
        }

        let mut rafters = Vec::new();
        let mut k = k_start;
        while k <= k_end {
            let x = self.grid.rafter_x(k);
            if (lo..=hi).contains(&x) {
                rafters.push(x);
            }
            k += 1.0;
        }
        rafters
    }

    /// Selects the minimal set of rafters satisfying the span and
    /// cantilever limits, ascending.
    ///
    /// The first available rafter is always taken. A later rafter is taken
    /// when it is already more than a span from the last selection, when
    /// skipping it would put the next available rafter beyond the span
    /// limit, or when it is the last chance to keep the right overhang
    /// within the cantilever limit.
    #[must_use]
    pub fn select_rafters(&self, panel: &Panel) -> Vec<f64> {
        let available = self.available_rafters(panel);
        let Some((&first, rest)) = available.split_first() else {
            trace!(x = panel.x(), y = panel.y(), "no rafter inside usable range");
            return Vec::new();
        };

        let span = self.limits.span_limit;
        let cantilever = self.limits.cantilever_limit;
        let right = panel.right_edge();

        let mut selected = vec![first];
        let mut last = first;
        for (i, &candidate) in rest.iter().enumerate() {
            let needed = match rest.get(i + 1) {
                Some(&next) => next - last > span,
                None => right - last > cantilever,
            };
            if needed || candidate - last > span {
                selected.push(candidate);
                last = candidate;
            }
        }

        if right - last > cantilever {
            if let Some(&final_rafter) = available.last() {
                if final_rafter > last {
                    trace!(x = final_rafter, "forcing last rafter for cantilever");
                    selected.push(final_rafter);
                }
            }
        }

        selected.sort_by(f64::total_cmp);
        selected
    }

    /// One mount per selected rafter at the panel's vertical center.
    #[must_use]
    pub fn mounts_for(&self, panel: &Panel) -> Vec<Mount> {
        let y = panel.center_y();
        self.select_rafters(panel)
            .into_iter()
            .map(|x| Mount::new(x, y))
            .collect()
    }
}
