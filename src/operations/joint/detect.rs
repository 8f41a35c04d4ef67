use rayon::prelude::*;

use crate::config::JointTolerances;
use crate::geometry::Panel;
use crate::math::Point2;

/// Finds joint candidates between panels.
///
/// Three independent passes: horizontal edge adjacency, vertical edge
/// adjacency and shared corners. Candidates are unmerged; the same physical
/// joint may appear several times.
#[derive(Debug, Clone, Copy)]
pub struct JointDetector {
    tolerances: JointTolerances,
}

impl JointDetector {
    /// Creates a detector for already validated tolerances.
    #[must_use]
    pub fn new(tolerances: JointTolerances) -> Self {
        Self { tolerances }
    }

    /// Candidates from all three passes, in pass order.
    #[must_use]
    pub fn candidates(&self, panels: &[Panel]) -> Vec<Point2> {
        let mut all = self.horizontal_candidates(panels);
        all.extend(self.vertical_candidates(panels));
        all.extend(self.corner_candidates(panels));
        all
    }

    /// One candidate per horizontally adjacent pair, midway between the
    /// facing edges at the middle of the vertical overlap.
    #[must_use]
    pub fn horizontal_candidates(&self, panels: &[Panel]) -> Vec<Point2> {
        Self::pairwise(panels, |a, b| self.horizontal_joint(a, b))
    }

    /// One candidate per vertically adjacent pair, midway between the
    /// facing edges at the middle of the horizontal overlap.
    #[must_use]
    pub fn vertical_candidates(&self, panels: &[Panel]) -> Vec<Point2> {
        Self::pairwise(panels, |a, b| self.vertical_joint(a, b))
    }

    /// Top-right, bottom-left and bottom-right corners that at least
    /// `min_corner_panels` panels (the owner included) have a corner near.
    ///
    /// Top-left corners are never tested, so the ends of one seam can come
    /// out unevenly: for a side-by-side pair the top end stays at the left
    /// panel's corner (44.7, 0) while the bottom end merges to (44.88, 71.1).
    #[must_use]
    pub fn corner_candidates(&self, panels: &[Panel]) -> Vec<Point2> {
        panels
            .par_iter()
            .flat_map_iter(move |panel| {
                let [_, top_right, bottom_left, bottom_right] = panel.corners();
                [top_right, bottom_left, bottom_right]
                    .into_iter()
                    .filter(move |corner| {
                        self.panels_sharing(panels, corner) >= self.tolerances.min_corner_panels
                    })
            })
            .collect()
    }

    fn panels_sharing(&self, panels: &[Panel], corner: &Point2) -> usize {
        panels
            .iter()
            .filter(|p| p.has_corner_near(corner, self.tolerances.corner_proximity))
            .count()
    }

    fn horizontal_joint(&self, a: &Panel, b: &Panel) -> Option<Point2> {
        if !a.is_horizontally_adjacent(b, self.tolerances.max_gap) {
            return None;
        }
        let (left, right) = if a.x() <= b.x() { (a, b) } else { (b, a) };
        let overlap = a.y_range().intersection(&b.y_range())?;
        Some(Point2::new(
            0.5 * (left.right_edge() + right.x()),
            overlap.midpoint(),
        ))
    }

    fn vertical_joint(&self, a: &Panel, b: &Panel) -> Option<Point2> {
        if !a.is_vertically_adjacent(b, self.tolerances.max_gap) {
            return None;
        }
        let (upper, lower) = if a.y() <= b.y() { (a, b) } else { (b, a) };
        let overlap = a.x_range().intersection(&b.x_range())?;
        Some(Point2::new(
            overlap.midpoint(),
            0.5 * (upper.bottom_edge() + lower.y()),
        ))
    }

    /// Applies `joint` to every unordered pair, keeping input order.
    fn pairwise<F>(panels: &[Panel], joint: F) -> Vec<Point2>
    where
        F: Fn(&Panel, &Panel) -> Option<Point2> + Sync,
    {
        let joint = &joint;
        (0..panels.len())
            .into_par_iter()
            .flat_map_iter(move |i| {
                panels[i + 1..]
                    .iter()
                    .filter_map(move |other| joint(&panels[i], other))
            })
            .collect()
    }
}
