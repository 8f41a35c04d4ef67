use std::collections::HashSet;

use crate::geometry::Joint;
use crate::math::{Point2, Vector2};

/// Clusters near-coincident joint candidates into single joints.
///
/// Single pass, seeded: each candidate not yet clustered becomes a seed and
/// absorbs every later unclustered candidate within `proximity` of the seed
/// in both axes. Membership is measured against the seed only, so a chain
/// of points whose neighbours are close but whose ends are far apart may
/// split into several clusters. Each cluster becomes one joint at the mean
/// of its members; joints equal after rounding are emitted once.
///
/// Merging the output again returns it unchanged only while every pair of
/// output joints is at least `proximity` apart in some axis. Cluster means
/// can land closer than that, for instance when panels overlap, and a
/// second merge then collapses them further.
#[must_use]
pub fn merge_joints(candidates: &[Point2], proximity: f64) -> Vec<Joint> {
    let mut clustered = vec![false; candidates.len()];
    let mut seen = HashSet::new();
    let mut joints = Vec::new();

    for (i, seed) in candidates.iter().enumerate() {
        if clustered[i] {
            continue;
        }
        clustered[i] = true;

        let mut sum: Vector2 = seed.coords;
        let mut members = 1.0;
        for (j, other) in candidates.iter().enumerate().skip(i + 1) {
            if clustered[j] || !is_near(seed, other, proximity) {
                continue;
            }
            clustered[j] = true;
            sum += other.coords;
            members += 1.0;
        }

        let joint = Joint::from(Point2::from(sum / members));
        if seen.insert(joint) {
            joints.push(joint);
        }
    }

    joints
}

fn is_near(a: &Point2, b: &Point2, proximity: f64) -> bool {
    (a.x - b.x).abs() < proximity && (a.y - b.y).abs() < proximity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_collapses_to_mean() {
        let candidates = [
            Point2::new(44.7, 71.1),
            Point2::new(45.05, 71.1),
            Point2::new(44.7, 71.45),
        ];
        let joints = merge_joints(&candidates, 0.5);
        assert_eq!(joints, vec![Joint::new(44.816_666, 71.216_666)]);
    }

    #[test]
    fn distant_candidates_stay_separate() {
        let candidates = [Point2::new(0.0, 0.0), Point2::new(0.5, 0.0)];
        assert_eq!(merge_joints(&candidates, 0.5).len(), 2);
    }

    #[test]
    fn chains_are_not_merged_transitively() {
        // Each neighbour is 0.4 apart; the ends are 0.8 apart.
        let candidates = [
            Point2::new(0.0, 0.0),
            Point2::new(0.4, 0.0),
            Point2::new(0.8, 0.0),
        ];
        let joints = merge_joints(&candidates, 0.5);
        assert_eq!(joints, vec![Joint::new(0.2, 0.0), Joint::new(0.8, 0.0)]);
    }

    #[test]
    fn exact_duplicates_collapse() {
        let p = Point2::new(22.35, 71.275);
        assert_eq!(merge_joints(&[p, p, p], 0.5).len(), 1);
    }

    #[test]
    fn empty_input() {
        assert!(merge_joints(&[], 0.5).is_empty());
    }

    #[test]
    fn merge_of_separated_joints_is_idempotent() {
        let candidates = [
            Point2::new(44.875, 35.55),
            Point2::new(44.7, 71.1),
            Point2::new(45.05, 71.1),
            Point2::new(22.35, 71.275),
        ];
        let once = merge_joints(&candidates, 0.5);
        let raw: Vec<Point2> = once.iter().map(Joint::raw).collect();
        let twice = merge_joints(&raw, 0.5);
        assert_eq!(once, twice);
    }

    #[test]
    fn close_cluster_means_merge_again() {
        let candidates = [
            Point2::new(0.0, 0.0),
            Point2::new(0.48, 0.0),
            Point2::new(0.6, 0.0),
        ];
        let once = merge_joints(&candidates, 0.5);
        assert_eq!(once, vec![Joint::new(0.24, 0.0), Joint::new(0.6, 0.0)]);

        let raw: Vec<Point2> = once.iter().map(Joint::raw).collect();
        let twice = merge_joints(&raw, 0.5);
        assert_eq!(twice, vec![Joint::new(0.42, 0.0)]);
    }
}
