use std::collections::HashMap;

use crate::geometry::Mount;
use crate::math::rounding::coord_key;

/// Collapses mounts from neighbouring panels that share a rafter.
///
/// Mounts are grouped by rounded x. Within a group, sorted by y, a mount is
/// kept only if it lies more than `merge_distance` below the previously
/// kept one. Groups are emitted in ascending x.
#[must_use]
pub fn dedup_mounts(mounts: &[Mount], merge_distance: f64) -> Vec<Mount> {
    let mut groups: HashMap<u64, Vec<Mount>> = HashMap::new();
    for mount in mounts {
        groups.entry(coord_key(mount.x())).or_default().push(*mount);
    }

    let mut groups: Vec<Vec<Mount>> = groups.into_values().collect();
    groups.sort_by(|a, b| a[0].x().total_cmp(&b[0].x()));

    let mut result = Vec::with_capacity(mounts.len());
    for mut group in groups {
        group.sort_by(|a, b| a.y().total_cmp(&b.y()));
        let mut last_y: Option<f64> = None;
        for mount in group {
            if last_y.is_some_and(|y| mount.y() - y <= merge_distance) {
                continue;
            }
            last_y = Some(mount.y());
            result.push(mount);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_coincident_mounts_on_one_rafter() {
        let mounts = [
            Mount::new(26.0, 35.55),
            Mount::new(26.0, 35.55),
            Mount::new(26.000_001, 35.9),
        ];
        let result = dedup_mounts(&mounts, 1.0);
        assert_eq!(result, vec![Mount::new(26.0, 35.55)]);
    }

    #[test]
    fn keeps_mounts_further_apart_than_merge_distance() {
        let mounts = [
            Mount::new(26.0, 107.0),
            Mount::new(26.0, 35.55),
            Mount::new(42.0, 35.55),
        ];
        let result = dedup_mounts(&mounts, 1.0);
        assert_eq!(
            result,
            vec![
                Mount::new(26.0, 35.55),
                Mount::new(26.0, 107.0),
                Mount::new(42.0, 35.55),
            ]
        );
    }

    #[test]
    fn merge_is_measured_from_last_kept_mount() {
        // 0.8 apart from each neighbour, 1.6 from the first kept one.
        let mounts = [
            Mount::new(10.0, 10.0),
            Mount::new(10.0, 10.8),
            Mount::new(10.0, 11.6),
        ];
        let result = dedup_mounts(&mounts, 1.0);
        assert_eq!(result, vec![Mount::new(10.0, 10.0), Mount::new(10.0, 11.6)]);
    }

    #[test]
    fn empty_input() {
        assert!(dedup_mounts(&[], 1.0).is_empty());
    }

    #[test]
    fn dedup_is_idempotent() {
        let mounts = [
            Mount::new(16.0, 35.55),
            Mount::new(16.0, 36.0),
            Mount::new(32.0, 35.55),
            Mount::new(32.0, 107.0),
            Mount::new(16.0, 107.35),
        ];
        let once = dedup_mounts(&mounts, 1.0);
        let twice = dedup_mounts(&once, 1.0);
        assert_eq!(once, twice);
    }
}
