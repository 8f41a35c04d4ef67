#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use panelmount::config::RafterGrid;
use panelmount::{ArrayLayout, Joint, LayoutConfig, LayoutError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn config(spacing: f64, first_x: f64) -> LayoutConfig {
    LayoutConfig::with_rafters(RafterGrid::new(spacing, first_x).unwrap())
}

fn near(joints: &[Joint], x: f64, y: f64) -> Vec<Joint> {
    joints
        .iter()
        .filter(|j| (j.x() - x).abs() < 0.5 && (j.y() - y).abs() < 0.5)
        .copied()
        .collect()
}

#[test]
fn side_by_side_pair_has_one_seam_joint() {
    init_tracing();
    let result = ArrayLayout::from_positions(&[(0.0, 0.0), (45.05, 0.0)], config(16.0, 0.0))
        .execute()
        .unwrap();

    let seam = near(&result.joints, 44.88, 35.55);
    assert_eq!(seam.len(), 1);
    assert_abs_diff_eq!(seam[0].x(), 44.88);
    assert_abs_diff_eq!(seam[0].y(), 35.55);
}

#[test]
fn single_panel_mounts_on_offset_grid() {
    init_tracing();
    let result = ArrayLayout::from_positions(&[(0.0, 0.0)], config(16.0, 10.0))
        .execute()
        .unwrap();

    assert!(!result.mounts.is_empty());
    for m in &result.mounts {
        assert!([10.0, 26.0, 42.0].contains(&m.x()), "x={}", m.x());
        assert!(m.x() >= 2.0 && m.x() <= 42.7);
        assert_abs_diff_eq!(m.y(), 35.55);
    }
    assert!(result.joints.is_empty());
}

#[test]
fn two_by_two_grid_has_one_interior_corner_joint() {
    init_tracing();
    let positions = [(0.0, 0.0), (45.05, 0.0), (0.0, 71.45), (45.05, 71.45)];
    let result = ArrayLayout::from_positions(&positions, config(16.0, 0.0))
        .execute()
        .unwrap();
    let joints = &result.joints;

    // Interior corner: the three detected corners merge into one.
    let interior = near(joints, 44.875, 71.275);
    assert_eq!(interior.len(), 1);

    // The four edge seams.
    assert_eq!(near(joints, 44.88, 35.55).len(), 1);
    assert_eq!(near(joints, 44.88, 107.0).len(), 1);
    assert_eq!(near(joints, 22.35, 71.28).len(), 1);
    assert_eq!(near(joints, 67.4, 71.28).len(), 1);

    // Seam ends on the array perimeter, shared by two panels each.
    assert_eq!(near(joints, 44.7, 0.0).len(), 1);
    assert_eq!(near(joints, 0.0, 71.1).len(), 1);
    assert_eq!(near(joints, 89.75, 71.28).len(), 1);
    assert_eq!(near(joints, 44.88, 142.55).len(), 1);
    assert_eq!(joints.len(), 9);

    let unique: HashSet<Joint> = joints.iter().copied().collect();
    assert_eq!(unique.len(), joints.len());
}

#[test]
fn spacing_wider_than_panel_gives_no_mounts() {
    init_tracing();
    let result = ArrayLayout::from_positions(&[(10.0, 0.0)], config(100.0, 0.0))
        .execute()
        .unwrap();
    assert!(result.mounts.is_empty());
}

#[test]
fn negative_spacing_is_rejected() {
    let mut config = LayoutConfig::default();
    config.rafters.spacing = -1.0;
    let result = ArrayLayout::from_positions(&[(0.0, 0.0)], config).execute();
    assert!(matches!(result, Err(LayoutError::Config(_))));
}

#[test]
fn json_in_json_out() {
    init_tracing();
    let config = LayoutConfig::from_json(r#"{ "rafter_spacing": 16, "first_rafter_x": 10 }"#)
        .unwrap();
    let layout = ArrayLayout::from_json(r#"[{ "x": 0, "y": 0 }, { "x": 45.05, "y": 0 }]"#, config)
        .unwrap();
    let json = layout.execute().unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let mounts = value["mounts"].as_array().unwrap();
    assert!(!mounts.is_empty());
    for m in mounts {
        let x = m["x"].as_f64().unwrap();
        assert!(((x - 10.0) / 16.0 - ((x - 10.0) / 16.0).round()).abs() < 1e-9);
    }
    let joints = value["joints"].as_array().unwrap();
    assert!(joints
        .iter()
        .any(|j| j["x"].as_f64() == Some(44.88) && j["y"].as_f64() == Some(35.55)));
}

#[test]
fn touching_panels_keep_mounts_out_of_clearance_zones() {
    // The shared edge sits at x = 44.7; both clearance zones around it stay empty.
    let result = ArrayLayout::from_positions(&[(0.0, 0.0), (44.7, 0.0)], config(16.0, 0.0))
        .execute()
        .unwrap();
    let xs: Vec<f64> = result.mounts.iter().map(panelmount::Mount::x).collect();
    let unique: HashSet<u64> = xs.iter().map(|x| x.to_bits()).collect();
    assert_eq!(unique.len(), xs.len());
    for x in xs {
        assert!(!(42.7..46.7).contains(&x), "x={x} inside clearance zone");
    }
}
