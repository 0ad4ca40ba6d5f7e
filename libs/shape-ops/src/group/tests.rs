use super::*;
use crate::kernel::OverlayKernel;
use crate::types::{IntPoint, Path};

fn ccw(x0: i64, y0: i64, size: i64) -> Path {
    vec![
        IntPoint::new(x0, y0),
        IntPoint::new(x0 + size, y0),
        IntPoint::new(x0 + size, y0 + size),
        IntPoint::new(x0, y0 + size),
    ]
}

fn cw(x0: i64, y0: i64, size: i64) -> Path {
    let mut path = ccw(x0, y0, size);
    path.reverse();
    path
}

#[test]
fn outer_with_two_holes_then_second_outer() {
    let kernel = OverlayKernel::new();
    let outer_a = ccw(0, 0, 100);
    let hole_1 = cw(10, 10, 10);
    let hole_2 = cw(50, 50, 10);
    let outer_b = ccw(200, 0, 50);

    let groups = group(
        &kernel,
        vec![outer_a.clone(), hole_1.clone(), hole_2.clone(), outer_b.clone()],
    );

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].outer, outer_a);
    assert_eq!(groups[0].holes, vec![hole_1, hole_2]);
    assert_eq!(groups[1].outer, outer_b);
    assert!(groups[1].holes.is_empty());
}

#[test]
fn consecutive_outers_open_separate_groups() {
    let kernel = OverlayKernel::new();
    let groups = group(&kernel, vec![ccw(0, 0, 5), ccw(10, 0, 5), ccw(20, 0, 5)]);
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.holes.is_empty()));
}

#[test]
fn clockwise_first_path_still_opens_a_group() {
    let kernel = OverlayKernel::new();
    let groups = group(&kernel, vec![cw(0, 0, 5), cw(1, 1, 1)]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].outer, cw(0, 0, 5));
    assert_eq!(groups[0].holes.len(), 1);
}

#[test]
fn empty_input_yields_no_groups() {
    assert!(group(&OverlayKernel::new(), Vec::new()).is_empty());
}

#[test]
fn fix_orientation_forces_outer_ccw_and_holes_cw() {
    let kernel = OverlayKernel::new();
    let mut paths = vec![cw(0, 0, 100), ccw(10, 10, 10), cw(50, 50, 10)];
    fix_orientation(&kernel, &mut paths);
    assert_eq!(paths[0], ccw(0, 0, 100));
    assert_eq!(paths[1], cw(10, 10, 10));
    assert_eq!(paths[2], cw(50, 50, 10));
}

#[test]
fn fix_orientation_leaves_canonical_input_untouched() {
    let kernel = OverlayKernel::new();
    let original = vec![ccw(0, 0, 100), cw(10, 10, 10)];
    let mut paths = original.clone();
    fix_orientation(&kernel, &mut paths);
    assert_eq!(paths, original);
}
