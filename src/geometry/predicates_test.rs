use super::*;

#[test]
fn area_of_right_triangle() {
  let a = Coordinate::new(0.0, 0.0, 0.0);
  let b = Coordinate::new(1.0, 0.0, 0.0);
  let c = Coordinate::new(0.0, 1.0, 0.0);
  assert!((area(a, b, c) - 0.5).abs() < 1e-12);
}

#[test]
fn degenerate_collinear_triangle_has_zero_area() {
  let a = Coordinate::new(0.0, 0.0, 0.0);
  let b = Coordinate::new(1.0, 0.0, 0.0);
  let c = Coordinate::new(2.0, 0.0, 0.0);
  assert!(is_degenerate(a, b, c, 1e-12));
}

#[test]
fn normal_of_xy_triangle_points_along_z() {
  let a = Coordinate::new(0.0, 0.0, 0.0);
  let b = Coordinate::new(1.0, 0.0, 0.0);
  let c = Coordinate::new(0.0, 1.0, 0.0);
  let n = normal(a, b, c);
  assert!((n.z().abs() - 1.0).abs() < 1e-12);
}

#[test]
fn approximately_aligned_ignores_normal_direction() {
  let a0 = Coordinate::new(0.0, 0.0, 0.0);
  let a1 = Coordinate::new(1.0, 0.0, 0.0);
  let a2 = Coordinate::new(0.0, 1.0, 0.0);
  // reversed winding: opposite normal, same plane
  let b0 = Coordinate::new(0.0, 0.0, 0.0);
  let b1 = Coordinate::new(0.0, 1.0, 0.0);
  let b2 = Coordinate::new(1.0, 0.0, 0.0);
  assert!(approximately_aligned(a0, a1, a2, b0, b1, b2, 1e-6));
  assert!(!approximately_oriented_aligned(a0, a1, a2, b0, b1, b2, 1e-6));
}

#[test]
fn collinear_points_detected() {
  let pts = vec![
    Coordinate::new(0.0, 0.0, 0.0),
    Coordinate::new(1.0, 1.0, 1.0),
    Coordinate::new(2.0, 2.0, 2.0),
  ];
  assert!(are_collinear(&pts));
  let not_collinear = vec![
    Coordinate::new(0.0, 0.0, 0.0),
    Coordinate::new(1.0, 0.0, 0.0),
    Coordinate::new(0.0, 1.0, 0.0),
  ];
  assert!(!are_collinear(&not_collinear));
}
