use super::*;
use crate::geometry::Axis;

fn square() -> Vec<Coordinate> {
  vec![
    Coordinate::new(0.0, 0.0, 0.0),
    Coordinate::new(2.0, 0.0, 0.0),
    Coordinate::new(2.0, 2.0, 0.0),
    Coordinate::new(0.0, 2.0, 0.0),
  ]
}

#[test]
fn clip_below_keeps_left_half_as_a_rectangle() {
  let clipped = clip_halfspace(&square(), Axis::X, 1.0, true);
  assert_eq!(clipped.len(), 4);
  assert!(clipped.iter().all(|c| c.x() <= 1.0 + 1e-12));
}

#[test]
fn clip_above_keeps_right_half() {
  let clipped = clip_halfspace(&square(), Axis::X, 1.0, false);
  assert_eq!(clipped.len(), 4);
  assert!(clipped.iter().all(|c| c.x() >= 1.0 - 1e-12));
}

#[test]
fn clip_entirely_inside_is_unchanged_in_count() {
  let clipped = clip_halfspace(&square(), Axis::X, 5.0, true);
  assert_eq!(clipped.len(), 4);
}

#[test]
fn clip_entirely_outside_is_empty() {
  let clipped = clip_halfspace(&square(), Axis::X, -5.0, true);
  assert!(clipped.is_empty());
}
