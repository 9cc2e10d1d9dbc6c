//! Cell/coordinate conversions and coincidence predicates shared by every
//! stage that reasons about relative coordinates.

use smallvec::SmallVec;

use crate::geometry::coordinate::Coordinate;
use crate::geometry::grid::{Axis, Cell, Grid};
use crate::geometry::tolerance::APPROX_DIR_TOLERANCE;

/// True if `a` and `b` differ by less than [`APPROX_DIR_TOLERANCE`].
#[inline]
pub fn approx_dir(a: f64, b: f64) -> bool {
  (a - b).abs() < APPROX_DIR_TOLERANCE
}

/// Floors each relative component to obtain the cell it lies in. A relative
/// lying exactly on plane `k` belongs to cell `k` for `k` < last cell index,
/// otherwise the last cell (boundary clamp), matching the half-open
/// `[plane_k, plane_{k+1})` convention except at the domain's upper edge.
pub fn to_cell(grid: &Grid, relative: Coordinate) -> Cell {
  let mut out = [0i64; 3];
  for axis in Axis::ALL {
    let max_cell = (grid.cell_count(axis) - 1) as i64;
    let floored = relative.component(axis.index()).floor() as i64;
    out[axis.index()] = floored.clamp(0, max_cell);
  }
  Cell(out)
}

/// The exact integer-valued relative at `cell`'s lower corner.
pub fn to_relative(cell: Cell) -> Coordinate {
  Coordinate::new(cell.0[0] as f64, cell.0[1] as f64, cell.0[2] as f64)
}

/// True iff exactly two of the three components of `relative` lie on a grid
/// plane (i.e. are integer-valued within tolerance): the point is on a cell
/// edge, not a face or corner.
pub fn is_relative_in_cell_edge(relative: Coordinate) -> bool {
  on_plane_axes(relative).len() == 2
}

/// For a relative known to lie on a cell edge, returns the one axis along
/// which it varies (is not on a plane).
///
/// Panics if `relative` is not on exactly one cell edge; callers must check
/// [`is_relative_in_cell_edge`] first.
pub fn get_cell_edge_axis(relative: Coordinate) -> Axis {
  let on_plane = on_plane_axes(relative);
  assert_eq!(
    on_plane.len(),
    2,
    "get_cell_edge_axis requires a point on exactly one cell edge"
  );
  for axis in Axis::ALL {
    if !on_plane.contains(&axis) {
      return axis;
    }
  }
  unreachable!()
}

fn on_plane_axes(relative: Coordinate) -> SmallVec<[Axis; 3]> {
  Axis::ALL
    .into_iter()
    .filter(|&axis| {
      let c = relative.component(axis.index());
      approx_dir(c, c.round())
    })
    .collect()
}

/// Up to 8 cells sharing `relative`: a corner point touches 8, an edge point
/// 4, a face point 2, and an interior point just 1.
pub fn get_touching_cells(grid: &Grid, relative: Coordinate) -> SmallVec<[Cell; 8]> {
  let base = to_cell(grid, relative);
  let mut candidates: SmallVec<[Cell; 8]> = SmallVec::new();
  candidates.push(base);

  for axis in Axis::ALL {
    let c = relative.component(axis.index());
    if !approx_dir(c, c.round()) {
      continue;
    }
    let max_cell = (grid.cell_count(axis) - 1) as i64;
    let on_plane_index = c.round() as i64;
    let lower = (on_plane_index - 1).clamp(0, max_cell);
    let upper = on_plane_index.clamp(0, max_cell);
    if lower == upper {
      continue;
    }
    let mut next: SmallVec<[Cell; 8]> = SmallVec::new();
    for cell in candidates.iter() {
      next.push(cell.with_component(axis, lower));
      next.push(cell.with_component(axis, upper));
    }
    next.sort();
    next.dedup();
    candidates = next;
  }
  candidates
}

#[cfg(test)]
#[path = "grid_tools_test.rs"]
mod grid_tools_test;
