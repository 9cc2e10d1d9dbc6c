//! `Grid`, `Cell`, `Axis` and `Surfel`: the rectilinear lattice every mesh in
//! this crate is bound to.

use crate::error::{MeshError, MeshResult};
use crate::geometry::coordinate::Coordinate;

/// One of the three Cartesian axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
  X = 0,
  Y = 1,
  Z = 2,
}

impl Axis {
  pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  pub fn from_index(i: usize) -> Axis {
    match i {
      0 => Axis::X,
      1 => Axis::Y,
      2 => Axis::Z,
      _ => panic!("axis index out of range: {i}"),
    }
  }
}

/// Integer triple indexing a grid cell by its lower corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(pub [i64; 3]);

impl Cell {
  pub fn new(x: i64, y: i64, z: i64) -> Self {
    Self([x, y, z])
  }

  pub fn component(&self, axis: Axis) -> i64 {
    self.0[axis.index()]
  }

  pub fn with_component(&self, axis: Axis, value: i64) -> Self {
    let mut c = self.0;
    c[axis.index()] = value;
    Cell(c)
  }

  /// The 8 corners of this cell, as integer-valued relatives, in the
  /// canonical binary-index order (bit 0 = X offset, bit 1 = Y, bit 2 = Z).
  pub fn corners(&self) -> [[i64; 3]; 8] {
    let [x, y, z] = self.0;
    [
      [x, y, z],
      [x + 1, y, z],
      [x, y + 1, z],
      [x + 1, y + 1, z],
      [x, y, z + 1],
      [x + 1, y, z + 1],
      [x, y + 1, z + 1],
      [x + 1, y + 1, z + 1],
    ]
  }
}

/// (cell, axis) pair identifying one of a cell's six faces: the lower face
/// along `axis`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Surfel {
  pub cell: Cell,
  pub axis: Axis,
}

impl Surfel {
  pub fn new(cell: Cell, axis: Axis) -> Self {
    Self { cell, axis }
  }
}

/// Three ordered, strictly-increasing sequences of plane coordinates, one
/// per axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
  planes: [Vec<f64>; 3],
}

impl Grid {
  /// Build a grid from its three plane sequences, validating that each is
  /// strictly increasing and has at least 2 entries.
  pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> MeshResult<Self> {
    for (name, axis) in [("x", &x), ("y", &y), ("z", &z)] {
      if axis.len() < 2 {
        return Err(MeshError::InvalidInput(format!(
          "grid axis {name} has fewer than 2 planes"
        )));
      }
      if !axis.windows(2).all(|w| w[0] < w[1]) {
        return Err(MeshError::InvalidInput(format!(
          "grid axis {name} is not strictly increasing"
        )));
      }
    }
    Ok(Self { planes: [x, y, z] })
  }

  pub fn planes(&self, axis: Axis) -> &[f64] {
    &self.planes[axis.index()]
  }

  /// Number of planes along `axis` (one more than the number of cells).
  pub fn plane_count(&self, axis: Axis) -> usize {
    self.planes(axis).len()
  }

  /// Number of cells along `axis`.
  pub fn cell_count(&self, axis: Axis) -> usize {
    self.plane_count(axis) - 1
  }

  pub fn min_corner(&self) -> Coordinate {
    Coordinate::new(self.planes[0][0], self.planes[1][0], self.planes[2][0])
  }

  pub fn max_corner(&self) -> Coordinate {
    Coordinate::new(
      *self.planes[0].last().unwrap(),
      *self.planes[1].last().unwrap(),
      *self.planes[2].last().unwrap(),
    )
  }

  /// Convert an absolute coordinate to relative (grid-step) units, per axis,
  /// via piecewise-affine interpolation between the bracketing planes.
  pub fn absolute_to_relative(&self, absolute: Coordinate) -> MeshResult<Coordinate> {
    let mut out = [0.0; 3];
    for axis in Axis::ALL {
      out[axis.index()] = self.absolute_to_relative_1d(axis, absolute.component(axis.index()))?;
    }
    Ok(Coordinate::new(out[0], out[1], out[2]))
  }

  fn absolute_to_relative_1d(&self, axis: Axis, value: f64) -> MeshResult<f64> {
    let planes = self.planes(axis);
    let n = planes.len();
    if value < planes[0] || value > planes[n - 1] {
      return Err(MeshError::DomainError([value, value, value]));
    }
    // Find the bracketing interval [planes[k], planes[k+1]].
    let mut k = match planes.binary_search_by(|p| p.partial_cmp(&value).unwrap()) {
      Ok(idx) => idx.min(n - 2),
      Err(idx) => idx.saturating_sub(1).min(n - 2),
    };
    if k + 1 >= n {
      k = n - 2;
    }
    let (lo, hi) = (planes[k], planes[k + 1]);
    let t = if (hi - lo).abs() < f64::EPSILON {
      0.0
    } else {
      (value - lo) / (hi - lo)
    };
    Ok(k as f64 + t)
  }

  /// Convert a relative coordinate back to absolute units.
  pub fn relative_to_absolute(&self, relative: Coordinate) -> MeshResult<Coordinate> {
    let mut out = [0.0; 3];
    for axis in Axis::ALL {
      out[axis.index()] = self.relative_to_absolute_1d(axis, relative.component(axis.index()))?;
    }
    Ok(Coordinate::new(out[0], out[1], out[2]))
  }

  fn relative_to_absolute_1d(&self, axis: Axis, value: f64) -> MeshResult<f64> {
    let planes = self.planes(axis);
    let n = planes.len();
    let max_k = (n - 2) as f64;
    if value < -f64::EPSILON || value > max_k + 1.0 + f64::EPSILON {
      return Err(MeshError::DomainError([value, value, value]));
    }
    let k = (value.floor() as i64).clamp(0, n as i64 - 2) as usize;
    let t = value - k as f64;
    Ok(planes[k] + t * (planes[k + 1] - planes[k]))
  }

  /// For each axis, inserts midpoints of every primal interval and a
  /// half-step outside each boundary, doubling (plus two) the plane count.
  /// Used by the drivers to build the "enlarged slicing grid".
  pub fn extended_dual_grid(&self) -> Grid {
    let axes = Axis::ALL.map(|axis| {
      let p = self.planes(axis);
      let first_step = p[1] - p[0];
      let last_step = p[p.len() - 1] - p[p.len() - 2];
      let mut out = Vec::with_capacity(p.len() * 2 + 1);
      out.push(p[0] - first_step / 2.0);
      for w in p.windows(2) {
        out.push(w[0]);
        out.push((w[0] + w[1]) / 2.0);
      }
      out.push(p[p.len() - 1]);
      out.push(p[p.len() - 1] + last_step / 2.0);
      out
    });
    let [x, y, z] = axes;
    Grid::new(x, y, z).expect("extended dual grid of a valid grid is valid")
  }
}

/// `n` evenly spaced samples between `min` and `max` inclusive. `n` must be
/// at least 2.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
  assert!(n >= 2, "linspace requires at least 2 points");
  let step = (max - min) / (n - 1) as f64;
  (0..n).map(|i| min + step * i as f64).collect()
}

/// Builds a cubic Cartesian grid with `n` planes per axis between `min` and
/// `max` on every axis.
pub fn build_cartesian_grid(min: f64, max: f64, n: usize) -> MeshResult<Grid> {
  Grid::new(
    linspace(min, max, n),
    linspace(min, max, n),
    linspace(min, max, n),
  )
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
