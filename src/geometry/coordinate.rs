//! `Coordinate`: an ordered triple of doubles with the arithmetic, rounding
//! and quantised-equality operations the core needs.
//!
//! `glam::DVec3` already provides elementwise arithmetic, dot/cross and norm;
//! this newtype adds the two things it doesn't: decimal rounding and a
//! hashable key usable once coordinates have been quantised.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use glam::DVec3;

/// A point or vector in 3-D space, double precision.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coordinate(pub DVec3);

impl Coordinate {
  pub const ZERO: Coordinate = Coordinate(DVec3::ZERO);

  #[inline]
  pub fn new(x: f64, y: f64, z: f64) -> Self {
    Self(DVec3::new(x, y, z))
  }

  #[inline]
  pub fn x(&self) -> f64 {
    self.0.x
  }
  #[inline]
  pub fn y(&self) -> f64 {
    self.0.y
  }
  #[inline]
  pub fn z(&self) -> f64 {
    self.0.z
  }

  #[inline]
  pub fn component(&self, axis: usize) -> f64 {
    self.0[axis]
  }

  #[inline]
  pub fn with_component(&self, axis: usize, value: f64) -> Self {
    let mut v = self.0;
    v[axis] = value;
    Self(v)
  }

  #[inline]
  pub fn dot(&self, other: &Self) -> f64 {
    self.0.dot(other.0)
  }

  #[inline]
  pub fn cross(&self, other: &Self) -> Self {
    Self(self.0.cross(other.0))
  }

  #[inline]
  pub fn norm(&self) -> f64 {
    self.0.length()
  }

  #[inline]
  pub fn normalized(&self) -> Self {
    Self(self.0.normalize())
  }

  #[inline]
  pub fn lerp(&self, other: &Self, t: f64) -> Self {
    Self(self.0.lerp(other.0, t))
  }

  /// Round every component to the nearest multiple of `1 / factor`.
  ///
  /// `factor` is `10^decimal_places`, matching the Collapser's contract.
  #[inline]
  pub fn round(&self, factor: f64) -> Self {
    Self(DVec3::new(
      (self.0.x * factor).round() / factor,
      (self.0.y * factor).round() / factor,
      (self.0.z * factor).round() / factor,
    ))
  }

  /// A key usable in a `HashMap`/`HashSet` once the coordinate has already
  /// been rounded to `factor` via [`Coordinate::round`]. Quantises to
  /// integer units of `1 / factor` so bit-identical rounded doubles always
  /// hash and compare equal.
  #[inline]
  pub fn quantized_key(&self, factor: f64) -> QuantizedKey {
    QuantizedKey(
      (self.0.x * factor).round() as i64,
      (self.0.y * factor).round() as i64,
      (self.0.z * factor).round() as i64,
    )
  }

  /// Bit-exact key for grouping coordinates that must compare equal without
  /// any tolerance — used by the Collapser's fuse step once coordinates have
  /// already been rounded, so "same value" and "same bits" coincide.
  #[inline]
  pub fn exact_key(&self) -> (u64, u64, u64) {
    (self.0.x.to_bits(), self.0.y.to_bits(), self.0.z.to_bits())
  }

  /// True if every component is integer-valued within
  /// [`crate::geometry::tolerance::APPROX_DIR_TOLERANCE`].
  pub fn is_integer_valued(&self) -> bool {
    (0..3).all(|a| {
      let c = self.component(a);
      (c - c.round()).abs() < crate::geometry::tolerance::APPROX_DIR_TOLERANCE
    })
  }
}

/// Hashable key for a [`Coordinate`] that has already been quantised to a
/// fixed decimal factor. Two coordinates that round to the same value
/// produce the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantizedKey(pub i64, pub i64, pub i64);

impl From<DVec3> for Coordinate {
  fn from(v: DVec3) -> Self {
    Self(v)
  }
}

impl From<Coordinate> for DVec3 {
  fn from(c: Coordinate) -> Self {
    c.0
  }
}

impl Index<usize> for Coordinate {
  type Output = f64;
  fn index(&self, axis: usize) -> &f64 {
    &self.0[axis]
  }
}

impl Add for Coordinate {
  type Output = Coordinate;
  fn add(self, rhs: Self) -> Self {
    Self(self.0 + rhs.0)
  }
}

impl Sub for Coordinate {
  type Output = Coordinate;
  fn sub(self, rhs: Self) -> Self {
    Self(self.0 - rhs.0)
  }
}

impl Neg for Coordinate {
  type Output = Coordinate;
  fn neg(self) -> Self {
    Self(-self.0)
  }
}

impl Mul<f64> for Coordinate {
  type Output = Coordinate;
  fn mul(self, rhs: f64) -> Self {
    Self(self.0 * rhs)
  }
}

impl Div<f64> for Coordinate {
  type Output = Coordinate;
  fn div(self, rhs: f64) -> Self {
    Self(self.0 / rhs)
  }
}

#[cfg(test)]
#[path = "coordinate_test.rs"]
mod coordinate_test;
