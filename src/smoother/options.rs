//! Tunables for the Smoother, not currently surfaced on the public driver
//! options but needed internally; follows the same `with_*`/`Default`
//! builder convention as the driver-level options.

/// Angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmootherOptions {
  /// Triangles whose normals differ by more than this are treated as
  /// belonging to different smooth sets; vertices where such a boundary
  /// meets are singular (pinned).
  pub feature_detection_angle: f64,
  /// How closely a vertex must already align with a cell edge/face before
  /// `collapse_points_on_contour` treats it as already on that contour.
  pub contour_alignment_angle: f64,
}

impl Default for SmootherOptions {
  fn default() -> Self {
    Self {
      feature_detection_angle: 0.6, // ~34 degrees
      contour_alignment_angle: 0.3, // ~17 degrees
    }
  }
}

impl SmootherOptions {
  pub fn with_feature_detection_angle(mut self, angle: f64) -> Self {
    self.feature_detection_angle = angle;
    self
  }

  pub fn with_contour_alignment_angle(mut self, angle: f64) -> Self {
    self.contour_alignment_angle = angle;
    self
  }
}
