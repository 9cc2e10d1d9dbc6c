//! Reduces a sliced mesh to tolerance-clean form: rounds coordinates to a
//! decimal factor, fuses coincident vertices, collapses near-collinear
//! triangles, and removes duplicated elements.

use crate::collapser::redundancy::{
  clean_coords, collapse_coords_in_line_degenerate_triangles, fuse_coords, remove_repeated_elements,
};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Runs the full Collapser pipeline against `input`, rounding coordinates to
/// `decimal_places` decimal digits.
pub fn collapse(input: &Mesh, decimal_places: i32) -> MeshResult<Mesh> {
  let mut mesh = input.clone();
  let factor = 10f64.powi(decimal_places);

  for coord in &mut mesh.coordinates {
    *coord = coord.round(factor);
  }

  fuse_coords(&mut mesh);
  clean_coords(&mut mesh);

  let area_threshold = 0.4 / (factor * factor);
  collapse_coords_in_line_degenerate_triangles(&mut mesh, area_threshold).map_err(
    |(group_index, element_index)| MeshError::DegenerateAfterCollapse {
      group: mesh.groups[group_index].id,
      element: element_index,
    },
  )?;

  remove_repeated_elements(&mut mesh);
  check_no_null_areas(&mesh, area_threshold)?;

  Ok(mesh)
}

fn check_no_null_areas(mesh: &Mesh, area_threshold: f64) -> MeshResult<()> {
  use crate::geometry::predicates::area;

  for group in &mesh.groups {
    for (element_index, element) in group.elements.iter().enumerate() {
      if !element.is_triangle() {
        continue;
      }
      let v = &element.vertices;
      let a = area(mesh.coordinates[v[0]], mesh.coordinates[v[1]], mesh.coordinates[v[2]]);
      if a < area_threshold {
        return Err(MeshError::DegenerateAfterCollapse {
          group: group.id,
          element: element_index,
        });
      }
    }
  }
  Ok(())
}

#[cfg(test)]
#[path = "collapser_test.rs"]
mod collapser_test;
