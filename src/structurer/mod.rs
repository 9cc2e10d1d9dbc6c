//! Maps sliced, collapsed meshes onto purely grid-aligned primitives.

mod staircase;
mod structurer;
mod triangle;

pub use structurer::{get_selective_mesh, structure};
