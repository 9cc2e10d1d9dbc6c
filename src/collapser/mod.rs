//! Tolerance-quantisation and duplicate/degenerate element removal.

mod collapser;
pub mod redundancy;

pub use collapser::collapse;
