//! Columnar sequence container.

#[allow(clippy::module_inception)]
mod vector;

pub use vector::Vector;
