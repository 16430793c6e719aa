//! Functions to create simple example meshes

mod cube;

pub use cube::{regular_mesh, unit_cube, unit_interval, unit_square};
