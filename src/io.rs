//! I/O
#[cfg(feature = "serde")]
mod ron;
mod vtk;
