//! VTK I/O
use crate::{error::Result, traits::Mesh, types::CoordinateType};
use std::fs;

pub trait VtkExport: Mesh {
    //! Mesh export to the legacy VTK format

    /// Generate the VTK string for a mesh with positions in the given coordinate system
    fn to_vtk_string(&self, coordinate_type: CoordinateType) -> String;

    /// Export as VTK
    fn export_as_vtk(&self, filename: &str, coordinate_type: CoordinateType) -> Result<()> {
        let vtk_s = self.to_vtk_string(coordinate_type);
        fs::write(filename, vtk_s)?;
        Ok(())
    }
}
