//! RON I/O
use crate::{error::Result, traits::Mesh};
use std::fs;

pub trait ConvertToSerializable: Sized {
    //! Convert to/from a serializable type
    type SerializableType: serde::Serialize;
    /// Convert to serializable
    fn to_serializable(&self) -> Self::SerializableType;
    /// Convert from serializable
    fn from_serializable(s: Self::SerializableType) -> Result<Self>;
}

pub trait RONExport: Mesh {
    //! Mesh export for RON

    /// Generate the RON string for a mesh
    fn to_ron_string(&self) -> Result<String>;

    /// Export as RON
    fn export_as_ron(&self, filename: &str) -> Result<()> {
        let ron_s = self.to_ron_string()?;
        fs::write(filename, ron_s)?;
        Ok(())
    }
}

pub trait RONImport: Sized + Mesh {
    //! Mesh import for RON

    /// Create a mesh from a RON string
    fn from_ron_string(s: &str) -> Result<Self>;

    /// Import from RON
    fn import_from_ron(filename: &str) -> Result<Self> {
        let content = fs::read_to_string(filename)?;
        Self::from_ron_string(&content)
    }
}
